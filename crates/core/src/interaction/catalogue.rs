//! In-memory interaction rule catalogue.
//!
//! The catalogue is loaded from `interactions.yaml` once at startup and is immutable afterwards,
//! so it can be shared between request handlers behind an `Arc` without locking.
//!
//! ## File format
//!
//! ```yaml
//! rules:
//!   - drug_a: Warfarin
//!     drug_b: Aspirin
//!     kind: drug-drug
//!     severity: high
//!     description: Combination increases bleeding risk significantly
//! ```
//!
//! Lookups are answered from two indexes keyed by normalised name: one for drug-disease rules
//! (indexed under both sides, since either side may be the drug) and one for drug-drug rules
//! (indexed under the sorted pair). Each bucket keeps catalogue file order.

use super::lookup::{LookupError, RuleLookup};
use super::rule::InteractionRule;
use crate::{VaidyaError, VaidyaResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use vaidya_types::{InteractionKind, NormalizedName};

#[derive(Deserialize)]
struct RuleFile {
    #[serde(default)]
    rules: Vec<InteractionRule>,
}

type PairKey = (NormalizedName, NormalizedName);

fn pair_key(first: &NormalizedName, second: &NormalizedName) -> PairKey {
    if first <= second {
        (first.clone(), second.clone())
    } else {
        (second.clone(), first.clone())
    }
}

/// Indexed, read-only set of interaction rules.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalogue {
    rules: Vec<InteractionRule>,
    drug_disease: HashMap<NormalizedName, Vec<usize>>,
    drug_drug: HashMap<PairKey, Vec<usize>>,
}

impl RuleCatalogue {
    /// Builds a catalogue from rules in their authoritative order.
    ///
    /// # Errors
    ///
    /// Returns [`VaidyaError::InvalidInput`] if a rule has a blank name on either side.
    pub fn from_rules(rules: Vec<InteractionRule>) -> VaidyaResult<Self> {
        let mut drug_disease: HashMap<NormalizedName, Vec<usize>> = HashMap::new();
        let mut drug_drug: HashMap<PairKey, Vec<usize>> = HashMap::new();

        for (idx, rule) in rules.iter().enumerate() {
            let (a, b) = (rule.key_a(), rule.key_b());
            if a.is_empty() || b.is_empty() {
                return Err(VaidyaError::InvalidInput(format!(
                    "interaction rule {} has a blank name ({:?} / {:?})",
                    idx + 1,
                    rule.drug_a,
                    rule.drug_b
                )));
            }

            match rule.kind {
                InteractionKind::DrugDisease => {
                    drug_disease.entry(a.clone()).or_default().push(idx);
                    if b != a {
                        drug_disease.entry(b).or_default().push(idx);
                    }
                }
                InteractionKind::DrugDrug => {
                    drug_drug.entry(pair_key(&a, &b)).or_default().push(idx);
                }
            }
        }

        Ok(Self {
            rules,
            drug_disease,
            drug_drug,
        })
    }

    /// Parses a catalogue from YAML text.
    pub fn from_yaml_str(contents: &str) -> VaidyaResult<Self> {
        let file: RuleFile =
            serde_yaml::from_str(contents).map_err(VaidyaError::YamlDeserialization)?;
        Self::from_rules(file.rules)
    }

    /// Loads a catalogue from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `VaidyaError` if the file cannot be read, is not valid YAML, or contains a rule
    /// with a blank name.
    pub fn load(path: &Path) -> VaidyaResult<Self> {
        let contents = fs::read_to_string(path).map_err(VaidyaError::FileRead)?;
        let catalogue = Self::from_yaml_str(&contents)?;
        tracing::info!(
            "loaded {} interaction rules from {}",
            catalogue.len(),
            path.display()
        );
        Ok(catalogue)
    }

    /// All rules in catalogue order.
    pub fn rules(&self) -> &[InteractionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn collect(&self, indexes: Option<&Vec<usize>>) -> Vec<InteractionRule> {
        indexes
            .map(|idxs| idxs.iter().map(|&i| self.rules[i].clone()).collect())
            .unwrap_or_default()
    }
}

impl RuleLookup for RuleCatalogue {
    fn find_drug_disease_rules(
        &self,
        medicine: &NormalizedName,
    ) -> Result<Vec<InteractionRule>, LookupError> {
        Ok(self.collect(self.drug_disease.get(medicine)))
    }

    fn find_drug_drug_rules(
        &self,
        first: &NormalizedName,
        second: &NormalizedName,
    ) -> Result<Vec<InteractionRule>, LookupError> {
        Ok(self.collect(self.drug_drug.get(&pair_key(first, second))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::INTERACTIONS_YAML;
    use tempfile::TempDir;
    use vaidya_types::Severity;

    fn name(s: &str) -> NormalizedName {
        NormalizedName::new(s)
    }

    #[test]
    fn test_seed_catalogue_parses() {
        let catalogue = RuleCatalogue::from_yaml_str(INTERACTIONS_YAML).expect("seed parses");
        assert_eq!(catalogue.len(), 20);

        let kinds = catalogue
            .rules()
            .iter()
            .filter(|r| r.kind == InteractionKind::DrugDisease)
            .count();
        assert_eq!(kinds, 10);
    }

    #[test]
    fn test_drug_disease_lookup_matches_either_side() {
        let catalogue = RuleCatalogue::from_rules(vec![
            InteractionRule::new(
                "Metformin",
                "Kidney Disease",
                InteractionKind::DrugDisease,
                "acidosis",
                Severity::High,
            ),
            InteractionRule::new(
                "Pregnancy",
                "Isotretinoin",
                InteractionKind::DrugDisease,
                "teratogenic",
                Severity::High,
            ),
        ])
        .unwrap();

        let hits = catalogue
            .find_drug_disease_rules(&name("isotretinoin"))
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "teratogenic");

        let hits = catalogue.find_drug_disease_rules(&name("metformin")).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_drug_disease_lookup_ignores_drug_drug_rules() {
        let catalogue = RuleCatalogue::from_yaml_str(INTERACTIONS_YAML).unwrap();

        let hits = catalogue.find_drug_disease_rules(&name("warfarin")).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, InteractionKind::DrugDisease);
    }

    #[test]
    fn test_drug_drug_lookup_is_unordered() {
        let catalogue = RuleCatalogue::from_yaml_str(INTERACTIONS_YAML).unwrap();

        let forward = catalogue
            .find_drug_drug_rules(&name("warfarin"), &name("aspirin"))
            .unwrap();
        let backward = catalogue
            .find_drug_drug_rules(&name("aspirin"), &name("warfarin"))
            .unwrap();

        assert_eq!(forward.len(), 1);
        assert_eq!(forward, backward);
        assert_eq!(forward[0].severity, Severity::High);
    }

    #[test]
    fn test_drug_drug_lookup_keeps_file_order_for_shared_pair() {
        let catalogue = RuleCatalogue::from_rules(vec![
            InteractionRule::new("A", "B", InteractionKind::DrugDrug, "first", Severity::Low),
            InteractionRule::new("C", "D", InteractionKind::DrugDrug, "other", Severity::Low),
            InteractionRule::new("b", "a", InteractionKind::DrugDrug, "second", Severity::High),
        ])
        .unwrap();

        let hits = catalogue
            .find_drug_drug_rules(&name("a"), &name("b"))
            .unwrap();
        let descriptions: Vec<_> = hits.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second"]);
    }

    #[test]
    fn test_unknown_names_return_no_rules() {
        let catalogue = RuleCatalogue::from_yaml_str(INTERACTIONS_YAML).unwrap();

        assert!(catalogue
            .find_drug_disease_rules(&name("unobtainium"))
            .unwrap()
            .is_empty());
        assert!(catalogue
            .find_drug_drug_rules(&name("paracetamol"), &name("aspirin"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_from_rules_rejects_blank_names() {
        let err = RuleCatalogue::from_rules(vec![InteractionRule::new(
            "Warfarin",
            "   ",
            InteractionKind::DrugDrug,
            "broken",
            Severity::High,
        )])
        .expect_err("blank name should be rejected");

        assert!(matches!(err, VaidyaError::InvalidInput(_)));
    }

    #[test]
    fn test_load_reads_file_and_reports_bad_yaml() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("interactions.yaml");

        std::fs::write(&path, INTERACTIONS_YAML).unwrap();
        assert_eq!(RuleCatalogue::load(&path).unwrap().len(), 20);

        std::fs::write(&path, "rules: [[[").unwrap();
        assert!(matches!(
            RuleCatalogue::load(&path),
            Err(VaidyaError::YamlDeserialization(_))
        ));

        let missing = temp_dir.path().join("missing.yaml");
        assert!(matches!(
            RuleCatalogue::load(&missing),
            Err(VaidyaError::FileRead(_))
        ));
    }
}
