use serde::{Deserialize, Serialize};
use vaidya_types::{InteractionKind, NormalizedName, Severity};

/// A single interaction rule from the rule catalogue.
///
/// `drug_a` and `drug_b` are free text. For [`InteractionKind::DrugDisease`] rules one side is a
/// drug and the other a disease, but the rule does not say which; see
/// [`InteractionRule::other_side`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRule {
    #[serde(alias = "drug_name_1")]
    pub drug_a: String,
    #[serde(alias = "drug_name_2")]
    pub drug_b: String,
    #[serde(alias = "interaction_type")]
    pub kind: InteractionKind,
    pub description: String,
    pub severity: Severity,
}

impl InteractionRule {
    pub fn new(
        drug_a: impl Into<String>,
        drug_b: impl Into<String>,
        kind: InteractionKind,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            drug_a: drug_a.into(),
            drug_b: drug_b.into(),
            kind,
            description: description.into(),
            severity,
        }
    }

    pub fn key_a(&self) -> NormalizedName {
        NormalizedName::new(&self.drug_a)
    }

    pub fn key_b(&self) -> NormalizedName {
        NormalizedName::new(&self.drug_b)
    }

    /// Returns the normalised name on the side that is not `name`.
    ///
    /// `drug_a` is checked first: when it matches, `drug_b` is the other side; in every other
    /// case `drug_a` is. For a drug-disease rule looked up by medicine, this yields the disease.
    pub fn other_side(&self, name: &NormalizedName) -> NormalizedName {
        if self.key_a() == *name {
            self.key_b()
        } else {
            self.key_a()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metformin_kidney(reversed: bool) -> InteractionRule {
        let (a, b) = if reversed {
            ("Kidney Disease ", "METFORMIN")
        } else {
            ("Metformin", " kidney disease")
        };
        InteractionRule::new(
            a,
            b,
            InteractionKind::DrugDisease,
            "lactic acidosis",
            Severity::High,
        )
    }

    #[test]
    fn test_other_side_finds_disease_in_either_column() {
        let medicine = NormalizedName::new("metformin");
        let disease = NormalizedName::new("kidney disease");

        assert_eq!(metformin_kidney(false).other_side(&medicine), disease);
        assert_eq!(metformin_kidney(true).other_side(&medicine), disease);
    }

    #[test]
    fn test_deserialises_legacy_column_names() {
        let yaml = "drug_name_1: Statins\ndrug_name_2: Liver Disease\ninteraction_type: drug-disease\ndescription: worsens liver function\nseverity: medium\n";
        let rule: InteractionRule = serde_yaml::from_str(yaml).expect("legacy names parse");

        assert_eq!(rule.drug_a, "Statins");
        assert_eq!(rule.kind, InteractionKind::DrugDisease);
        assert_eq!(rule.severity, Severity::Medium);
    }
}
