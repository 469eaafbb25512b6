//! Prescription interaction evaluation.
//!
//! [`evaluate`] cross-references a submitted medicine list against a patient's diseases and
//! against itself, using a caller-supplied [`RuleLookup`], and aggregates the severities of what
//! it finds into a [`Verdict`].
//!
//! ## Matching
//!
//! Every name is reduced to a [`NormalizedName`] (trimmed, lowercased) for matching. Labels in the
//! output always use the text exactly as submitted.
//!
//! 1. **Drug-disease**: for each medicine in submission order, every drug-disease rule naming the
//!    medicine on either side is fetched. The opposite side is taken as the disease and tested
//!    against the patient's diseases.
//! 2. **Drug-drug**: for each pair of positions `i < j`, every drug-drug rule naming both
//!    medicines (in either order) is fetched. The label is `"{i} + {j}"` in submission order.
//!
//! Drug-disease matches come first, then drug-drug matches, each in discovery order.
//!
//! ## Cost
//!
//! One drug-disease query per medicine and one drug-drug query per pair: `n + n(n-1)/2` lookups
//! for `n` medicines. Nothing is cached between calls.

use super::lookup::{LookupError, RuleLookup};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use vaidya_types::{NormalizedName, Severity, Verdict};

/// One interaction found for a prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionMatch {
    /// The medicine as submitted, or `"first + second"` for a drug-drug match.
    #[serde(rename = "medicine")]
    pub label: String,
    pub description: String,
    pub severity: Severity,
}

/// Outcome of evaluating one prescription.
///
/// The verdict is always derived from the matches; there is no way to set it independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    verdict: Verdict,
    matches: Vec<InteractionMatch>,
}

impl EvaluationResult {
    pub fn from_matches(matches: Vec<InteractionMatch>) -> Self {
        let verdict = Verdict::from_severities(matches.iter().map(|m| m.severity));
        Self { verdict, matches }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn matches(&self) -> &[InteractionMatch] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<InteractionMatch> {
        self.matches
    }
}

struct SubmittedMedicine<'a> {
    original: &'a str,
    key: NormalizedName,
}

/// Evaluates a medicine list against a patient's diseases and the rules behind `lookup`.
///
/// An empty medicine list is vacuously `Safe`; rejecting it is the caller's job.
///
/// # Errors
///
/// Returns the first [`LookupError`] raised by `lookup`. Evaluation stops there and no partial
/// result is produced.
pub fn evaluate<M, D, L>(
    medicines: &[M],
    diseases: &[D],
    lookup: &L,
) -> Result<EvaluationResult, LookupError>
where
    M: AsRef<str>,
    D: AsRef<str>,
    L: RuleLookup + ?Sized,
{
    let submitted: Vec<SubmittedMedicine<'_>> = medicines
        .iter()
        .map(|m| SubmittedMedicine {
            original: m.as_ref(),
            key: NormalizedName::new(m),
        })
        .collect();
    let disease_set: HashSet<NormalizedName> = diseases.iter().map(NormalizedName::new).collect();

    let mut matches = Vec::new();

    for medicine in &submitted {
        for rule in lookup.find_drug_disease_rules(&medicine.key)? {
            if disease_set.contains(&rule.other_side(&medicine.key)) {
                matches.push(InteractionMatch {
                    label: medicine.original.to_string(),
                    description: rule.description,
                    severity: rule.severity,
                });
            }
        }
    }

    for (i, first) in submitted.iter().enumerate() {
        for second in &submitted[i + 1..] {
            for rule in lookup.find_drug_drug_rules(&first.key, &second.key)? {
                matches.push(InteractionMatch {
                    label: format!("{} + {}", first.original, second.original),
                    description: rule.description,
                    severity: rule.severity,
                });
            }
        }
    }

    let result = EvaluationResult::from_matches(matches);
    tracing::debug!(
        medicines = submitted.len(),
        diseases = disease_set.len(),
        matches = result.matches().len(),
        verdict = %result.verdict(),
        "interaction evaluation complete"
    );

    Ok(result)
}
