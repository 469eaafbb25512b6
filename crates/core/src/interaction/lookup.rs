//! The rule lookup capability.
//!
//! The evaluator never owns interaction rules; it queries whatever rule store the caller hands
//! it. Implementations must be shareable across request handlers, hence the `Send + Sync` bound.

use super::rule::InteractionRule;
use vaidya_types::NormalizedName;

/// The rule store could not answer a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Query interface over a set of interaction rules.
///
/// Names passed in are already normalised. Results keep the store's own rule order.
pub trait RuleLookup: Send + Sync {
    /// Drug-disease rules where either side equals `medicine`.
    fn find_drug_disease_rules(
        &self,
        medicine: &NormalizedName,
    ) -> Result<Vec<InteractionRule>, LookupError>;

    /// Drug-drug rules whose two sides equal `{first, second}` in either order.
    fn find_drug_drug_rules(
        &self,
        first: &NormalizedName,
        second: &NormalizedName,
    ) -> Result<Vec<InteractionRule>, LookupError>;
}

impl<T: RuleLookup + ?Sized> RuleLookup for std::sync::Arc<T> {
    fn find_drug_disease_rules(
        &self,
        medicine: &NormalizedName,
    ) -> Result<Vec<InteractionRule>, LookupError> {
        (**self).find_drug_disease_rules(medicine)
    }

    fn find_drug_drug_rules(
        &self,
        first: &NormalizedName,
        second: &NormalizedName,
    ) -> Result<Vec<InteractionRule>, LookupError> {
        (**self).find_drug_drug_rules(first, second)
    }
}
