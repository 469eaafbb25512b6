//! Interaction checking.
//!
//! - [`rule`]: the interaction rule record as stored in the rule catalogue
//! - [`lookup`]: the [`RuleLookup`] capability the evaluator queries
//! - [`catalogue`]: an indexed, in-memory [`RuleLookup`] loaded from YAML
//! - [`evaluator`]: the evaluation routine producing an [`EvaluationResult`]

pub mod catalogue;
pub mod evaluator;
pub mod lookup;
pub mod rule;

pub use catalogue::RuleCatalogue;
pub use evaluator::{evaluate, EvaluationResult, InteractionMatch};
pub use lookup::{LookupError, RuleLookup};
pub use rule::InteractionRule;
