//! Entity specific actions
//!
//! Actions outside the generic fetch lifecycle, handled by the extension
//! hooks of individual collection reducers.

use crate::domain_models::{AttributeTerm, EntityKey, Variation};

/// The variation list of one product has been fetched
#[derive(Debug, Clone, PartialEq)]
pub struct VariationsLoaded {
    pub product: EntityKey,
    pub variations: Vec<Variation>,
}

/// The term list of one attribute has been fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsLoaded {
    pub attribute: EntityKey,
    pub terms: Vec<AttributeTerm>,
}
