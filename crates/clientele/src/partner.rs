use serde::{Deserialize, Serialize};

use tradegate_core::PartnerId;

/// Partner account: the tenant boundary.
///
/// Provisioned out of band (fixtures), immutable thereafter. Owns zero or
/// more consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
}

impl Partner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PartnerId::new(),
            name: name.into(),
        }
    }
}
