use serde::{Deserialize, Serialize};

use tradegate_core::{ConsumerId, FieldError, PartnerId};

/// End customer owned by a partner.
///
/// Invariant: `partner_id` is set exactly once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumer {
    pub id: ConsumerId,
    pub partner_id: PartnerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Option<String>,
    pub post_code: Option<String>,
    pub city: Option<String>,
}

/// Unvalidated create payload for a consumer.
///
/// Becomes a [`Consumer`] only after field validation passes; until then no
/// owner is attached and nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub post_code: Option<String>,
    pub city: Option<String>,
}

impl ConsumerDraft {
    /// Check field constraints, accumulating every failure rather than
    /// stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if is_blank(&self.first_name) {
            errors.push(FieldError::new("first_name", "first_name is required"));
        }
        if is_blank(&self.last_name) {
            errors.push(FieldError::new("last_name", "last_name is required"));
        }
        match &self.email {
            Some(email) if !email.trim().is_empty() => {
                if !email_is_well_formed(email.trim()) {
                    errors.push(FieldError::new("email", "email is not a valid address"));
                }
            }
            _ => errors.push(FieldError::new("email", "email is required")),
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Promote the draft into a consumer owned by `partner_id`.
    pub fn into_consumer(self, partner_id: PartnerId) -> Result<Consumer, Vec<FieldError>> {
        self.validate()?;

        // validate() guarantees the required fields are present.
        Ok(Consumer {
            id: ConsumerId::new(),
            partner_id,
            first_name: self.first_name.unwrap_or_default().trim().to_string(),
            last_name: self.last_name.unwrap_or_default().trim().to_string(),
            email: self.email.unwrap_or_default().trim().to_string(),
            address: self.address,
            post_code: self.post_code,
            city: self.city,
        })
    }
}

fn is_blank(value: &Option<String>) -> bool {
    match value {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

fn email_is_well_formed(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
