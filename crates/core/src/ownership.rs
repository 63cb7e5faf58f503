//! Tenant ownership check for per-tenant resources.

use crate::id::PartnerId;

/// Outcome of an ownership check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

/// Decide whether a caller acting as `requested` may touch a resource owned
/// by `owner`.
///
/// Pure decision function: no IO, no panics. A missing resource never reaches
/// this check (the service maps absence to not-found first), and how a
/// `Denied` surfaces (not-found on reads, ownership violation on deletes) is
/// the service layer's concern.
pub fn authorize(requested: PartnerId, owner: PartnerId) -> Decision {
    if owner == requested {
        Decision::Allowed
    } else {
        Decision::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_allowed() {
        let partner = PartnerId::new();
        assert_eq!(authorize(partner, partner), Decision::Allowed);
    }

    #[test]
    fn other_tenant_is_denied() {
        let decision = authorize(PartnerId::new(), PartnerId::new());
        assert_eq!(decision, Decision::Denied);
        assert!(!decision.is_allowed());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use uuid::Uuid;

        fn partner_id() -> impl Strategy<Value = PartnerId> {
            any::<u128>().prop_map(|raw| PartnerId::from_uuid(Uuid::from_u128(raw)))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: allowed exactly when both identifiers are equal.
            #[test]
            fn allowed_iff_same_partner(a in partner_id(), b in partner_id()) {
                let decision = authorize(a, b);
                prop_assert_eq!(decision.is_allowed(), a == b);
            }
        }
    }
}
