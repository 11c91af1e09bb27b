//! Permission tiers and the authorization gate.

use serde::Serialize;
use std::fmt;

/// Permission level required to invoke an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    None,
    Operator,
    Admin,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Operator => "operator",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an entry shows up in generated listings.
///
/// Secret entries are still callable; visibility never affects authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Secret,
}

/// A caller's computed admin/operator status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clearance {
    pub is_admin: bool,
    pub is_permissioned: bool,
}

impl Clearance {
    pub const fn new(is_admin: bool, is_permissioned: bool) -> Self {
        Self {
            is_admin,
            is_permissioned,
        }
    }

    /// Compute clearance from guild membership facts.
    ///
    /// Admins are guild administrators or listed admin users. Permissioned
    /// callers are admins, holders of an operator role, or anyone at all when
    /// no operator roles are configured.
    pub fn compute(
        is_guild_admin: bool,
        user_id: &str,
        role_ids: &[String],
        admin_user_ids: &[String],
        operator_roles: &[String],
    ) -> Self {
        let is_admin = is_guild_admin || admin_user_ids.iter().any(|id| id == user_id);
        let is_permissioned = is_admin
            || operator_roles.is_empty()
            || role_ids.iter().any(|r| operator_roles.contains(r));
        Self::new(is_admin, is_permissioned)
    }

    #[inline]
    pub fn permits(self, tier: Tier) -> bool {
        authorize(tier, self.is_admin, self.is_permissioned)
    }
}

/// The permission rule table.
#[inline]
pub fn authorize(required: Tier, caller_is_admin: bool, caller_is_permissioned: bool) -> bool {
    match required {
        Tier::None => true,
        Tier::Operator => caller_is_permissioned,
        Tier::Admin => caller_is_admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_all_nine_combinations() {
        let callers = [
            (false, false),
            (false, true),
            (true, true),
        ];
        let expected = [
            // none, operator, admin
            [true, false, false],
            [true, true, false],
            [true, true, true],
        ];
        for (row, (admin, permissioned)) in callers.into_iter().enumerate() {
            for (col, tier) in [Tier::None, Tier::Operator, Tier::Admin].into_iter().enumerate() {
                assert_eq!(
                    authorize(tier, admin, permissioned),
                    expected[row][col],
                    "tier={tier} admin={admin} permissioned={permissioned}"
                );
            }
        }
    }

    #[test]
    fn test_admin_flag_alone_does_not_grant_operator() {
        // Admins are always computed as permissioned, but the table itself is literal.
        assert!(!authorize(Tier::Operator, true, false));
        assert!(authorize(Tier::Admin, true, false));
    }

    #[test]
    fn test_compute_clearance() {
        let roles = vec!["r1".to_string()];
        let ops = vec!["r2".to_string()];
        let admins = vec!["u9".to_string()];

        let c = Clearance::compute(false, "u1", &roles, &admins, &ops);
        assert_eq!(c, Clearance::new(false, false));

        let c = Clearance::compute(false, "u1", &roles, &admins, &[]);
        assert_eq!(c, Clearance::new(false, true));

        let c = Clearance::compute(false, "u1", &["r2".to_string()], &admins, &ops);
        assert_eq!(c, Clearance::new(false, true));

        let c = Clearance::compute(false, "u9", &roles, &admins, &ops);
        assert_eq!(c, Clearance::new(true, true));

        let c = Clearance::compute(true, "u1", &roles, &admins, &ops);
        assert!(c.permits(Tier::Admin));
    }
}
