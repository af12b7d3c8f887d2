//! Role classification.
//!
//! All role precedence lives in [`RULES`]. Permissions, navigation, route
//! checks and the profile badge derive from [`resolve_role`] rather than
//! inspecting account flags themselves.

use crate::{Account, Error, Result};
use serde::{Deserialize, Serialize};

/// Roles in descending precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Staff,
    Volunteer,
    Member,
}

/// Badge variant shown next to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleColor {
    Destructive,
    Default,
    Secondary,
    Outline,
}

type Rule = (fn(&Account) -> bool, RoleName);

/// Ordered role rules. The first matching predicate decides the role;
/// an account matching none is a [`RoleName::Member`].
const RULES: &[Rule] = &[
    (is_admin, RoleName::Admin),
    (is_staff, RoleName::Staff),
    (is_volunteer, RoleName::Volunteer),
];

fn is_admin(account: &Account) -> bool {
    account.is_superuser || account.is_admin_account
}

fn is_staff(account: &Account) -> bool {
    account.is_staff || account.is_staff_account
}

fn is_volunteer(account: &Account) -> bool {
    account.is_volunteer
}

impl RoleName {
    pub const ALL: [RoleName; 4] = [
        RoleName::Admin,
        RoleName::Staff,
        RoleName::Volunteer,
        RoleName::Member,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Volunteer => "volunteer",
            Self::Member => "member",
        }
    }

    /// Human-readable label for profile display.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Staff => "Staff Member",
            Self::Volunteer => "Volunteer",
            Self::Member => "Member",
        }
    }

    pub const fn color(&self) -> RoleColor {
        match self {
            Self::Admin => RoleColor::Destructive,
            Self::Staff => RoleColor::Default,
            Self::Volunteer => RoleColor::Secondary,
            Self::Member => RoleColor::Outline,
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::Parse(format!("unknown role '{s}'")))
    }
}

impl RoleColor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Destructive => "destructive",
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
        }
    }
}

impl std::fmt::Display for RoleColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an account. An absent account is a member.
pub fn resolve_role(account: Option<&Account>) -> RoleName {
    let role = account
        .and_then(|a| RULES.iter().find(|(matches, _)| matches(a)))
        .map(|&(_, role)| role)
        .unwrap_or(RoleName::Member);
    tracing::trace!(?account, %role, "resolved role");
    role
}

/// Every role whose rule the account satisfies, in precedence order.
///
/// Unlike [`resolve_role`] this does not stop at the first match. An account
/// matching no rule holds only [`RoleName::Member`].
pub fn held_roles(account: Option<&Account>) -> Vec<RoleName> {
    let mut roles: Vec<RoleName> = match account {
        Some(a) => RULES
            .iter()
            .filter(|(matches, _)| matches(a))
            .map(|&(_, role)| role)
            .collect(),
        None => Vec::new(),
    };
    if roles.is_empty() {
        roles.push(RoleName::Member);
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superuser_beats_everything() {
        let account = Account {
            is_superuser: true,
            is_staff: true,
            is_volunteer: true,
            ..Account::default()
        };
        assert_eq!(resolve_role(Some(&account)), RoleName::Admin);
    }

    #[test]
    fn test_staff_beats_volunteer() {
        let account = Account::staff_account().merge(Account::volunteer());
        assert_eq!(resolve_role(Some(&account)), RoleName::Staff);
    }

    #[test]
    fn test_absent_account_is_member() {
        assert_eq!(resolve_role(None), RoleName::Member);
        assert_eq!(resolve_role(Some(&Account::member())), RoleName::Member);
    }

    #[test]
    fn test_held_roles_collects_all_matches() {
        let account = Account::superuser().merge(Account::volunteer());
        assert_eq!(
            held_roles(Some(&account)),
            vec![RoleName::Admin, RoleName::Volunteer]
        );
        assert_eq!(held_roles(None), vec![RoleName::Member]);
    }

    #[test]
    fn test_parse_role_name() {
        assert_eq!("staff".parse::<RoleName>().unwrap(), RoleName::Staff);
        assert!("Staff".parse::<RoleName>().is_err());
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(RoleName::Admin.color(), RoleColor::Destructive);
        assert_eq!(RoleName::Staff.color(), RoleColor::Default);
        assert_eq!(RoleName::Volunteer.color(), RoleColor::Secondary);
        assert_eq!(RoleName::Member.color(), RoleColor::Outline);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RoleName::Volunteer).unwrap(),
            r#""volunteer""#
        );
        assert_eq!(
            serde_json::to_string(&RoleColor::Destructive).unwrap(),
            r#""destructive""#
        );
    }
}
