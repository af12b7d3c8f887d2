//! Role-based guards over the roles an account holds.

use crate::{Account, RoleName, held_roles};
use serde::{Deserialize, Serialize};

/// A set of roles an account must hold, any or all of them.
///
/// Guards look at every role an account holds (see [`held_roles`]), not just
/// its primary role, so a superuser who volunteers passes a volunteer guard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    #[serde(default)]
    pub roles: Vec<RoleName>,

    #[serde(default)]
    pub require_all: bool,
}

impl RoleRequirement {
    /// Satisfied by holding any one of `roles`.
    pub fn any(roles: impl IntoIterator<Item = RoleName>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            require_all: false,
        }
    }

    /// Satisfied only by holding every one of `roles`.
    pub fn all(roles: impl IntoIterator<Item = RoleName>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            require_all: true,
        }
    }

    pub fn admin() -> Self {
        Self::any([RoleName::Admin])
    }

    pub fn staff() -> Self {
        Self::any([RoleName::Staff])
    }

    pub fn volunteer() -> Self {
        Self::any([RoleName::Volunteer])
    }

    pub fn admin_or_staff() -> Self {
        Self::any([RoleName::Admin, RoleName::Staff])
    }

    /// Check an account against the requirement. An empty role list is
    /// always satisfied.
    pub fn is_satisfied_by(&self, account: Option<&Account>) -> bool {
        if self.roles.is_empty() {
            return true;
        }

        let held = held_roles(account);
        if self.require_all {
            self.roles.iter().all(|role| held.contains(role))
        } else {
            self.roles.iter().any(|role| held.contains(role))
        }
    }
}
