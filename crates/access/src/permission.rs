//! Capabilities and the per-account permission set.

use crate::{Account, RoleName, resolve_role};
use serde::{Deserialize, Serialize};

/// A dashboard resource domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Members,
    Branches,
    Reports,
    Settings,
    Users,
}

/// What a capability permits within a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Manage,
}

/// A single named permission, e.g. `canManageBranches`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub domain: Domain,
    pub action: Action,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Members,
        Domain::Branches,
        Domain::Reports,
        Domain::Settings,
        Domain::Users,
    ];

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Members => "Members",
            Self::Branches => "Branches",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
            Self::Users => "Users",
        }
    }
}

impl Capability {
    pub const fn view(domain: Domain) -> Self {
        Self {
            domain,
            action: Action::View,
        }
    }

    pub const fn manage(domain: Domain) -> Self {
        Self {
            domain,
            action: Action::Manage,
        }
    }

    /// The camelCase name used on the wire (`canViewMembers`).
    pub fn name(&self) -> String {
        let verb = match self.action {
            Action::View => "View",
            Action::Manage => "Manage",
        };
        format!("can{verb}{}", self.domain.title())
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Ten independent view/manage flags over the five domains.
///
/// `can_manage_*` is expected to imply `can_view_*`, but nothing here
/// enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_view_members: bool,
    pub can_manage_members: bool,
    pub can_view_branches: bool,
    pub can_manage_branches: bool,
    pub can_view_reports: bool,
    pub can_manage_reports: bool,
    pub can_view_settings: bool,
    pub can_manage_settings: bool,
    pub can_view_users: bool,
    pub can_manage_users: bool,
}

impl PermissionSet {
    /// No capabilities.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every capability.
    pub fn all() -> Self {
        Self {
            can_view_members: true,
            can_manage_members: true,
            can_view_branches: true,
            can_manage_branches: true,
            can_view_reports: true,
            can_manage_reports: true,
            can_view_settings: true,
            can_manage_settings: true,
            can_view_users: true,
            can_manage_users: true,
        }
    }

    /// The fixed capability grant for a role.
    pub fn for_role(role: RoleName) -> Self {
        match role {
            RoleName::Admin => Self::all(),
            RoleName::Staff => Self {
                can_view_members: true,
                can_manage_members: true,
                can_view_branches: true,
                can_view_reports: true,
                can_view_settings: true,
                can_view_users: true,
                ..Self::none()
            },
            RoleName::Volunteer => Self {
                can_view_members: true,
                can_view_branches: true,
                can_view_reports: true,
                ..Self::none()
            },
            RoleName::Member => Self::none(),
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        match (capability.domain, capability.action) {
            (Domain::Members, Action::View) => self.can_view_members,
            (Domain::Members, Action::Manage) => self.can_manage_members,
            (Domain::Branches, Action::View) => self.can_view_branches,
            (Domain::Branches, Action::Manage) => self.can_manage_branches,
            (Domain::Reports, Action::View) => self.can_view_reports,
            (Domain::Reports, Action::Manage) => self.can_manage_reports,
            (Domain::Settings, Action::View) => self.can_view_settings,
            (Domain::Settings, Action::Manage) => self.can_manage_settings,
            (Domain::Users, Action::View) => self.can_view_users,
            (Domain::Users, Action::Manage) => self.can_manage_users,
        }
    }

    pub fn can_view(&self, domain: Domain) -> bool {
        self.allows(Capability::view(domain))
    }

    pub fn can_manage(&self, domain: Domain) -> bool {
        self.allows(Capability::manage(domain))
    }

    /// Granted capabilities, domain by domain, view before manage.
    pub fn granted(&self) -> Vec<Capability> {
        Domain::ALL
            .iter()
            .flat_map(|&d| [Capability::view(d), Capability::manage(d)])
            .filter(|&c| self.allows(c))
            .collect()
    }
}

/// Derive the permission set for an account.
///
/// Strict precedence: an account that is both staff and volunteer gets the
/// staff grant only. An absent account gets nothing.
pub fn resolve_permissions(account: Option<&Account>) -> PermissionSet {
    let Some(account) = account else {
        return PermissionSet::none();
    };
    PermissionSet::for_role(resolve_role(Some(account)))
}
