//! Route guarding.

use crate::{Account, Capability, Domain, PermissionSet, RoleName, resolve_permissions, resolve_role};
use serde::{Deserialize, Serialize};

/// Where a denied dashboard request is sent.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Where a request without a verified session is sent.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// What a route demands of the permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Any authenticated account.
    Always,
    Capability(Capability),
}

impl Requirement {
    pub fn is_met(&self, permissions: &PermissionSet) -> bool {
        match self {
            Self::Always => true,
            Self::Capability(capability) => permissions.allows(*capability),
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Always => f.write_str("always"),
            Self::Capability(capability) => write!(f, "{capability}"),
        }
    }
}

const fn view(domain: Domain) -> Requirement {
    Requirement::Capability(Capability::view(domain))
}

const fn manage(domain: Domain) -> Requirement {
    Requirement::Capability(Capability::manage(domain))
}

/// Dashboard routes and their requirements. Matched by exact string only.
const ROUTES: &[(&str, Requirement)] = &[
    ("/dashboard", Requirement::Always),
    ("/dashboard/members", view(Domain::Members)),
    ("/dashboard/members/add", manage(Domain::Members)),
    ("/dashboard/members/manage", manage(Domain::Members)),
    ("/dashboard/branches", view(Domain::Branches)),
    ("/dashboard/branches/add", manage(Domain::Branches)),
    ("/dashboard/branches/manage", manage(Domain::Branches)),
    ("/dashboard/reports", view(Domain::Reports)),
    ("/dashboard/reports/create", manage(Domain::Reports)),
    ("/dashboard/reports/manage", manage(Domain::Reports)),
    ("/dashboard/users", view(Domain::Users)),
    ("/dashboard/users/add", manage(Domain::Users)),
    ("/dashboard/users/manage", manage(Domain::Users)),
    ("/dashboard/users/roles", manage(Domain::Users)),
    ("/dashboard/settings", view(Domain::Settings)),
    ("/dashboard/settings/system", manage(Domain::Settings)),
    ("/dashboard/settings/security", manage(Domain::Settings)),
];

/// The full route table, in declaration order.
pub fn routes() -> &'static [(&'static str, Requirement)] {
    ROUTES
}

/// The requirement for an exact route, if it is mapped.
pub fn requirement_for(route: &str) -> Option<Requirement> {
    ROUTES
        .iter()
        .find(|(path, _)| *path == route)
        .map(|&(_, requirement)| requirement)
}

/// Outcome of a route check. The caller performs any redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDecision {
    pub has_access: bool,
    /// Absent only when no account was available to classify.
    pub role: Option<RoleName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
}

impl RouteDecision {
    pub fn granted(role: RoleName) -> Self {
        Self {
            has_access: true,
            role: Some(role),
            redirect_to: None,
        }
    }

    pub fn denied(role: RoleName) -> Self {
        Self {
            has_access: false,
            role: Some(role),
            redirect_to: Some(DASHBOARD_ROUTE.to_string()),
        }
    }

    /// Denial for a request that never reached role resolution.
    pub fn unauthenticated() -> Self {
        Self {
            has_access: false,
            role: None,
            redirect_to: Some(LOGIN_ROUTE.to_string()),
        }
    }
}

/// Decide whether an account may open `route`.
///
/// Unmapped routes are denied. No normalization is applied, so
/// `/dashboard/` and `/dashboard` are different routes.
pub fn check_route_access(route: &str, account: Option<&Account>) -> RouteDecision {
    let role = resolve_role(account);
    let permissions = resolve_permissions(account);

    let decision = match requirement_for(route) {
        Some(requirement) if requirement.is_met(&permissions) => RouteDecision::granted(role),
        _ => RouteDecision::denied(role),
    };

    tracing::debug!(route, %role, has_access = decision.has_access, "checked route access");
    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_always_open() {
        let decision = check_route_access("/dashboard", None);
        assert!(decision.has_access);
        assert_eq!(decision.role, Some(RoleName::Member));
        assert_eq!(decision.redirect_to, None);
    }

    #[test]
    fn test_unmapped_route_denied_for_admin() {
        let decision = check_route_access("/unknown/route", Some(&Account::superuser()));
        assert!(!decision.has_access);
        assert_eq!(decision.role, Some(RoleName::Admin));
        assert_eq!(decision.redirect_to.as_deref(), Some("/dashboard"));
    }

    #[test]
    fn test_exact_match_only() {
        let admin = Account::admin_account();
        assert!(!check_route_access("/dashboard/", Some(&admin)).has_access);
        assert!(!check_route_access("/dashboard/members/", Some(&admin)).has_access);
        assert!(!check_route_access("/dashboard/members/add/extra", Some(&admin)).has_access);
        assert!(!check_route_access("/Dashboard", Some(&admin)).has_access);
    }

    #[test]
    fn test_staff_cannot_add_branch() {
        let staff = Account::staff();
        assert!(check_route_access("/dashboard/branches", Some(&staff)).has_access);
        assert!(check_route_access("/dashboard/members/add", Some(&staff)).has_access);
        assert!(!check_route_access("/dashboard/branches/add", Some(&staff)).has_access);
    }

    #[test]
    fn test_requirement_lookup() {
        assert_eq!(requirement_for("/dashboard"), Some(Requirement::Always));
        assert_eq!(
            requirement_for("/dashboard/users/roles"),
            Some(manage(Domain::Users))
        );
        assert_eq!(requirement_for("/auth/login"), None);
        assert_eq!(routes().len(), 17);
    }

    #[test]
    fn test_decision_serialized_shape() {
        let granted = serde_json::to_value(RouteDecision::granted(RoleName::Staff)).unwrap();
        assert_eq!(
            granted,
            serde_json::json!({ "hasAccess": true, "role": "staff" })
        );

        let anon = serde_json::to_value(RouteDecision::unauthenticated()).unwrap();
        assert_eq!(
            anon,
            serde_json::json!({ "hasAccess": false, "role": null, "redirectTo": "/auth/login" })
        );
    }
}
