//! Gating on the outcome of upstream session validation.

use crate::{
    Account, Error, NavigationNode, Result, RoleBadge, RoleRequirement, RouteDecision,
    build_navigation, check_route_access, role_badge,
};

/// The result of validating a request's credential.
///
/// Validation itself happens elsewhere; this only carries its outcome so that
/// an unauthenticated request never reaches role resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Authenticated(Account),
    Unauthenticated { reason: String },
}

impl Session {
    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self::Unauthenticated {
            reason: reason.into(),
        }
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            Self::Authenticated(account) => Some(account),
            Self::Unauthenticated { .. } => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Route check that sends unauthenticated requests to the login page.
    pub fn check_route(&self, route: &str) -> RouteDecision {
        match self {
            Self::Authenticated(account) => check_route_access(route, Some(account)),
            Self::Unauthenticated { reason } => {
                tracing::debug!(route, reason = %reason, "unauthenticated route check");
                RouteDecision::unauthenticated()
            }
        }
    }

    /// Navigation for the session's account.
    pub fn navigation(&self) -> Result<Vec<NavigationNode>> {
        match self {
            Self::Authenticated(account) => Ok(build_navigation(Some(account))),
            Self::Unauthenticated { reason } => Err(Error::NotAuthenticated(reason.clone())),
        }
    }

    /// Profile badge, absent when there is no verified account.
    pub fn badge(&self) -> Option<RoleBadge> {
        self.account().map(|account| role_badge(Some(account)))
    }

    pub fn satisfies(&self, requirement: &RoleRequirement) -> bool {
        self.is_authenticated() && requirement.is_satisfied_by(self.account())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoleName;

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let session = Session::unauthenticated("invalid token");
        let decision = session.check_route("/dashboard");
        assert!(!decision.has_access);
        assert_eq!(decision.role, None);
        assert_eq!(decision.redirect_to.as_deref(), Some("/auth/login"));
    }

    #[test]
    fn test_unauthenticated_navigation_fails() {
        let session = Session::unauthenticated("no access token");
        let err = session.navigation().unwrap_err();
        assert!(matches!(err, Error::NotAuthenticated(reason) if reason == "no access token"));
        assert!(session.badge().is_none());
    }

    #[test]
    fn test_authenticated_delegates() {
        let session = Session::Authenticated(Account::volunteer());
        let decision = session.check_route("/dashboard/reports");
        assert!(decision.has_access);
        assert_eq!(decision.role, Some(RoleName::Volunteer));
        assert_eq!(session.navigation().unwrap().len(), 4);
        assert_eq!(session.badge().unwrap().role_display, "Volunteer");
    }

    #[test]
    fn test_empty_guard_still_needs_authentication() {
        let open = RoleRequirement::default();
        assert!(Session::Authenticated(Account::member()).satisfies(&open));
        assert!(!Session::unauthenticated("expired").satisfies(&open));
    }
}
