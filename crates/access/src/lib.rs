//! Role-derived permissions, navigation, and route guarding for the
//! organization dashboard.
//!
//! Everything here is a pure function of an [`Account`]'s flags:
//!
//! - [`resolve_role`] classifies the account (admin > staff > volunteer > member)
//! - [`resolve_permissions`] derives the ten view/manage capabilities
//! - [`build_navigation`] builds the menu tree those capabilities unlock
//! - [`check_route_access`] decides whether a dashboard route may be opened
//! - [`role_badge`] summarizes the role for profile display
//!
//! Resolution never fails. An absent account is treated as a member with no
//! capabilities. Requests without a verified session are handled by
//! [`Session`] before any of the above runs.
//!
//! # Example
//!
//! ```
//! use access::{Account, RoleName, build_navigation, check_route_access, resolve_role};
//!
//! let account = Account::parse(r#"{"is_staff_account": true}"#)?;
//! assert_eq!(resolve_role(Some(&account)), RoleName::Staff);
//!
//! let nav = build_navigation(Some(&account));
//! assert_eq!(nav[0].title, "Dashboard");
//!
//! let decision = check_route_access("/dashboard/users/add", Some(&account));
//! assert!(!decision.has_access);
//! assert_eq!(decision.redirect_to.as_deref(), Some("/dashboard"));
//! # Ok::<(), access::Error>(())
//! ```

mod account;
mod badge;
mod error;
mod guard;
mod navigation;
mod permission;
mod role;
mod route;
mod session;

pub use account::Account;
pub use badge::{RoleBadge, role_badge};
pub use error::{Error, Result};
pub use guard::RoleRequirement;
pub use navigation::{Icon, NavigationNode, build_navigation, navigation_for};
pub use permission::{Action, Capability, Domain, PermissionSet, resolve_permissions};
pub use role::{RoleColor, RoleName, held_roles, resolve_role};
pub use route::{
    DASHBOARD_ROUTE, LOGIN_ROUTE, Requirement, RouteDecision, check_route_access,
    requirement_for, routes,
};
pub use session::Session;
