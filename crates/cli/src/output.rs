//! Text and JSON rendering for command results.

use access::{NavigationNode, PermissionSet, Requirement, RoleBadge, RouteDecision};
use serde::Serialize;

pub fn json(value: &impl Serialize, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

pub fn permissions(perms: &PermissionSet) -> String {
    let granted = perms.granted();
    if granted.is_empty() {
        return "(no capabilities)".to_string();
    }
    granted
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn navigation(tree: &[NavigationNode]) -> String {
    let mut lines = Vec::new();
    for node in tree {
        let active = if node.is_active == Some(true) { " *" } else { "" };
        lines.push(format!("{:<20}  {:<32}  [{}]{active}", node.title, node.url, node.icon));
        for child in node.children.iter().flatten() {
            lines.push(format!(
                "  {:<18}  {:<32}  [{}]",
                child.title, child.url, child.icon
            ));
        }
    }
    lines.join("\n")
}

pub fn decision(route: &str, decision: &RouteDecision) -> String {
    let role = decision
        .role
        .map(|r| r.to_string())
        .unwrap_or_else(|| "none".to_string());
    match (&decision.redirect_to, decision.has_access) {
        (_, true) => format!("granted {route} (role: {role})"),
        (Some(target), false) => format!("denied {route} (role: {role}) -> {target}"),
        (None, false) => format!("denied {route} (role: {role})"),
    }
}

pub fn badge(badge: &RoleBadge) -> String {
    format!(
        "{} ({}, {})\n{}",
        badge.role_display,
        badge.role,
        badge.role_color,
        permissions(&badge.permissions)
    )
}

pub fn routes(table: &[(&str, Requirement)]) -> String {
    table
        .iter()
        .map(|(path, requirement)| format!("{path:<32}  {requirement}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use access::{Account, RoleName, build_navigation, role_badge};

    #[test]
    fn test_permissions_text() {
        assert_eq!(permissions(&PermissionSet::none()), "(no capabilities)");
        let text = permissions(&PermissionSet::for_role(RoleName::Volunteer));
        assert_eq!(text, "canViewMembers\ncanViewBranches\ncanViewReports");
    }

    #[test]
    fn test_decision_text() {
        let denied = RouteDecision::denied(RoleName::Volunteer);
        assert_eq!(
            decision("/dashboard/users", &denied),
            "denied /dashboard/users (role: volunteer) -> /dashboard"
        );
        let anon = RouteDecision::unauthenticated();
        assert_eq!(
            decision("/dashboard", &anon),
            "denied /dashboard (role: none) -> /auth/login"
        );
    }

    #[test]
    fn test_navigation_text_indents_children() {
        let text = navigation(&build_navigation(Some(&Account::volunteer())));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Dashboard"));
        assert!(lines[0].ends_with("[Home] *"));
        assert!(lines[2].starts_with("  View Members"));
    }

    #[test]
    fn test_badge_text() {
        let text = badge(&role_badge(Some(&Account::superuser())));
        assert!(text.starts_with("Administrator (admin, destructive)\n"));
    }

    #[test]
    fn test_compact_json() {
        let out = json(&RouteDecision::granted(RoleName::Admin), false).unwrap();
        assert_eq!(out, r#"{"hasAccess":true,"role":"admin"}"#);
    }
}
