//! Compact role summary for profile display.

use crate::{Account, PermissionSet, RoleColor, RoleName, resolve_permissions, resolve_role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBadge {
    pub role: RoleName,
    pub role_display: String,
    pub role_color: RoleColor,
    pub permissions: PermissionSet,
}

/// Summarize an account's role for a profile badge.
pub fn role_badge(account: Option<&Account>) -> RoleBadge {
    let role = resolve_role(account);
    RoleBadge {
        role,
        role_display: role.display_name().to_string(),
        role_color: role.color(),
        permissions: resolve_permissions(account),
    }
}
