//! Navigation tree construction.

use crate::{Account, Domain, PermissionSet, RoleName, resolve_permissions};
use serde::{Deserialize, Serialize};

use crate::RoleName::{Admin, Staff, Volunteer};

/// Icon keys emitted for navigation nodes.
///
/// Only the key leaves this crate; renderers map it to their own icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Home,
    Users,
    Building,
    FileText,
    User,
    Settings,
    Shield,
    Eye,
    UserPlus,
    Plus,
    Cog,
}

impl Icon {
    pub const ALL: [Icon; 11] = [
        Icon::Home,
        Icon::Users,
        Icon::Building,
        Icon::FileText,
        Icon::User,
        Icon::Settings,
        Icon::Shield,
        Icon::Eye,
        Icon::UserPlus,
        Icon::Plus,
        Icon::Cog,
    ];

    /// Fallback for an unrecognized top-level icon key.
    pub const TOP_LEVEL_FALLBACK: Icon = Icon::Home;

    /// Fallback for an unrecognized child icon key.
    pub const CHILD_FALLBACK: Icon = Icon::Eye;

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Users => "Users",
            Self::Building => "Building",
            Self::FileText => "FileText",
            Self::User => "User",
            Self::Settings => "Settings",
            Self::Shield => "Shield",
            Self::Eye => "Eye",
            Self::UserPlus => "UserPlus",
            Self::Plus => "Plus",
            Self::Cog => "Cog",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.key() == key)
    }

    /// Look up a key, falling back to `fallback` when it is unknown.
    pub fn from_key_or(key: &str, fallback: Icon) -> Self {
        Self::from_key(key).unwrap_or(fallback)
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A menu entry. Top-level entries may carry one level of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationNode {
    pub title: String,
    pub url: String,
    pub icon: Icon,
    /// Roles the entry is meant for. Informational; not re-checked here.
    pub roles: Vec<RoleName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavigationNode>>,
}

impl NavigationNode {
    fn leaf(entry: &Entry) -> Self {
        Self {
            title: entry.title.to_string(),
            url: entry.url.to_string(),
            icon: entry.icon,
            roles: entry.roles.to_vec(),
            is_active: None,
            children: None,
        }
    }

    /// This node's URL followed by its children's, depth first.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.url.as_str()).chain(
            self.children
                .iter()
                .flatten()
                .map(|child| child.url.as_str()),
        )
    }
}

struct Entry {
    title: &'static str,
    url: &'static str,
    icon: Icon,
    roles: &'static [RoleName],
}

struct Section {
    domain: Domain,
    node: Entry,
    view: Entry,
    manage: &'static [Entry],
}

const DASHBOARD: Entry = Entry {
    title: "Dashboard",
    url: "/dashboard",
    icon: Icon::Home,
    roles: &[Admin, Staff, Volunteer],
};

/// Menu sections in render order.
const SECTIONS: &[Section] = &[
    Section {
        domain: Domain::Members,
        node: Entry {
            title: "Members",
            url: "/dashboard/members",
            icon: Icon::Users,
            roles: &[Admin, Staff, Volunteer],
        },
        view: Entry {
            title: "View Members",
            url: "/dashboard/members",
            icon: Icon::Eye,
            roles: &[Admin, Staff, Volunteer],
        },
        manage: &[
            Entry {
                title: "Add Member",
                url: "/dashboard/members/add",
                icon: Icon::UserPlus,
                roles: &[Admin, Staff],
            },
            Entry {
                title: "Manage Members",
                url: "/dashboard/members/manage",
                icon: Icon::Settings,
                roles: &[Admin, Staff],
            },
        ],
    },
    Section {
        domain: Domain::Branches,
        node: Entry {
            title: "Branches",
            url: "/dashboard/branches",
            icon: Icon::Building,
            roles: &[Admin, Staff, Volunteer],
        },
        view: Entry {
            title: "View Branches",
            url: "/dashboard/branches",
            icon: Icon::Eye,
            roles: &[Admin, Staff, Volunteer],
        },
        manage: &[
            Entry {
                title: "Add Branch",
                url: "/dashboard/branches/add",
                icon: Icon::Plus,
                roles: &[Admin],
            },
            Entry {
                title: "Manage Branches",
                url: "/dashboard/branches/manage",
                icon: Icon::Settings,
                roles: &[Admin],
            },
        ],
    },
    Section {
        domain: Domain::Reports,
        node: Entry {
            title: "Reports",
            url: "/dashboard/reports",
            icon: Icon::FileText,
            roles: &[Admin, Staff, Volunteer],
        },
        view: Entry {
            title: "View Reports",
            url: "/dashboard/reports",
            icon: Icon::Eye,
            roles: &[Admin, Staff, Volunteer],
        },
        manage: &[
            Entry {
                title: "Create Report",
                url: "/dashboard/reports/create",
                icon: Icon::Plus,
                roles: &[Admin],
            },
            Entry {
                title: "Manage Reports",
                url: "/dashboard/reports/manage",
                icon: Icon::Settings,
                roles: &[Admin],
            },
        ],
    },
    Section {
        domain: Domain::Users,
        node: Entry {
            title: "Users",
            url: "/dashboard/users",
            icon: Icon::User,
            roles: &[Admin, Staff],
        },
        view: Entry {
            title: "View Users",
            url: "/dashboard/users",
            icon: Icon::Eye,
            roles: &[Admin, Staff],
        },
        manage: &[
            Entry {
                title: "Add User",
                url: "/dashboard/users/add",
                icon: Icon::UserPlus,
                roles: &[Admin],
            },
            Entry {
                title: "Manage Users",
                url: "/dashboard/users/manage",
                icon: Icon::Settings,
                roles: &[Admin],
            },
            Entry {
                title: "User Roles",
                url: "/dashboard/users/roles",
                icon: Icon::Shield,
                roles: &[Admin],
            },
        ],
    },
    Section {
        domain: Domain::Settings,
        node: Entry {
            title: "Settings",
            url: "/dashboard/settings",
            icon: Icon::Settings,
            roles: &[Admin, Staff],
        },
        view: Entry {
            title: "View Settings",
            url: "/dashboard/settings",
            icon: Icon::Eye,
            roles: &[Admin, Staff],
        },
        manage: &[
            Entry {
                title: "System Settings",
                url: "/dashboard/settings/system",
                icon: Icon::Cog,
                roles: &[Admin],
            },
            Entry {
                title: "Security Settings",
                url: "/dashboard/settings/security",
                icon: Icon::Shield,
                roles: &[Admin],
            },
        ],
    },
];

/// Build the navigation tree for an account.
pub fn build_navigation(account: Option<&Account>) -> Vec<NavigationNode> {
    let tree = navigation_for(&resolve_permissions(account));
    tracing::debug!(nodes = tree.len(), "built navigation");
    tree
}

/// Build the navigation tree for an already-resolved permission set.
///
/// The dashboard entry always comes first; each section follows in fixed
/// order when its view capability is granted.
pub fn navigation_for(permissions: &PermissionSet) -> Vec<NavigationNode> {
    let mut dashboard = NavigationNode::leaf(&DASHBOARD);
    dashboard.is_active = Some(true);

    let mut tree = vec![dashboard];
    for section in SECTIONS {
        if !permissions.can_view(section.domain) {
            continue;
        }

        let mut children = vec![NavigationNode::leaf(&section.view)];
        if permissions.can_manage(section.domain) {
            children.extend(section.manage.iter().map(NavigationNode::leaf));
        }

        let mut node = NavigationNode::leaf(&section.node);
        node.children = Some(children);
        tree.push(node);
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(nodes: &[NavigationNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.title.as_str()).collect()
    }

    fn section<'a>(tree: &'a [NavigationNode], title: &str) -> &'a NavigationNode {
        tree.iter().find(|n| n.title == title).unwrap()
    }

    #[test]
    fn test_member_sees_dashboard_only() {
        let tree = build_navigation(Some(&Account::member()));
        assert_eq!(titles(&tree), vec!["Dashboard"]);
        assert_eq!(tree[0].is_active, Some(true));
        assert!(tree[0].children.is_none());
    }

    #[test]
    fn test_volunteer_sections() {
        let tree = build_navigation(Some(&Account::volunteer()));
        assert_eq!(titles(&tree), vec!["Dashboard", "Members", "Branches", "Reports"]);
        for node in &tree[1..] {
            assert_eq!(node.children.as_ref().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_staff_members_children() {
        let tree = build_navigation(Some(&Account::staff()));
        let members = section(&tree, "Members");
        assert_eq!(
            titles(members.children.as_ref().unwrap()),
            vec!["View Members", "Add Member", "Manage Members"]
        );
        let settings = section(&tree, "Settings");
        assert_eq!(titles(settings.children.as_ref().unwrap()), vec!["View Settings"]);
    }

    #[test]
    fn test_child_role_tags() {
        let tree = build_navigation(Some(&Account::superuser()));
        let branches = section(&tree, "Branches");
        let add = &branches.children.as_ref().unwrap()[1];
        assert_eq!(add.title, "Add Branch");
        assert_eq!(add.roles, vec![RoleName::Admin]);
        assert_eq!(add.icon, Icon::Plus);
    }

    #[test]
    fn test_icon_lookup_falls_back() {
        assert_eq!(Icon::from_key("UserPlus"), Some(Icon::UserPlus));
        assert_eq!(Icon::from_key("Rocket"), None);
        assert_eq!(Icon::from_key_or("Rocket", Icon::CHILD_FALLBACK), Icon::Eye);
    }

    #[test]
    fn test_serialized_shape() {
        let tree = build_navigation(None);
        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "title": "Dashboard",
                "url": "/dashboard",
                "icon": "Home",
                "roles": ["admin", "staff", "volunteer"],
                "isActive": true
            }])
        );
    }
}
