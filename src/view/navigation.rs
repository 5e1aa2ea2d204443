//! Role-aware navigation menu.

use serde::Serialize;

use crate::models::user::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Roles allowed to see the entry; `None` means everyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<&'static [UserRole]>,
}

pub const MENU: [MenuItem; 6] = [
    MenuItem { path: "/", label: "Dashboard", icon: "📊", roles: None },
    MenuItem { path: "/equipment", label: "Equipment", icon: "🔧", roles: None },
    MenuItem { path: "/requests", label: "Requests", icon: "📝", roles: None },
    MenuItem { path: "/kanban", label: "Kanban Board", icon: "📋", roles: None },
    MenuItem { path: "/calendar", label: "Calendar", icon: "📅", roles: None },
    MenuItem { path: "/teams", label: "Teams", icon: "👥", roles: Some(&[UserRole::Manager]) },
];

pub fn is_visible(item: &MenuItem, role: UserRole) -> bool {
    item.roles.map_or(true, |roles| roles.contains(&role))
}

/// Menu entries visible to `role`, in display order.
pub fn visible_menu(role: UserRole) -> Vec<MenuItem> {
    MENU.iter().filter(|item| is_visible(item, role)).copied().collect()
}
