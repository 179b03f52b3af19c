use serde::Serialize;

use crate::entities::Role;

#[derive(Debug, Serialize)]
pub struct SidebarItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SidebarGroup {
    pub title: &'static str,
    pub items: &'static [SidebarItem],
}

const fn item(id: &'static str, label: &'static str) -> SidebarItem {
    SidebarItem { id, label }
}

const BUYER: &[SidebarGroup] = &[
    SidebarGroup {
        title: "Main",
        items: &[
            item("overview", "Dashboard"),
            item("subscriptions", "My Subscriptions"),
            item("orders", "Order History"),
        ],
    },
    SidebarGroup {
        title: "System",
        items: &[item("settings", "Settings")],
    },
];

const SELLER: &[SidebarGroup] = &[
    SidebarGroup {
        title: "Main",
        items: &[
            item("overview", "Dashboard"),
            item("orders", "Orders"),
            item("products", "My Products"),
        ],
    },
    SidebarGroup {
        title: "Insights",
        items: &[item("earnings", "Earnings"), item("analytics", "Analytics")],
    },
    SidebarGroup {
        title: "System",
        items: &[item("settings", "Store Settings")],
    },
];

const ADMIN: &[SidebarGroup] = &[
    SidebarGroup {
        title: "Main",
        items: &[
            item("overview", "Dashboard"),
            item("orders", "Orders"),
            item("subscriptions", "Subscriptions"),
            item("products", "Products"),
            item("inventory", "Inventory"),
        ],
    },
    SidebarGroup {
        title: "Business",
        items: &[
            item("suppliers", "Suppliers"),
            item("users", "Customers"),
            item("payments", "Payments"),
        ],
    },
    SidebarGroup {
        title: "Insights",
        items: &[item("reports", "Reports"), item("analytics", "Analytics")],
    },
    SidebarGroup {
        title: "System",
        items: &[
            item("settings", "Settings"),
            item("admin-users", "Admin Users"),
        ],
    },
];

/// Sidebar layout for a role's dashboard.
#[must_use]
pub const fn sidebar_for(role: Role) -> &'static [SidebarGroup] {
    match role {
        Role::Buyer => BUYER,
        Role::Seller => SELLER,
        Role::Admin => ADMIN,
    }
}
