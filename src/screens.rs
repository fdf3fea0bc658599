//! Plain-text renditions of the app's four tabs.

use crate::{
    cart::CartStore,
    catalog::{Catalog, CategoryFilter},
    model::{Order, OrderStatus},
    orders::{format_time, OrderLedger},
    session::{ProfileStats, Profile, PICKUP_LOCATION},
    status::{render_tracker, StatusDisplay},
    utils::format_rupees,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrdersTab {
    #[default]
    Active,
    History,
}


pub fn render_menu(catalog: &Catalog, query: &str, selected: CategoryFilter) -> String {
    let mut lines = vec![
        "College Canteen".to_string(),
        "What would you like to eat today?".to_string(),
        String::new(),
    ];

    let chips: Vec<String> = CategoryFilter::chips()
        .into_iter()
        .map(|c| {
            if c == selected {
                format!("[{}]", c.label())
            } else {
                c.label().to_string()
            }
        })
        .collect();
    lines.push(chips.join("  "));
    lines.push(String::new());

    for item in catalog.filter(query, selected) {
        let button = if item.available { "ADD" } else { "OUT OF STOCK" };
        lines.push(format!(
            "{:>2}. {:<20} {:>6}",
            item.id,
            item.name,
            format_rupees(u64::from(item.price))
        ));
        lines.push(format!("    {}", item.description));
        lines.push(format!(
            "    {} min  [{}]",
            item.preparation_time_minutes, button
        ));
    }

    lines.join("\n")
}


pub fn render_cart(cart: &CartStore) -> String {
    if cart.is_empty() {
        return [
            "Your Cart",
            "",
            "Your cart is empty",
            "Add some delicious items from the menu",
        ]
        .join("\n");
    }

    let mut lines = vec!["Your Cart".to_string(), String::new()];
    for entry in cart.entries() {
        lines.push(format!(
            "{:<20} {:>6} x{:<3} {:>8}",
            entry.item.name,
            format_rupees(u64::from(entry.item.price)),
            entry.quantity,
            format_rupees(entry.line_total())
        ));
    }
    lines.push(String::new());
    lines.push(format!("Total Amount {}", format_rupees(cart.total())));
    lines.join("\n")
}


// One order card
pub fn render_order(order: &Order) -> String {
    let display = StatusDisplay::of(order.status);
    let mut lines = vec![format!(
        "#{}  {}  {} {}",
        order.id,
        format_time(order.order_time),
        display.icon.glyph(),
        display.label
    )];
    lines.push(format!("  {}", render_tracker(order.status)));
    for item in order.items() {
        lines.push(format!("  • {item}"));
    }

    let mut footer = format!("  Total: {}", format_rupees(order.total));
    match (order.status, order.estimated_time) {
        (OrderStatus::Preparing, Some(eta)) => {
            footer.push_str(&format!("  Ready by {}", format_time(eta)));
        }
        (OrderStatus::Ready, _) => footer.push_str("  Ready for pickup!"),
        _ => {}
    }
    lines.push(footer);
    lines.join("\n")
}

pub fn render_orders(ledger: &OrderLedger, tab: OrdersTab) -> String {
    let (orders, empty_title, empty_subtitle) = match tab {
        OrdersTab::Active => (
            ledger.active(),
            "No Active Orders",
            "Place an order from the menu to see it here",
        ),
        OrdersTab::History => (
            ledger.history(),
            "No Order History",
            "Your completed orders will appear here",
        ),
    };

    let mut lines = vec!["Your Orders".to_string(), String::new()];
    if orders.is_empty() {
        lines.push(empty_title.to_string());
        lines.push(empty_subtitle.to_string());
    } else {
        let cards: Vec<String> = orders.into_iter().map(render_order).collect();
        lines.push(cards.join("\n\n"));
    }
    lines.join("\n")
}


// Rows of the profile menu, (title, subtitle)
const PROFILE_OPTIONS: [(&str, &str); 5] = [
    ("Payment Methods", "Manage your payment options"),
    ("Notifications", "Customize your notifications"),
    ("Pickup Location", PICKUP_LOCATION),
    ("Contact Support", "Get help with your orders"),
    ("Help & FAQ", "Find answers to common questions"),
];

const APP_INFO: [&str; 3] = [
    "College Canteen App",
    "Version 1.0.0",
    "Developed for internal use by college students and staff",
];

pub fn render_profile(profile: &Profile, stats: ProfileStats) -> String {
    let mut lines = vec![
        "Profile".to_string(),
        String::new(),
        profile.name.clone(),
        profile.role.clone(),
        profile.email.clone(),
        format!("ID: {}", profile.student_id),
        String::new(),
        format!(
            "{} orders  |  {} spent",
            stats.total_orders,
            format_rupees(stats.amount_spent)
        ),
        String::new(),
    ];
    for (title, subtitle) in PROFILE_OPTIONS {
        lines.push(format!("  {title:<16} {subtitle}  >"));
    }
    lines.push(String::new());
    lines.push("[Logout]".to_string());
    lines.push(String::new());
    lines.extend(APP_INFO.iter().map(|l| l.to_string()));
    lines.join("\n")
}
