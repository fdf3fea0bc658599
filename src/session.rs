//! One signed-in session of the app.
//!
//! The session owns the cart and the order ledger and is handed explicitly to
//! whatever renders or drives it. It is created at start-up and reset on
//! logout.

use std::{fmt, sync::Arc};

use chrono::NaiveTime;
use tracing::info;

use crate::{
    cart::CartStore,
    catalog::Catalog,
    config::CartConfig,
    error::{CartError, CheckoutError},
    model::Order,
    orders::OrderLedger,
};


pub const PICKUP_LOCATION: &str = "College Canteen - Ground Floor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub student_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub total_orders: usize,
    pub amount_spent: u64,
}

// User-facing notices raised by cart and checkout actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ItemAdded { name: String },
    ItemUnavailable { name: String },
    QuantityLimit { id: String },
    UnknownItem { id: String },
    ConfirmOrder { total: u64 },
    EmptyCart,
    OrderPlaced { order_id: String, total: u64 },
    LoggedOut,
}

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    config: CartConfig,
    profile: Profile,
    pub cart: CartStore,
    pub ledger: OrderLedger,
}


impl Profile {
    pub fn student() -> Self {
        Profile {
            name: "Rajesh Kumar".to_string(),
            role: "Student".to_string(),
            email: "rajesh.kumar@college.edu".to_string(),
            student_id: "CSE2021001".to_string(),
        }
    }
}


impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::ItemAdded { .. } => "Added to Cart",
            Notice::ItemUnavailable { .. } => "Item Unavailable",
            Notice::QuantityLimit { .. } => "Quantity Limit",
            Notice::UnknownItem { .. } => "Item Not Found",
            Notice::ConfirmOrder { .. } => "Place Order",
            Notice::EmptyCart => "Empty Cart",
            Notice::OrderPlaced { .. } => "Order Placed!",
            Notice::LoggedOut => "Logged Out",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::ItemAdded { name } => format!("{name} has been added to your cart."),
            Notice::ItemUnavailable { .. } => "This item is currently out of stock.".to_string(),
            Notice::QuantityLimit { id } => {
                format!("No more of item {id} can be added to your cart.")
            }
            Notice::UnknownItem { id } => format!("There is no menu item with id {id}."),
            Notice::ConfirmOrder { total } => {
                format!("Total amount: ₹{total}\n\nProceed to place your order?")
            }
            Notice::EmptyCart => {
                "Please add items to your cart before placing an order.".to_string()
            }
            Notice::OrderPlaced { .. } => "Your order has been placed successfully. \
                 You will receive updates on the Orders tab."
                .to_string(),
            Notice::LoggedOut => "You have been logged out successfully.".to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl From<&CartError> for Notice {
    fn from(err: &CartError) -> Self {
        match err {
            CartError::Unavailable { name, .. } => Notice::ItemUnavailable { name: name.clone() },
            CartError::QuantityLimit { id } => Notice::QuantityLimit { id: id.clone() },
        }
    }
}


impl Session {
    pub fn start(catalog: Arc<Catalog>, config: CartConfig) -> Self {
        let ledger = OrderLedger::with_mock_orders(&catalog);
        Session {
            cart: CartStore::new(Arc::clone(&catalog), config.update_policy),
            catalog,
            config,
            profile: Profile::student(),
            ledger,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    // Menu screen "ADD" button
    pub fn add_to_cart(&mut self, item_id: &str) -> Notice {
        let Some(item) = self.catalog.get(item_id) else {
            return Notice::UnknownItem {
                id: item_id.to_string(),
            };
        };
        match self.cart.add_item(item) {
            Ok(()) => Notice::ItemAdded {
                name: item.name.clone(),
            },
            Err(err) => Notice::from(&err),
        }
    }

    // The confirmation prompt shown before checkout
    pub fn review(&self) -> Notice {
        if self.cart.is_empty() {
            Notice::EmptyCart
        } else {
            Notice::ConfirmOrder {
                total: self.cart.total(),
            }
        }
    }

    /// Turns the cart into an order and empties the cart. An empty cart is
    /// rejected without touching anything.
    pub fn checkout(&mut self, now: NaiveTime) -> Result<Order, CheckoutError> {
        let order = self.ledger.place_order(self.cart.entries(), now)?;
        self.cart.clear();
        Ok(order)
    }

    // Checkout reported the way the cart screen reports it
    pub fn checkout_notice(&mut self, now: NaiveTime) -> Notice {
        match self.checkout(now) {
            Ok(order) => Notice::OrderPlaced {
                order_id: order.id,
                total: order.total,
            },
            Err(CheckoutError::EmptyCart) => Notice::EmptyCart,
        }
    }

    pub fn stats(&self) -> ProfileStats {
        ProfileStats {
            total_orders: self.ledger.len(),
            amount_spent: self.ledger.amount_spent(),
        }
    }

    // Drops the cart and order history and starts over
    pub fn logout(&mut self) -> Notice {
        info!(user = %self.profile.student_id, "session reset");
        *self = Session::start(Arc::clone(&self.catalog), self.config);
        Notice::LoggedOut
    }
}
