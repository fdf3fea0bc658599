//! College canteen ordering: a static menu, a session cart, an order ledger
//! with status tracking, and a kitchen simulator that moves placed orders
//! through their statuses.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod kitchen;
pub mod model;
pub mod orders;
pub mod random;
pub mod screens;
pub mod session;
pub mod simulation;
pub mod station;
pub mod status;
pub mod utils;

pub use cart::CartStore;
pub use catalog::{Catalog, CategoryFilter};
pub use config::{Config, UpdatePolicy};
pub use error::Error;
pub use model::{CartEntry, Category, MenuItem, Order, OrderStatus};
pub use orders::OrderLedger;
pub use session::{Notice, Session};
