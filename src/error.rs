use std::path::PathBuf;

use thiserror::Error;


// Rejections from the cart store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("{name} is currently out of stock")]
    Unavailable { id: String, name: String },

    #[error("quantity of item {id} is at its limit")]
    QuantityLimit { id: String },
}

// Placing an order from the cart
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
}

// Order ledger lookups and transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("unknown order {0}")]
    UnknownOrder(String),

    #[error("order {0} is already completed")]
    AlreadyCompleted(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

// Kitchen submission failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KitchenError {
    #[error("{0} station is closed")]
    StationClosed(&'static str),

    #[error("kitchen task failed: {0}")]
    TaskFailed(String),

    #[error("order {order_id} lost {missing} unit(s) before completion")]
    Unfinished { order_id: String, missing: usize },
}

// Everything the binary can fail with
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Kitchen(#[from] KitchenError),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
