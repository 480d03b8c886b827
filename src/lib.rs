// Receipt Processor - Core Library
// Exposes validation, scoring, and storage for the CLI, API server, and tests

pub mod config;
pub mod money;
pub mod points;
pub mod receipt;
pub mod store;
pub mod validation;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use config::ServerConfig;
pub use money::Cents;
pub use points::{calculate_points, PointsBreakdown};
pub use receipt::{process_receipt, Receipt};
pub use store::{InMemoryReceiptStore, ReceiptStore};
pub use validation::{
    validate_item, validate_price, validate_purchase_datetime, validate_receipt,
    validate_retailer, validate_total, Item, RawItem, RawReceipt, ValidatedReceipt,
    ValidationError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
