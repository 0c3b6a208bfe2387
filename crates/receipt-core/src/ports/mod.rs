//! Ports Layer
//!
//! - Driving Port (inbound) - API the HTTP layer calls
//! - Driven Port (outbound) - receipt storage

pub mod inbound;
pub mod outbound;

pub use inbound::ReceiptProcessorApi;
pub use outbound::ReceiptStore;
