//! # Receipt Core
//!
//! Receipt validation and reward-points scoring.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `validation`: field-shape checks run before a receipt is stored
//!   - `points`: the independent, additive scoring rules
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ReceiptProcessorApi`: Driving port (inbound API)
//!   - `ReceiptStore`: Driven port (storage)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `ReceiptService`: Implements `ReceiptProcessorApi`
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `InMemoryReceiptStore`: process-lifetime storage
//!
//! ## Invariants
//!
//! - A receipt is stored only after it passes validation, and is never
//!   modified or removed afterwards.
//! - Scoring a stored receipt never fails; unparsable subfields contribute
//!   zero points.
//!
//! ## Usage Example
//!
//! ```
//! use receipt_core::{InMemoryReceiptStore, Item, ReceiptProcessorApi, ReceiptService, ReceiptSubmission};
//! use std::sync::Arc;
//!
//! let service = ReceiptService::new(Arc::new(InMemoryReceiptStore::new()));
//! let id = service
//!     .process(ReceiptSubmission {
//!         retailer: "Test Retailer".into(),
//!         purchase_date: "2024-12-18".into(),
//!         purchase_time: "12:00".into(),
//!         items: vec![Item::new("Test Item", "10.00")],
//!         total: "10.00".into(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(service.points(&id).unwrap(), 89);
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::InMemoryReceiptStore;
pub use domain::{
    Item, PointsBreakdown, Receipt, ReceiptError, ReceiptId, ReceiptSubmission, ValidationError,
};
pub use ports::{ReceiptProcessorApi, ReceiptStore};
pub use service::ReceiptService;
