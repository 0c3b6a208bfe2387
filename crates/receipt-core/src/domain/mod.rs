//! Domain Layer
//!
//! Pure business logic with no I/O: receipt entities, field validation,
//! and the points rules.

pub mod entities;
pub mod errors;
pub mod points;
pub mod validation;

pub use entities::{Item, Receipt, ReceiptId, ReceiptSubmission};
pub use errors::{ReceiptError, ValidationError};
pub use points::PointsBreakdown;
