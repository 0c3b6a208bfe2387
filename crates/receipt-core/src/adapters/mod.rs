//! Adapters Layer
//!
//! Infrastructure implementations of the driven ports.

pub mod memory_store;

pub use memory_store::InMemoryReceiptStore;
