//! Interfaces to the external collaborators this core consumes.
//!
//! All traits are object-safe and `Send + Sync`; the engine borrows them as
//! trait objects so tests can substitute hermetic in-memory fakes.

mod services;
mod store;

pub use services::{CompletionService, Embedder, ServiceResult};
pub use store::{EntityStore, LinkStore, StoreResult};
