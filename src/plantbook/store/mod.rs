//! # Storage Layer
//!
//! This module defines the storage abstraction for plantbook. The [`PlantStore`] trait
//! is the only mutation surface for plant records; everything above it (commands, the
//! record view controller, the API facade) is generic over it.
//!
//! ## Ownership
//!
//! A store is an ordinary value. The application constructs exactly one at startup,
//! hands it to [`crate::api::PlantbookApi`], and every screen reaches it through that
//! handle. There is no global instance.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the catalog used by the application and its tests
//!   - Insertion order preserved, updates in place
//!   - Ids from a monotonic counter owned by the store
//!   - Lives as long as the process; nothing is written to disk
//!
//! ## Identity Rules
//!
//! - `id` is assigned by the store at creation and never reassigned or reused
//! - `created_at` is stamped once, at creation
//! - `update` replaces `name`, `notes` and `photo` only
//!
//! The store does not validate names. Callers (the record view controller) guard that.

use crate::error::Result;
use crate::model::{PlantFields, PlantId, PlantRecord};

pub mod memory;

/// Abstract interface for plant storage.
pub trait PlantStore {
    /// Create a record from `fields`, assigning a fresh id and creation time.
    fn create(&mut self, fields: PlantFields) -> Result<PlantRecord>;

    /// Replace the editable fields of the record `id`.
    ///
    /// Fails with [`crate::error::PlantbookError::PlantNotFound`] when no record has
    /// that id; the collection is left unchanged in that case.
    fn update(&mut self, id: PlantId, fields: PlantFields) -> Result<PlantRecord>;

    /// All records in insertion order
    fn list(&self) -> Result<Vec<PlantRecord>>;

    /// Look up a record by id
    fn find(&self, id: PlantId) -> Result<Option<PlantRecord>>;
}
