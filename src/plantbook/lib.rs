//! # Plantbook Architecture
//!
//! Plantbook is a **UI-agnostic plant catalog library**: you record the plants you own
//! (a name, optional notes, an optional photo, and the moment you added it), then browse,
//! view and edit them. The terminal client in `main.rs` is one presentation of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses session commands, prints screens and messages     │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the one store of the running application            │
//! │  - Thin facade over commands and record views               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record View Controller (record_view.rs)                    │
//! │  - Viewing / Editing / Creating per screen                  │
//! │  - Owns drafts, validates names, commits on save            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / update / list / view / config                   │
//! │  - Returns records plus user-facing messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PlantStore trait, InMemoryStore                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads flow store → view → presentation. Writes flow presentation → draft → store, and
//! only on save.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns `Result` values, and
//! never writes to stdout/stderr. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`record_view`]: The view/edit state machine for one record
//! - [`commands`]: Store-facing operations
//! - [`store`]: Storage abstraction and the in-memory catalog
//! - [`model`]: `PlantId`, `PlantRecord`, `PlantFields`
//! - [`photo`]: Photo acquisition seam
//! - [`config`]: Display and photo preferences
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod photo;
pub mod record_view;
pub mod store;
