//! # Shelter Architecture
//!
//! Shelter is a **UI-agnostic catalog library** for a pet-adoption shelter: it keeps
//! the list of adoptable cats and dogs, persists it, and answers "show me the
//! female cats" style questions. The `shelter` binary is one client of it; an
//! adoption website or a kiosk app could be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Installs the tracing subscriber                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Opens the catalog, dispatches to commands                │
//! │  - Parses selectors (index, range, id, name)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) over the Catalog             │
//! │  - Add, update, remove, filter                              │
//! │  - Every mutation is saved before it returns                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait: load with seed/repair, save          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; user-facing outcomes come back as
//! [`commands::CmdMessage`]s inside a [`commands::CmdResult`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`catalog`]: The in-memory catalog and its save-after-mutate contract
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, blob encoding, seed and repair policy
//! - [`model`]: Core data types (`Pet`, `PetDetails`, `Species`, `Gender`)
//! - [`description`]: The labelled profile text stored with each pet
//! - [`seed`]: The default catalog written on first run
//! - [`index`]: Display indexes and selectors
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod description;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod seed;
pub mod store;

#[cfg(test)]
mod test_utils;
