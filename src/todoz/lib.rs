//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo-list library** with a small terminal client.
//! The library owns the list and its persistence; clients only render what it
//! returns and forward user actions to it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, renders lists, runs $EDITOR            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade returning structured CmdResult values        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TodoStore (todo_store.rs)                                  │
//! │  - Owns the list, the filter and the next id                │
//! │  - Persists after every mutation                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure functions over the todo list                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BlobStore trait: get/set/remove a string by key          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process, and never assumes a terminal. The same core could sit behind a web
//! page or a TUI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`todo_store`]: The todo collection and its write-through persistence
//! - [`commands`]: Pure list transformations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Todo`, `TodoId`, `Filter`)
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod store;
pub mod todo_store;
