//! # Instafix Architecture
//!
//! Instafix turns a short description of a personal problem into three pieces of
//! guidance: an insight, a quick plan and a list of immediate actions. The text
//! comes from a hosted model asked for structured (schema-constrained) output.
//!
//! Like any client of this kind, the interesting parts are not the terminal: they
//! are the request/response contract, the saved-fix store and the session state
//! machine. Those live in the library; the binary is one UI over them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards, runs the session loop   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (controller.rs)                                 │
//! │  - Session state: Idle / Submitting / Displaying / Failed   │
//! │  - Owns the current fix, saved fixes and theme              │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                             │
//!                 ▼                             ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Service (service/)           │ │  Saved fixes (saved.rs)   │
//! │  - FixGenerator trait         │ │  - Ordered, newest first  │
//! │  - Gemini structured output   │ │  - Persist on every change│
//! └───────────────────────────────┘ └───────────────────────────┘
//!                                               │
//!                                               ▼
//!                               ┌───────────────────────────────┐
//!                               │  Storage (store/)             │
//!                               │  - Keyed string entries       │
//!                               │  - File and in-memory backends│
//!                               └───────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the controller inward, code takes Rust values and returns Rust values. It
//! never prints and never exits. Persistence and the model endpoint are injected
//! (`Storage`, `FixGenerator`), which is also how the tests drive it.
//!
//! ## Module Overview
//!
//! - [`controller`]: Session state machine and user operations
//! - [`service`]: Fix request service and the Gemini client
//! - [`saved`]: Saved fix store
//! - [`store`]: Keyed storage abstraction and implementations
//! - [`model`]: Core data types (`FixResult`, `FixPayload`, `Card`, `Theme`)
//! - [`theme`]: Theme preference persistence and system fallback
//! - [`config`]: Configuration and API key lookup
//! - [`init`]: Wiring a controller from the environment
//! - [`clipboard`]: Copy/share text and system clipboard support
//! - [`error`]: Error types

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod init;
pub mod model;
pub mod saved;
pub mod service;
pub mod store;
pub mod theme;
