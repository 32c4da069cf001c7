//! # Core Application Logic
//!
//! This module contains Settle's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Drafts (form input)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`friend`]: The `Friend` entity and balance wording
//! - [`state`]: The `App` struct holding all application state
//! - [`action`]: The `Action` enum and `update()`
//! - [`draft`]: Uncommitted input for the add-friend and split-bill forms
//! - [`config`]: Layered configuration (file, env, CLI)

pub mod action;
pub mod config;
pub mod draft;
pub mod friend;
pub mod state;
