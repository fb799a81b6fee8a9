//! # Core Application Logic
//!
//! This module contains Scribe's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (form+outcome) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │  Backend   │
//!          │  Adapter   │                │  client    │
//!          │ (ratatui)  │                │ (reqwest)  │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all page state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings with a defaults → file → env → CLI hierarchy
//! - [`words`]: Word counting for the capped inputs

pub mod action;
pub mod config;
pub mod state;
pub mod words;
