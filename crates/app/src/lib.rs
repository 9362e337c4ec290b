//! # App Crate
//!
//! The user-facing recommendation client: view state, rendering, and the
//! interactive event loop live here. The binary (`cine-recs`) adds the
//! command-line surface on top.
//!
//! ## Main Components
//!
//! - **state**: `ViewState` and the pure transition logic driving the UI
//! - **ui**: ratatui rendering of the selector, trigger, spinner, error
//!   region, and result list

pub mod state;
pub mod ui;
