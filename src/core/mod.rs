//! # Core Filter Logic
//!
//! Everything that decides which lines pass. It knows nothing about
//! terminals, raw mode or key events.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • LineBuffer (input)   │
//!                    │  • Session (state)      │
//!                    │  • CommandTable (keys)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (crossterm)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`line`]: lazily filled, append-only buffer of input lines
//! - [`selection`]: per-line accept/reject decisions
//! - [`state`]: the `Session` struct: cursor, decisions, flags
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`command`]: key bindings, availability and dispatch
//! - [`output`]: writes accepted lines once the session ends

pub mod action;
pub mod command;
pub mod line;
pub mod output;
pub mod selection;
pub mod state;
