//! # Core Application Logic
//!
//! The crossword's business logic. It knows nothing about any specific UI
//! technology or where a puzzle comes from.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Model (grid, words)  │
//!                    │  • Game (cursor, fills) │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   Loader   │
//!          │  Adapter   │                │ (HTTP/file │
//!          │ (ratatui)  │                │ /embedded) │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`puzzle`]: wire formats a puzzle arrives in
//! - [`grid`]: the validated, immutable `PuzzleModel`
//! - [`navigation`]: the cursor state machine
//! - [`answers`]: the player's letters and the solution check
//! - [`game`]: one puzzle being played
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod answers;
pub mod config;
pub mod game;
pub mod grid;
pub mod navigation;
pub mod puzzle;
pub mod state;
