//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top line with puzzle title, progress and status
//! - `GridView`: the puzzle grid, borrowed straight from the `Game`
//!
//! ### Stateful Components
//!
//! - `ClueList`: per-direction clue list; its `ClueListState` survives
//!   between frames for scrolling and mouse hit-testing
//!
//! Components receive external data as props, never by reaching into global
//! state. That keeps dependencies explicit and lets tests render them into a
//! `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (top status bar)
//! ├── grid_view.rs   (cells, numbers, letters, cursor)
//! └── clue_list.rs   (Across / Down lists)
//! ```

mod clue_list;
mod grid_view;
mod title_bar;

pub use clue_list::{ClueList, ClueListState};
pub use grid_view::{GridView, cell_at, grid_extent};
pub use title_bar::TitleBar;
