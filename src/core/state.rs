//! # Application State
//!
//! Core business state for the crossword. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── game: Option<Game>        // None while idle (loading, or load failed)
//! ├── source_name: String       // where the puzzle comes from
//! ├── status_message: String    // status bar text
//! ├── is_loading: bool          // fetch in flight
//! └── error: Option<String>     // last load failure
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::game::Game;

pub struct App {
    pub game: Option<Game>,
    pub source_name: String,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl App {
    pub fn new(source_name: String) -> Self {
        Self {
            game: None,
            source_name,
            status_message: String::from("Welcome to Crossword!"),
            is_loading: false,
            error: None,
        }
    }

    /// Heading for the title bar: puzzle title once loaded.
    pub fn title(&self) -> &str {
        self.game
            .as_ref()
            .and_then(|game| game.model().title())
            .unwrap_or("Crossword")
    }
}
