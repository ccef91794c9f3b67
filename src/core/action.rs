//! # Actions
//!
//! Everything that can happen in the crossword becomes an `Action`.
//! User presses Tab? That's `Action::Tab`.
//! The loader finishes? That's `Action::PuzzleLoaded(model)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Grid actions arriving while no puzzle is loaded are ignored.

use std::fmt;

use log::{debug, info, warn};

use crate::core::game::Game;
use crate::core::grid::{Direction, Pos, PuzzleModel};
use crate::core::navigation::Arrow;
use crate::core::state::App;

pub enum Action {
    /// (Re)load the puzzle: drops the current game and starts a fetch.
    Load,
    PuzzleLoaded(Box<PuzzleModel>),
    LoadFailed(String),
    Arrow(Arrow),
    Tab,
    /// Type (`Some`) or erase (`None`) a letter at a cell.
    Input { pos: Pos, value: Option<char> },
    ClickCell(Pos),
    ClickClue { direction: Direction, number: u32 },
    Check,
    Reveal,
    Reset,
    Quit,
}

// Manual impl so a loaded model is summarized instead of dumped into the log.
impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Load => write!(f, "Load"),
            Action::PuzzleLoaded(model) => write!(
                f,
                "PuzzleLoaded({}x{}, {} words)",
                model.size(),
                model.size(),
                model.word_count()
            ),
            Action::LoadFailed(message) => write!(f, "LoadFailed({message:?})"),
            Action::Arrow(arrow) => write!(f, "Arrow({arrow:?})"),
            Action::Tab => write!(f, "Tab"),
            Action::Input { pos, value } => write!(f, "Input({pos}, {value:?})"),
            Action::ClickCell(pos) => write!(f, "ClickCell({pos})"),
            Action::ClickClue { direction, number } => {
                write!(f, "ClickClue({number} {direction})")
            }
            Action::Check => write!(f, "Check"),
            Action::Reveal => write!(f, "Reveal"),
            Action::Reset => write!(f, "Reset"),
            Action::Quit => write!(f, "Quit"),
        }
    }
}

/// I/O the event loop performs after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    SpawnLoad,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,
        Action::Load => {
            app.game = None;
            app.error = None;
            app.is_loading = true;
            app.status_message = format!("Loading puzzle from {}...", app.source_name);
            Effect::SpawnLoad
        }
        Action::PuzzleLoaded(model) => {
            info!(
                "Puzzle loaded: {:?}, {} words",
                model.title().unwrap_or("untitled"),
                model.word_count()
            );
            app.is_loading = false;
            app.error = None;
            app.status_message = match model.author() {
                Some(author) => format!("by {author}"),
                None => String::new(),
            };
            app.game = Some(Game::new(*model));
            Effect::None
        }
        Action::LoadFailed(message) => {
            warn!("Puzzle load failed: {}", message);
            app.is_loading = false;
            app.game = None;
            app.status_message = String::from("No puzzle available");
            app.error = Some(message);
            Effect::None
        }
        action => {
            if let Some(game) = app.game.as_mut() {
                if let Some(status) = apply(game, action) {
                    app.status_message = status;
                }
            }
            Effect::None
        }
    }
}

/// Applies a grid action; returns a new status message if it warrants one.
fn apply(game: &mut Game, action: Action) -> Option<String> {
    match action {
        Action::Arrow(arrow) => game.arrow(arrow),
        Action::Tab => game.tab(),
        Action::Input { pos, value } => game.input(pos, value),
        Action::ClickCell(pos) => game.click_cell(pos),
        Action::ClickClue { direction, number } => game.click_clue(direction, number),
        Action::Check => {
            let solved = game.is_solved();
            info!("Solution check: solved={}", solved);
            return Some(if solved {
                String::from("Solved! Every answer is correct.")
            } else {
                let (filled, total) = game.progress();
                format!("Not solved yet ({filled}/{total} filled)")
            });
        }
        Action::Reveal => {
            game.reveal();
            return Some(String::from("Solution revealed"));
        }
        Action::Reset => {
            game.reset();
            return Some(String::from("Answers cleared"));
        }
        Action::Quit | Action::Load | Action::PuzzleLoaded(_) | Action::LoadFailed(_) => {}
    }
    None
}
