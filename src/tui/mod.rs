//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws when something happened: a
//! terminal event or an action arriving from the background load. While a
//! load is in flight the poll timeout is short so the result shows promptly.
//!
//! ## Background Loading
//!
//! `Effect::SpawnLoad` spawns a tokio task running the configured
//! `PuzzleLoader`. Its result comes back as an `Action` over an std mpsc
//! channel, drained between frames. A new load aborts the previous one, so a
//! stale result can never replace a newer puzzle.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, error, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{PuzzleLocation, ResolvedConfig};
use crate::core::grid::Direction;
use crate::core::state::App;
use crate::loader::{EmbeddedLoader, FileLoader, HttpLoader, LoadError, PuzzleLoader, load_puzzle};
use crate::tui::components::ClueListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub across: ClueListState,
    pub down: ClueListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clue_list(&self, direction: Direction) -> &ClueListState {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    pub fn clue_list_mut(&mut self, direction: Direction) -> &mut ClueListState {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (mouse, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, SetCursorStyle::DefaultUserShape);
    }
}

/// Build a loader for the resolved puzzle location.
pub fn build_loader(config: &ResolvedConfig) -> Result<Arc<dyn PuzzleLoader>, LoadError> {
    Ok(match &config.location {
        PuzzleLocation::Url(url) => Arc::new(HttpLoader::new(url.clone(), config.timeout)?),
        PuzzleLocation::File(path) => Arc::new(FileLoader::new(path.clone())),
        PuzzleLocation::Embedded => Arc::new(EmbeddedLoader),
    })
}

/// Translates a terminal event into a core action, given the current state
/// and the frame it was drawn into.
fn action_for(event: TuiEvent, app: &App, tui: &TuiState, frame_area: Rect) -> Option<Action> {
    let cursor = app.game.as_ref().and_then(|game| game.cursor());
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Reload => Some(Action::Load),
        TuiEvent::Check => Some(Action::Check),
        TuiEvent::Reveal => Some(Action::Reveal),
        TuiEvent::Reset => Some(Action::Reset),
        TuiEvent::Arrow(arrow) => Some(Action::Arrow(arrow)),
        TuiEvent::Tab => Some(Action::Tab),
        TuiEvent::Letter(letter) => cursor.map(|cursor| Action::Input {
            pos: cursor.pos,
            value: Some(letter),
        }),
        TuiEvent::Erase => cursor.map(|cursor| Action::Input {
            pos: cursor.pos,
            value: None,
        }),
        TuiEvent::Toggle => cursor.map(|cursor| Action::ClickCell(cursor.pos)),
        TuiEvent::Click(column, row) => {
            match ui::hit_test(frame_area, app, tui, column, row)? {
                Hit::Cell(pos) => Some(Action::ClickCell(pos)),
                Hit::Clue { direction, number } => Some(Action::ClickClue { direction, number }),
            }
        }
        TuiEvent::Resize => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let loader = build_loader(&config).map_err(std::io::Error::other)?;
    let mut app = App::new(loader.name().to_string());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut active_load: Option<tokio::task::AbortHandle> = None;

    let mut should_quit = handle_effect(
        update(&mut app, Action::Load),
        &loader,
        &tx,
        &mut active_load,
    );
    let mut needs_redraw = true; // Force first frame

    while !should_quit {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for(event, &app, &tui, frame_area) else {
                continue;
            };
            let effect = update(&mut app, action);
            if handle_effect(effect, &loader, &tx, &mut active_load) {
                should_quit = true;
                break;
            }
        }

        // Handle background task actions (load results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(effect, &loader, &tx, &mut active_load) {
                should_quit = true;
            }
        }
    }

    if let Some(handle) = active_load.take() {
        handle.abort();
    }
    ratatui::restore();
    Ok(())
}

/// Performs an effect. Returns true when the app should quit.
fn handle_effect(
    effect: Effect,
    loader: &Arc<dyn PuzzleLoader>,
    tx: &mpsc::Sender<Action>,
    active_load: &mut Option<tokio::task::AbortHandle>,
) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::SpawnLoad => {
            if let Some(handle) = active_load.take() {
                handle.abort();
            }
            *active_load = Some(spawn_load(loader.clone(), tx.clone()));
            false
        }
        Effect::None => false,
    }
}

/// Runs the load in its own task and reports the outcome from a watcher task,
/// so a panicking loader still ends in `LoadFailed`. The returned handle aborts
/// the load; the watcher then exits without sending anything.
fn spawn_load(loader: Arc<dyn PuzzleLoader>, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    info!("Spawning puzzle load from {}", loader.name());
    let load = tokio::spawn(async move { load_puzzle(loader.as_ref()).await });
    let abort_handle = load.abort_handle();

    tokio::spawn(async move {
        let action = match load.await {
            Ok(Ok(model)) => Action::PuzzleLoaded(Box::new(model)),
            Ok(Err(e)) => Action::LoadFailed(e.to_string()),
            Err(e) if e.is_panic() => {
                error!("Puzzle load panicked: {e}");
                Action::LoadFailed("puzzle load crashed".to_string())
            }
            Err(_) => {
                debug!("Puzzle load cancelled");
                return;
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send load result: receiver dropped");
        }
    });
    abort_handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Pos;
    use crate::core::navigation::Arrow;
    use crate::core::puzzle::PuzzleDocument;
    use crate::test_support::{sample_model, test_app};

    fn loaded_app() -> App {
        let mut app = test_app();
        update(&mut app, Action::PuzzleLoaded(Box::new(sample_model())));
        app
    }

    const AREA: Rect = Rect::new(0, 0, 80, 24);

    #[test]
    fn test_letter_targets_cursor_cell() {
        let app = loaded_app();
        let action = action_for(TuiEvent::Letter('s'), &app, &TuiState::new(), AREA);
        assert!(matches!(
            action,
            Some(Action::Input { pos, value: Some('s') }) if pos == Pos::new(1, 0)
        ));
    }

    #[test]
    fn test_erase_and_toggle_use_cursor() {
        let app = loaded_app();
        let tui = TuiState::new();
        assert!(matches!(
            action_for(TuiEvent::Erase, &app, &tui, AREA),
            Some(Action::Input { value: None, .. })
        ));
        assert!(matches!(
            action_for(TuiEvent::Toggle, &app, &tui, AREA),
            Some(Action::ClickCell(pos)) if pos == Pos::new(1, 0)
        ));
    }

    #[test]
    fn test_cursor_events_without_game_are_dropped() {
        let app = test_app();
        let tui = TuiState::new();
        assert!(action_for(TuiEvent::Letter('a'), &app, &tui, AREA).is_none());
        assert!(action_for(TuiEvent::Click(6, 2), &app, &tui, AREA).is_none());
        assert!(matches!(
            action_for(TuiEvent::Reload, &app, &tui, AREA),
            Some(Action::Load)
        ));
    }

    #[test]
    fn test_click_on_grid_becomes_cell_click() {
        let app = loaded_app();
        assert!(matches!(
            action_for(TuiEvent::Click(6, 2), &app, &TuiState::new(), AREA),
            Some(Action::ClickCell(pos)) if pos == Pos::new(0, 1)
        ));
    }

    #[test]
    fn test_direct_mappings() {
        let app = loaded_app();
        let tui = TuiState::new();
        assert!(matches!(
            action_for(TuiEvent::Arrow(Arrow::Up), &app, &tui, AREA),
            Some(Action::Arrow(Arrow::Up))
        ));
        assert!(matches!(action_for(TuiEvent::Tab, &app, &tui, AREA), Some(Action::Tab)));
        assert!(matches!(action_for(TuiEvent::Check, &app, &tui, AREA), Some(Action::Check)));
        assert!(matches!(action_for(TuiEvent::Quit, &app, &tui, AREA), Some(Action::Quit)));
        assert!(action_for(TuiEvent::Resize, &app, &tui, AREA).is_none());
    }

    #[test]
    fn test_build_loader_follows_location() {
        let config = ResolvedConfig {
            location: PuzzleLocation::File("today.json".into()),
            timeout: Duration::from_secs(1),
        };
        assert_eq!(build_loader(&config).unwrap().name(), "today.json");

        let config = ResolvedConfig {
            location: PuzzleLocation::Embedded,
            timeout: Duration::from_secs(1),
        };
        assert_eq!(build_loader(&config).unwrap().name(), "built-in sample");
    }

    struct PanickingLoader;

    #[async_trait::async_trait]
    impl PuzzleLoader for PanickingLoader {
        fn name(&self) -> &str {
            "panicking"
        }

        async fn fetch(&self) -> Result<PuzzleDocument, LoadError> {
            panic!("loader blew up");
        }
    }

    struct SlowLoader;

    #[async_trait::async_trait]
    impl PuzzleLoader for SlowLoader {
        fn name(&self) -> &str {
            "slow"
        }

        async fn fetch(&self) -> Result<PuzzleDocument, LoadError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            EmbeddedLoader.fetch().await
        }
    }

    async fn wait_for(rx: &mpsc::Receiver<Action>) -> Option<Action> {
        for _ in 0..100 {
            if let Ok(action) = rx.try_recv() {
                return Some(action);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }

    #[tokio::test]
    async fn test_spawned_load_reports_back() {
        let (tx, rx) = mpsc::channel();
        let loader: Arc<dyn PuzzleLoader> = Arc::new(EmbeddedLoader);
        let mut active = None;
        assert!(!handle_effect(Effect::SpawnLoad, &loader, &tx, &mut active));
        assert!(active.is_some());

        assert!(matches!(wait_for(&rx).await, Some(Action::PuzzleLoaded(_))));
    }

    #[tokio::test]
    async fn test_panicking_load_reports_failure() {
        let (tx, rx) = mpsc::channel();
        let loader: Arc<dyn PuzzleLoader> = Arc::new(PanickingLoader);
        let mut active = None;
        handle_effect(Effect::SpawnLoad, &loader, &tx, &mut active);

        let action = wait_for(&rx).await;
        assert!(matches!(action, Some(Action::LoadFailed(ref msg)) if msg == "puzzle load crashed"));

        // The app leaves the loading state for the error view.
        let mut app = test_app();
        update(&mut app, Action::Load);
        update(&mut app, action.unwrap());
        assert!(!app.is_loading);
        assert!(app.game.is_none());
        assert_eq!(app.error.as_deref(), Some("puzzle load crashed"));
    }

    #[tokio::test]
    async fn test_aborted_load_sends_nothing() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_load(Arc::new(SlowLoader), tx);
        handle.abort();

        assert!(wait_for(&rx).await.is_none());
    }
}
