use crate::core::game::Game;
use crate::core::grid::{Direction, Pos};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ClueList, GridView, TitleBar, cell_at, grid_extent};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

const HELP: &str = " ^K Check  ^S Reveal  ^X Reset  F5 Reload  Esc Quit ";

/// Screen regions. Drawing and mouse hit-testing both derive from this, so
/// they cannot disagree.
///
/// ```text
/// ┌ title ─────────────────────────────────────┐
/// │ grid          │ across                     │
/// │               ├────────────────────────────┤
/// │               │ down                       │
/// ├ clue bar ──────────────────────────────────┤
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub main: Rect,
    pub grid: Rect,
    pub across: Rect,
    pub down: Rect,
    pub clue_bar: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, grid_size: usize) -> Self {
        use Constraint::{Length, Min, Percentage};

        let [title, main, clue_bar] =
            Layout::vertical([Length(1), Min(0), Length(3)]).areas(area);
        let (grid_width, grid_height) = grid_extent(grid_size);
        let [grid_column, _gap, clues] =
            Layout::horizontal([Length(grid_width), Length(1), Min(0)]).areas(main);
        let grid = Rect {
            height: grid_height.min(grid_column.height),
            ..grid_column
        };
        let [across, down] = Layout::vertical([Percentage(50), Percentage(50)]).areas(clues);

        Self {
            title,
            main,
            grid,
            across,
            down,
            clue_bar,
        }
    }

    pub fn clues(&self, direction: Direction) -> Rect {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let size = app.game.as_ref().map_or(0, |game| game.model().size());
    let layout = ScreenLayout::new(frame.area(), size);

    TitleBar::new(
        app.title().to_string(),
        app.game.as_ref().map(Game::progress),
        app.status_message.clone(),
    )
    .render(frame, layout.title);

    match &app.game {
        Some(game) => {
            GridView::new(game).render(frame, layout.grid);
            for direction in [Direction::Across, Direction::Down] {
                ClueList::new(tui.clue_list_mut(direction), game, direction)
                    .render(frame, layout.clues(direction));
            }
            draw_active_clue(frame, layout.clue_bar, game);
        }
        None => {
            draw_idle_view(frame, layout.main, app);
            let help = Block::bordered()
                .title_bottom(Line::from(" F5 Reload  Esc Quit ").centered())
                .border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(help, layout.clue_bar);
        }
    }
}

fn draw_active_clue(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::bordered()
        .title_bottom(Line::from(HELP).centered())
        .border_style(Style::default().fg(Color::DarkGray));

    let line = match game.current_word() {
        Some(word) => Line::from(vec![
            Span::styled(
                format!("{} {}: ", word.number, word.direction.label()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(word.clue.as_str()),
        ]),
        None => Line::from("No word selected"),
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Shown while no puzzle is loaded: a loading notice or the last failure.
fn draw_idle_view(frame: &mut Frame, area: Rect, app: &App) {
    let paragraph = match &app.error {
        Some(error_msg) if !app.is_loading => Paragraph::new(vec![
            Line::from("No puzzle available").style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from(error_msg.as_str()),
        ])
        .block(
            Block::bordered()
                .title("ERROR")
                .border_style(Style::default().fg(Color::Red)),
        ),
        _ => Paragraph::new(format!("Loading puzzle from {}...", app.source_name))
            .block(Block::bordered()),
    };
    frame.render_widget(
        paragraph.alignment(Alignment::Center).wrap(Wrap { trim: true }),
        area,
    );
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Cell(Pos),
    Clue { direction: Direction, number: u32 },
}

/// Hit test: given a screen position, find the grid cell or clue entry under
/// it. Clue hits use the item heights cached by the last render.
pub fn hit_test(frame_area: Rect, app: &App, tui: &TuiState, column: u16, row: u16) -> Option<Hit> {
    let game = app.game.as_ref()?;
    let size = game.model().size();
    let layout = ScreenLayout::new(frame_area, size);

    if let Some(pos) = cell_at(layout.grid, size, column, row) {
        return Some(Hit::Cell(pos));
    }
    [Direction::Across, Direction::Down]
        .into_iter()
        .find_map(|direction| {
            tui.clue_list(direction)
                .clue_at(layout.clues(direction), column, row)
                .map(|number| Hit::Clue { direction, number })
        })
}
