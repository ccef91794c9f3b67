use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields), may borrow
/// presentation state mutably, and render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so stateful components can refresh caches
/// (item heights, scroll offsets) during the render pass, the same way
/// ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
