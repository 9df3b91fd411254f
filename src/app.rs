//! Application state and event handling.
//!
//! Everything between a terminal event and the next frame, without touching
//! the terminal itself: the game loop in `main` feeds events in and flushes
//! the frames this produces.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::core::{GameSnapshot, GameState};
use crate::input::{handle_key_event, mouse_click, should_quit, CursorHandler};
use crate::term::{FrameBuffer, GameView, Viewport};
use crate::types::GameAction;

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// The terminal was resized; the next frame must be a full redraw.
    Resized,
    Quit,
}

/// Main application state.
pub struct App {
    game: GameState,
    cursor: CursorHandler,
    view: GameView,
    /// Snapshot and viewport of the last rendered frame, for hit testing.
    snap: GameSnapshot,
    viewport: Viewport,
}

impl App {
    pub fn new(view: GameView) -> Self {
        let game = GameState::new();
        let snap = game.snapshot();
        Self {
            game,
            cursor: CursorHandler::new(),
            view,
            snap,
            viewport: Viewport::new(0, 0),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn cursor(&self) -> &CursorHandler {
        &self.cursor
    }

    /// Re-derive the view from the current state.
    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        self.game.snapshot_into(&mut self.snap);
        self.viewport = viewport;
        self.view
            .render_into_with_cursor(&self.snap, self.cursor.visible_cursor(), viewport, fb);
    }

    pub fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let Some((x, y)) = mouse_click(mouse) {
                    self.handle_click_at(x, y);
                }
                Control::Continue
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                Control::Resized
            }
            _ => Control::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Control {
        if should_quit(key) {
            return Control::Quit;
        }
        let action = if CursorHandler::is_cursor_key(key.code) {
            self.cursor.handle_key_press(key.code)
        } else {
            handle_key_event(key)
        };
        if let Some(action) = action {
            self.apply(action);
        }
        Control::Continue
    }

    /// Resolve a mouse click against the last rendered frame.
    fn handle_click_at(&mut self, x: u16, y: u16) {
        let Some(action) = self.view.hit_test(&self.snap, self.viewport, x, y) else {
            return;
        };
        if let GameAction::Click(index) = action {
            self.cursor.set_cursor(index);
        }
        self.apply(action);
    }

    fn apply(&mut self, action: GameAction) {
        self.game.apply_action(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn rendered(app: &mut App) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        app.render_into(Viewport::new(80, 24), &mut fb);
        fb
    }

    #[test]
    fn quit_and_resize_are_reported() {
        let mut app = App::new(GameView::default());
        assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Control::Quit);
        assert_eq!(app.handle_event(Event::Resize(100, 40)), Control::Resized);
        assert_eq!(app.handle_event(key(KeyCode::Char('x'))), Control::Continue);
    }

    #[test]
    fn digit_keys_play() {
        let mut app = App::new(GameView::default());
        app.handle_event(key(KeyCode::Char('5')));
        assert_eq!(app.game().step_number(), 1);
        assert!(app.game().board().is_occupied(4));
    }

    #[test]
    fn mouse_click_on_square_plays_and_moves_cursor() {
        let view = GameView::default();
        let mut app = App::new(view);
        let _ = rendered(&mut app);

        let layout = view.layout(Viewport::new(80, 24));
        let (x, y) = layout.cell_origin(2);
        app.handle_event(left_click(x + 1, y + 1));

        assert!(app.game().board().is_occupied(2));
        assert_eq!(app.cursor().cursor(), 2);
    }

    #[test]
    fn clicks_before_first_render_hit_nothing() {
        let mut app = App::new(GameView::default());
        app.handle_event(left_click(0, 0));
        assert_eq!(app.game().step_number(), 0);
    }
}
