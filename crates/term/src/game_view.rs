//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The screen has two columns: the board grid on the left and an info panel
//! on the right (status, last move, sort toggle, move list). The same
//! [`Layout`] drives both drawing and [`GameView::hit_test`], so a click
//! always lands on what was drawn under it.

use crate::core::{GameSnapshot, GameStatus, MoveLabel};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GameAction, Mark, BOARD_CELLS, BOARD_SIDE, MAX_HISTORY};

/// Columns between the board frame and the info panel.
pub const PANEL_GAP: u16 = 3;

/// Largest square size accepted by [`GameView::new`].
pub const MAX_CELL_W: u16 = 15;
pub const MAX_CELL_H: u16 = 7;

/// Info panel width in columns.
pub const PANEL_WIDTH: u16 = 28;

pub const TOGGLE_LABEL: &str = "[ Toggle move sort order ]";

const HELP_TEXT: &str = "1-9/click: play  arrows+enter: cursor  [ ]: history  t: sort  q: quit";

// Panel rows, relative to the top of the panel.
const STATUS_ROW: u16 = 0;
const LAST_MOVE_ROW: u16 = 2;
const TOGGLE_ROW: u16 = 6;
const MOVES_ROW: u16 = 8;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const HIGHLIGHT_BG: Rgb = Rgb::new(60, 110, 60);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorY {
    #[default]
    Center,
    Top,
}

impl AnchorY {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "center" | "centre" | "middle" => Some(AnchorY::Center),
            "top" => Some(AnchorY::Top),
            _ => None,
        }
    }
}

/// Visual class of a board square. Exactly one applies to each square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareClass {
    Plain,
    Highlight,
}

impl SquareClass {
    pub fn for_square(snap: &GameSnapshot, index: usize) -> Self {
        if snap.is_highlighted(index) {
            SquareClass::Highlight
        } else {
            SquareClass::Plain
        }
    }

    pub fn background(self) -> Rgb {
        match self {
            SquareClass::Plain => BOARD_BG,
            SquareClass::Highlight => HIGHLIGHT_BG,
        }
    }
}

/// Screen positions of everything clickable, for one snapshot and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board_x: u16,
    pub board_y: u16,
    pub panel_x: u16,
    pub panel_y: u16,
    /// Height of the taller of the board frame and the panel.
    pub content_h: u16,
    cell_w: u16,
    cell_h: u16,
}

impl Layout {
    /// Board frame width: 3 cells, 2 separators, 2 border columns.
    pub fn frame_w(&self) -> u16 {
        BOARD_SIDE as u16 * self.cell_w + BOARD_SIDE as u16 + 1
    }

    pub fn frame_h(&self) -> u16 {
        BOARD_SIDE as u16 * self.cell_h + BOARD_SIDE as u16 + 1
    }

    /// Top-left terminal position of a square's interior.
    pub fn cell_origin(&self, index: usize) -> (u16, u16) {
        let row = (index / BOARD_SIDE) as u16;
        let col = (index % BOARD_SIDE) as u16;
        (
            self.board_x + 1 + col * (self.cell_w + 1),
            self.board_y + 1 + row * (self.cell_h + 1),
        )
    }

    /// Square under a terminal position. Separators belong to no square.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<usize> {
        (0..BOARD_CELLS).find(|&i| {
            let (cx, cy) = self.cell_origin(i);
            x >= cx && x < cx + self.cell_w && y >= cy && y < cy + self.cell_h
        })
    }

    pub fn status_row(&self) -> u16 {
        self.panel_y + STATUS_ROW
    }

    pub fn toggle_row(&self) -> u16 {
        self.panel_y + TOGGLE_ROW
    }

    /// Row of the move list entry at display position `pos`.
    pub fn move_row(&self, pos: usize) -> u16 {
        self.panel_y + MOVES_ROW + pos as u16
    }
}

/// A lightweight terminal renderer for the tic-tac-toe game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board square width in terminal columns.
    cell_w: u16,
    /// Board square height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps squares close to square on typical terminal fonts.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Squares need 3 columns for the cursor brackets around the mark.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(3, MAX_CELL_W),
            cell_h: cell_h.clamp(1, MAX_CELL_H),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    pub fn anchor_y(&self) -> AnchorY {
        self.anchor_y
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let mut layout = Layout {
            board_x: 0,
            board_y: 0,
            panel_x: 0,
            panel_y: 0,
            content_h: 0,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };
        let frame_w = layout.frame_w();
        // Sized for a full move list so the board never shifts mid-game.
        let panel_h = MOVES_ROW + MAX_HISTORY as u16;
        let content_w = frame_w + PANEL_GAP + PANEL_WIDTH;
        let content_h = layout.frame_h().max(panel_h);

        let start_x = viewport.width.saturating_sub(content_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };

        layout.board_x = start_x;
        layout.board_y = start_y;
        layout.panel_x = start_x + frame_w + PANEL_GAP;
        layout.panel_y = start_y;
        layout.content_h = content_h;
        layout
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_cursor(snap, None, viewport, fb);
    }

    pub fn render_into_with_cursor(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);

        self.draw_grid(fb, &layout);
        for index in 0..BOARD_CELLS {
            self.draw_square(
                fb,
                &layout,
                index,
                snap.board[index],
                SquareClass::for_square(snap, index),
                cursor == Some(index),
            );
        }

        self.draw_panel(fb, snap, &layout);

        let help_y = layout.board_y.saturating_add(layout.content_h).saturating_add(1);
        if help_y < viewport.height {
            let help_w = HELP_TEXT.chars().count() as u16;
            let x = viewport.width.saturating_sub(help_w) / 2;
            fb.put_str(x, help_y, HELP_TEXT, CellStyle::default().dim());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_cursor(snap, None, viewport)
    }

    pub fn render_with_cursor(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_cursor(snap, cursor, viewport, &mut fb);
        fb
    }

    /// Map a terminal position to the action drawn there.
    pub fn hit_test(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<GameAction> {
        let layout = self.layout(viewport);

        if let Some(index) = layout.cell_at(x, y) {
            return Some(GameAction::Click(index));
        }

        if x < layout.panel_x || x >= layout.panel_x + PANEL_WIDTH {
            return None;
        }

        if y == layout.toggle_row() {
            let toggle_w = TOGGLE_LABEL.chars().count() as u16;
            return (x < layout.panel_x + toggle_w).then_some(GameAction::ToggleSort);
        }

        let first = layout.move_row(0);
        if y >= first {
            return snap
                .move_step_at((y - first) as usize)
                .map(GameAction::JumpTo);
        }
        None
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let x0 = layout.board_x;
        let y0 = layout.board_y;
        let w = layout.frame_w();
        let h = layout.frame_h();
        let step_x = self.cell_w + 1;
        let step_y = self.cell_h + 1;

        for dy in 0..h {
            for dx in 0..w {
                let on_col = dx % step_x == 0;
                let on_row = dy % step_y == 0;
                let ch = match (on_row, on_col) {
                    (false, false) => continue,
                    (true, false) => '─',
                    (false, true) => '│',
                    (true, true) => junction(dx == 0, dx == w - 1, dy == 0, dy == h - 1),
                };
                fb.put_char(x0 + dx, y0 + dy, ch, style);
            }
        }
    }

    fn draw_square(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        index: usize,
        cell: Cell,
        class: SquareClass,
        has_cursor: bool,
    ) {
        let (x, y) = layout.cell_origin(index);
        let bg = class.background();
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', CellStyle::new(bg, bg));

        let mid_x = x + self.cell_w / 2;
        let mid_y = y + self.cell_h / 2;
        match cell {
            Some(mark) => {
                let style = CellStyle::new(mark_color(mark), bg).bold();
                fb.put_char(mid_x, mid_y, mark.as_char(), style);
            }
            None => {
                // Key hint: squares are numbered 1-9 row by row.
                let hint = char::from(b'1' + index as u8);
                let style = CellStyle::new(Rgb::new(90, 90, 100), bg).dim();
                fb.put_char(mid_x, mid_y, hint, style);
            }
        }

        if has_cursor {
            let style = CellStyle::new(Rgb::new(250, 220, 90), bg).bold();
            fb.put_char(x, mid_y, '[', style);
            fb.put_char(x + self.cell_w - 1, mid_y, ']', style);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let x = layout.panel_x;
        let label = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::default();

        // Status
        let y = layout.status_row();
        match snap.status {
            GameStatus::Won(mark) => {
                let end = fb.put_str(x, y, "Winner: ", label);
                fb.put_char(end, y, mark.as_char(), label);
            }
            GameStatus::Draw => {
                fb.put_str(x, y, "Game is a draw", label);
            }
            GameStatus::InPlay { next } => {
                let end = fb.put_str(x, y, "Next player: ", label);
                fb.put_char(end, y, next.as_char(), label);
            }
        }

        // Last move
        if let Some((row, col)) = snap.last_move {
            let y = layout.panel_y + LAST_MOVE_ROW;
            fb.put_str(x, y, "Last move:", value);
            let end = fb.put_str(x, y + 1, "Row: ", value);
            fb.put_u32(end, y + 1, row as u32, value);
            let end = fb.put_str(x, y + 2, "Col: ", value);
            fb.put_u32(end, y + 2, col as u32, value);
        }

        let button = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(180, 180, 190));
        fb.put_str(x, layout.toggle_row(), TOGGLE_LABEL, button);

        // Move list, numbered like an ordered list.
        for (pos, &step) in snap.move_steps().iter().enumerate() {
            let y = layout.move_row(pos);
            let current = step == snap.step_number;
            let style = if current {
                CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
                    .bold()
                    .underline()
            } else {
                value
            };

            fb.put_char(x, y, if current { '▸' } else { ' ' }, style);
            let n = pos as u32 + 1;
            let num_x = if n < 10 { x + 2 } else { x + 1 };
            let end = fb.put_u32(num_x, y, n, value);
            let end = fb.put_str(end, y, ". ", value);
            match MoveLabel::for_step(step) {
                MoveLabel::GameStart => {
                    fb.put_str(end, y, "Go to game start", style);
                }
                MoveLabel::Move(m) => {
                    let end = fb.put_str(end, y, "Go to move #", style);
                    fb.put_u32(end, y, m as u32, style);
                }
            }
        }
    }
}

fn junction(left: bool, right: bool, top: bool, bottom: bool) -> char {
    match (left, right, top, bottom) {
        (true, _, true, _) => '┌',
        (_, true, true, _) => '┐',
        (true, _, _, true) => '└',
        (_, true, _, true) => '┘',
        (_, _, true, _) => '┬',
        (_, _, _, true) => '┴',
        (true, _, _, _) => '├',
        (_, true, _, _) => '┤',
        _ => '┼',
    }
}

fn mark_color(mark: Mark) -> Rgb {
    match mark {
        Mark::X => Rgb::new(100, 180, 255),
        Mark::O => Rgb::new(255, 160, 80),
    }
}
