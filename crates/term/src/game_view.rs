//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::pieces::GRID;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mode, BOARD_HEIGHT, BOARD_WIDTH, CURTAIN_HEIGHT};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BLOCK: char = '█';
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const MARGIN_BG: Rgb = Rgb::from_argb(0xff404040);
const PREVIEW_BG: Rgb = Rgb::from_argb(0xff202020);
const CURTAIN: Rgb = Rgb::from_argb(0xff800000);
const LOGO: Rgb = Rgb::from_argb(0xffe0e0e0);

/// Block letters for the title, 3 pixels wide, top row first, MSB on the left.
const LOGO_GLYPHS: [[u8; 5]; 6] = [
    [0b111, 0b010, 0b010, 0b010, 0b010], // T
    [0b111, 0b100, 0b110, 0b100, 0b111], // E
    [0b111, 0b010, 0b010, 0b010, 0b010], // T
    [0b110, 0b101, 0b110, 0b101, 0b101], // R
    [0b111, 0b010, 0b010, 0b010, 0b111], // I
    [0b011, 0b100, 0b010, 0b001, 0b110], // S
];
const PROMPT: &str = "press ENTER";

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame landed in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        if snap.mode == Mode::Game && snap.paused {
            self.draw_centered(fb, viewport.height / 2, "PAUSED", title_style());
            return;
        }

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_px_w + 2) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(board_px_h + 2) / 2,
                AnchorY::Top => 0,
            },
            w: board_px_w + 2,
            h: board_px_h + 2,
        };

        // Side margins.
        let margin = CellStyle::new(MARGIN_BG, MARGIN_BG);
        fb.fill_rect(0, 0, frame.x, viewport.height, ' ', margin);
        let right = frame.x.saturating_add(frame.w);
        fb.fill_rect(right, 0, viewport.width.saturating_sub(right), viewport.height, ' ', margin);

        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', CellStyle::new(BOARD_BG, BOARD_BG));
        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), MARGIN_BG));

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                match snap.colour(cell) {
                    Some(argb) => self.draw_block(fb, frame, col as u16, row as u16, Rgb::from_argb(argb)),
                    None => self.fill_cell_rect(
                        fb,
                        frame,
                        col as u16,
                        row as u16,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim(),
                    ),
                }
            }
        }

        if let Some(active) = snap.active {
            for (i, cells) in active.grid.iter().enumerate() {
                for (j, &cell) in cells.iter().enumerate() {
                    let Some(argb) = snap.colour(cell) else { continue };
                    let row = active.row as i16 + i as i16;
                    let col = active.col as i16 + j as i16;
                    if (0..BOARD_HEIGHT as i16).contains(&row) && (0..BOARD_WIDTH as i16).contains(&col) {
                        self.draw_block(fb, frame, col as u16, row as u16, Rgb::from_argb(argb));
                    }
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if let Some(curtain) = snap.curtain {
            let rows = curtain_rows(curtain) * self.cell_h;
            fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, rows, ' ', CellStyle::new(CURTAIN, CURTAIN));
        }

        if snap.mode == Mode::Menu {
            self.draw_menu(fb, viewport, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, col: u16, row: u16, colour: Rgb) {
        self.fill_cell_rect(fb, frame, col, row, BLOCK, CellStyle::new(colour, BOARD_BG).bold());
    }

    fn fill_cell_rect(&self, fb: &mut FrameBuffer, frame: Frame, col: u16, row: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        let preview_w = GRID as u16 * self.cell_w;
        if panel_x.saturating_add(preview_w) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), MARGIN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), MARGIN_BG);

        let mut y = frame.y;
        for (name, n) in [
            ("Points", snap.points),
            ("Level", snap.level as u64),
            ("Lines", snap.lines as u64),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u64(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "Next", label);
        y = y.saturating_add(1);
        let preview_h = GRID as u16 * self.cell_h;
        fb.fill_rect(panel_x, y, preview_w, preview_h, ' ', CellStyle::new(PREVIEW_BG, PREVIEW_BG));
        for (i, cells) in snap.next_grid.iter().enumerate() {
            for (j, &cell) in cells.iter().enumerate() {
                if let Some(argb) = snap.colour(cell) {
                    let style = CellStyle::new(Rgb::from_argb(argb), PREVIEW_BG).bold();
                    let px = panel_x + j as u16 * self.cell_w;
                    let py = y + i as u16 * self.cell_h;
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
                }
            }
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, viewport: Viewport, frame: Frame) {
        fb.restyle_rect(0, 0, viewport.width, viewport.height, |s| CellStyle {
            fg: s.fg.scaled(5, 8),
            bg: s.bg.scaled(5, 8),
            bold: false,
            dim: true,
        });

        let glyph_w = 3 * self.cell_w;
        let gap = self.cell_w;
        let logo_w = LOGO_GLYPHS.len() as u16 * (glyph_w + gap) - gap;
        let logo_x = viewport.width.saturating_sub(logo_w) / 2;
        let logo_y = frame.y.saturating_add(frame.h / 4);
        let style = CellStyle::new(LOGO, LOGO).bold();

        for (n, glyph) in LOGO_GLYPHS.iter().enumerate() {
            let gx = logo_x + n as u16 * (glyph_w + gap);
            for (dy, bits) in glyph.iter().enumerate() {
                for dx in 0..3u16 {
                    if bits & (0b100 >> dx) != 0 {
                        fb.fill_rect(gx + dx * self.cell_w, logo_y + dy as u16, self.cell_w, 1, BLOCK, style);
                    }
                }
            }
        }

        self.draw_centered(fb, logo_y.saturating_add(7), PROMPT, title_style());
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = fb.width().saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }
}

/// Board rows hidden by a curtain of `curtain` layout units.
pub fn curtain_rows(curtain: u32) -> u16 {
    (curtain.min(CURTAIN_HEIGHT) as u64 * BOARD_HEIGHT as u64 / CURTAIN_HEIGHT as u64) as u16
}

fn title_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold()
}
