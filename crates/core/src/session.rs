//! Game session - one game from first spawn to game over
//!
//! The session owns the board and the active piece and advances them one tick
//! at a time. It has four implicit states:
//!
//! - **Playing**: horizontal movement with an initial delay then repeat,
//!   gravity, landing.
//! - **Locking**: the tick a piece lands it is baked, rows are cleared,
//!   score/level are updated and the next piece spawns.
//! - **Curtain**: after game over a wipe grows down the board.
//! - **Settled**: the wipe is complete and the end timer counts ticks.
//!
//! Pausing and menu/game switching live one level up in
//! [`crate::mode::ModeController`].

use tracing::{debug, info};

use crate::board::Board;
use crate::palette::Palette;
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::scoring::{fall_rate, level_for_lines, lock_points};
use crate::pieces::shape_grid;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// What happened when a piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    pub points: u64,
    pub level_up: bool,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    palette: Palette,
    rng: SimpleRng,
    seed: u32,
    level: u32,
    lines: u32,
    points: u64,
    /// Ticks per row at the current speed.
    fall_rate: u32,
    fall_timer: u32,
    move_timer: u32,
    move_dir: i8,
    dropping: bool,
    /// Rows fallen while soft drop was held, paid out on lock.
    soft_dropped: u32,
    game_over: bool,
    curtain: Option<u32>,
    end_timer: Option<u32>,
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Start a new game with the given RNG seed. The first piece is already
    /// spawned.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let first = rng.next_piece();
        let next = rng.next_piece();

        Self {
            board: Board::new(),
            active: ActivePiece::spawn(first),
            next,
            palette: Palette::new(),
            rng,
            seed,
            level: 0,
            lines: 0,
            points: 0,
            fall_rate: fall_rate(0),
            fall_timer: 0,
            move_timer: 0,
            move_dir: 0,
            dropping: false,
            soft_dropped: 0,
            game_over: false,
            curtain: None,
            end_timer: None,
            last_event: None,
        }
    }

    /// Erase the board and start over. The palette and RNG carry on.
    pub fn reset(&mut self) {
        self.board.clear();
        self.game_over = false;
        self.curtain = None;
        self.end_timer = None;
        self.level = 0;
        self.lines = 0;
        self.points = 0;
        self.fall_timer = 0;
        self.soft_dropped = 0;
        self.move_timer = 0;
        self.move_dir = 0;
        self.dropping = false;
        self.fall_rate = fall_rate(0);
        self.last_event = None;

        self.next = self.rng.next_piece();
        self.spawn_next();
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups (puzzles, tests, benches).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn fall_rate(&self) -> u32 {
        self.fall_rate
    }

    pub fn move_dir(&self) -> i8 {
        self.move_dir
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.dropping
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn curtain(&self) -> Option<u32> {
        self.curtain
    }

    pub fn end_timer(&self) -> Option<u32> {
        self.end_timer
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Promote the preview piece and draw a new preview.
    fn spawn_next(&mut self) {
        if self.game_over {
            return;
        }
        let kind = self.next;
        self.next = self.rng.next_piece();
        self.spawn_kind(kind);
    }

    /// Make `kind` the active piece at its spawn position.
    ///
    /// If it overlaps the stack the game is over. No-op once the game is over.
    pub fn spawn_kind(&mut self, kind: PieceKind) {
        if self.game_over {
            return;
        }
        self.active = ActivePiece::spawn(kind);
        if self.active.overlaps(&self.board) {
            self.game_over = true;
            info!(points = self.points, level = self.level, lines = self.lines, "game over");
        }
    }

    /// Advance one tick. Returns true when a piece locked.
    pub fn update(&mut self) -> bool {
        if self.game_over {
            self.advance_curtain();
            return false;
        }

        let contacts = self.active.contacts(&self.board);
        let ready = self.move_timer == 0
            || (self.move_timer % MOVE_RATE == 0 && self.move_timer > MOVE_WAIT);
        if ready && self.move_dir != 0 && !contacts.blocks(self.move_dir) {
            self.active.shift(self.move_dir);
        }
        self.active.clamp_col();

        let mut landed = false;
        if self.fall_timer + 1 >= self.fall_rate {
            // Grounding is judged where the piece is now, after any shift.
            let grounded = self.active.contacts(&self.board).below;
            self.active.row += 1;
            if self.dropping {
                self.soft_dropped += 1;
            }
            self.fall_timer = 0;
            landed = grounded;
        }

        let past_floor = self.active.row > BOARD_HEIGHT as i8 - self.active.height() as i8;
        let locked = past_floor || landed;
        if locked {
            self.lock_piece();
        }

        self.move_timer = self.move_timer.saturating_add(1);
        self.fall_timer += 1;
        locked
    }

    fn advance_curtain(&mut self) {
        match self.curtain {
            None => self.curtain = Some(0),
            Some(c) if c < CURTAIN_HEIGHT => {
                self.curtain = Some((c + CURTAIN_SPEED).min(CURTAIN_HEIGHT));
            }
            Some(_) => {
                self.end_timer = Some(self.end_timer.map_or(0, |t| t.saturating_add(1)));
            }
        }
    }

    /// Step back onto the last free row, bake, clear, score and spawn.
    fn lock_piece(&mut self) {
        self.active.row -= 1;
        self.active.bake(&mut self.board);

        let cleared = self.board.clear_full_rows().len();
        self.lines += cleared as u32;

        let next_level = level_for_lines(self.lines);
        let level_up = next_level > self.level;
        if level_up {
            self.level = next_level;
            self.palette.regenerate(&mut self.rng);
            info!(level = self.level, palette = ?self.palette.slots(), "level up");
        }

        let gained = lock_points(cleared, self.level, self.soft_dropped);
        self.points += gained;
        self.soft_dropped = 0;

        debug!(
            kind = self.active.kind.as_str(),
            row = self.active.row,
            col = self.active.col,
            cleared,
            gained,
            "piece locked"
        );
        self.last_event = Some(LockEvent {
            kind: self.active.kind,
            rows_cleared: cleared as u32,
            points: gained,
            level_up,
        });

        self.spawn_next();
        self.fall_rate = fall_rate(self.level);
    }

    /// Key pressed. Returns whether the action did anything.
    ///
    /// Ignored once the game is over. `Pause` belongs to the mode controller.
    pub fn button_down(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            GameAction::RotateCcw => self.active.rotate(Turn::Ccw, &self.board),
            GameAction::RotateCw => self.active.rotate(Turn::Cw, &self.board),
            GameAction::MoveLeft => {
                self.hold_move(-1);
                true
            }
            GameAction::MoveRight => {
                self.hold_move(1);
                true
            }
            GameAction::SoftDrop => {
                self.dropping = true;
                self.fall_rate = SOFT_DROP_RATE;
                // fall on the next tick
                self.fall_timer = self.fall_rate - 1;
                true
            }
            GameAction::Pause => false,
        }
    }

    /// Key released.
    pub fn button_up(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight => {
                self.move_dir = 0;
                self.move_timer = 0;
                true
            }
            GameAction::SoftDrop => {
                self.dropping = false;
                self.fall_rate = fall_rate(self.level);
                self.soft_dropped = 0;
                true
            }
            _ => false,
        }
    }

    /// A second direction pressed while one is held cancels movement.
    fn hold_move(&mut self, dir: i8) {
        self.move_dir = if self.move_dir == 0 { dir } else { 0 };
        self.move_timer = 0;
    }

    /// Fill the session part of a snapshot. Mode and pause are left alone.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.next = self.next;
        out.next_grid = shape_grid(self.next);
        out.palette = self.palette.slots();
        out.points = self.points;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.curtain = self.curtain;
        out.end_timer = self.end_timer;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(kind: PieceKind) -> GameSession {
        let mut s = GameSession::new(12345);
        s.spawn_kind(kind);
        s
    }

    /// Tick until a lock happens; panics if it takes unreasonably long.
    fn run_until_lock(s: &mut GameSession) {
        for _ in 0..10_000 {
            if s.update() {
                return;
            }
        }
        panic!("piece never locked");
    }

    #[test]
    fn test_new_session() {
        let s = GameSession::new(12345);
        assert!(!s.game_over);
        assert_eq!(s.points, 0);
        assert_eq!(s.level, 0);
        assert_eq!(s.lines, 0);
        assert_eq!(s.fall_rate, 50);
        assert_eq!(s.active.row, 0);
        assert_eq!(s.curtain, None);
        assert_eq!(s.end_timer, None);
    }

    #[test]
    fn test_gravity_moves_one_row_per_fall_rate() {
        let mut s = session_with(PieceKind::T);
        for _ in 0..49 {
            s.update();
        }
        assert_eq!(s.active.row, 0);
        s.update();
        assert_eq!(s.active.row, 1);

        // The timer restarts at zero and is bumped the same tick.
        for _ in 0..48 {
            s.update();
        }
        assert_eq!(s.active.row, 1);
        s.update();
        assert_eq!(s.active.row, 2);
    }

    #[test]
    fn test_move_repeats_after_initial_wait() {
        let mut s = session_with(PieceKind::O);
        let start = s.active.col;
        s.button_down(GameAction::MoveLeft);

        s.update();
        assert_eq!(s.active.col, start - 1);

        // No repeat until the timer passes the wait.
        for _ in 0..24 {
            s.update();
        }
        assert_eq!(s.active.col, start - 1);

        // move_timer reaches 30 (first multiple of 6 above 24)
        for _ in 0..6 {
            s.update();
        }
        assert_eq!(s.active.col, start - 2);
    }

    #[test]
    fn test_release_stops_movement() {
        let mut s = session_with(PieceKind::O);
        s.button_down(GameAction::MoveRight);
        s.update();
        s.button_up(GameAction::MoveRight);
        let col = s.active.col;
        for _ in 0..60 {
            s.update();
        }
        assert_eq!(s.active.col, col);
        assert_eq!(s.move_dir, 0);
    }

    #[test]
    fn test_opposite_press_cancels_direction() {
        let mut s = session_with(PieceKind::O);
        s.button_down(GameAction::MoveLeft);
        s.button_down(GameAction::MoveRight);
        assert_eq!(s.move_dir, 0);
    }

    #[test]
    fn test_move_blocked_by_stack() {
        let mut s = session_with(PieceKind::O);
        let col = s.active.col;
        s.board.set(0, col - 1, 1);
        s.button_down(GameAction::MoveLeft);
        s.update();
        assert_eq!(s.active.col, col);
    }

    #[test]
    fn test_soft_drop_falls_next_tick_and_scores_on_lock() {
        let mut s = session_with(PieceKind::O);
        s.button_down(GameAction::SoftDrop);
        assert_eq!(s.fall_rate, SOFT_DROP_RATE);
        s.update();
        assert_eq!(s.active.row, 1);

        run_until_lock(&mut s);
        let event = s.take_last_event().unwrap();
        // O falls from row 0 to 18: 18 rows plus the overshoot row.
        assert_eq!(event.rows_cleared, 0);
        assert_eq!(event.points, 19);
        assert_eq!(s.points, 19);
        assert_eq!(s.soft_dropped, 0);
        // Lock restores the level speed even while the key is held.
        assert_eq!(s.fall_rate, 50);
    }

    #[test]
    fn test_soft_drop_release_forfeits_counter() {
        let mut s = session_with(PieceKind::O);
        s.button_down(GameAction::SoftDrop);
        for _ in 0..8 {
            s.update();
        }
        assert!(s.soft_dropped > 0);
        s.button_up(GameAction::SoftDrop);
        assert_eq!(s.soft_dropped, 0);
        assert_eq!(s.fall_rate, 50);
    }

    #[test]
    fn test_lands_on_floor() {
        let mut s = session_with(PieceKind::O);
        run_until_lock(&mut s);
        let col = 4;
        assert_eq!(s.board.get(18, col), Some(1));
        assert_eq!(s.board.get(19, col + 1), Some(1));
        assert_eq!(s.board.get(17, col), Some(0));
    }

    #[test]
    fn test_lands_on_stack() {
        let mut s = session_with(PieceKind::O);
        s.board.set(10, 4, 2);
        run_until_lock(&mut s);
        assert_eq!(s.board.get(8, 4), Some(1));
        assert_eq!(s.board.get(9, 5), Some(1));
    }

    #[test]
    fn test_slide_over_ledge_does_not_sink_into_stack() {
        let mut s = session_with(PieceKind::O);
        // Ledge under columns 2..3, piece at columns 4..5 one row above it.
        s.board.set(12, 2, 3);
        s.board.set(12, 3, 3);
        s.active.row = 10;
        s.fall_timer = s.fall_rate - 1;
        s.move_timer = 0;
        s.move_dir = -1;

        // Shift onto the ledge and fall in the same tick.
        let locked = s.update();
        assert!(locked);
        assert_eq!(s.board.get(12, 3), Some(3));
        assert_eq!(s.board.get(11, 3), Some(1));
        assert_eq!(s.board.get(10, 3), Some(1));
    }

    #[test]
    fn test_level_up_resamples_palette() {
        let mut s = session_with(PieceKind::I);
        s.lines = 9;
        // Bottom row missing columns 3..6, where the horizontal I lands.
        for col in 0..10 {
            if !(3..7).contains(&col) {
                s.board.set(19, col, 2);
            }
        }
        run_until_lock(&mut s);
        let event = s.take_last_event().unwrap();
        assert_eq!(event.rows_cleared, 1);
        assert!(event.level_up);
        assert_eq!(s.level, 1);
        assert_eq!(s.lines, 10);
        // Bonus is paid at the new level.
        assert_eq!(s.points, 40 * 2);
        assert_eq!(s.fall_rate, 40);
        let [a, b, c] = s.palette.slots();
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn test_spawn_overlap_is_game_over() {
        let mut s = GameSession::new(1);
        for col in 0..10 {
            s.board.set(0, col, 1);
        }
        s.spawn_kind(PieceKind::T);
        assert!(s.game_over);

        // Spawning is a no-op now.
        let active = s.active;
        s.spawn_kind(PieceKind::O);
        assert_eq!(s.active, active);
        assert!(!s.button_down(GameAction::RotateCw));
    }

    #[test]
    fn test_curtain_then_end_timer() {
        let mut s = GameSession::new(1);
        s.game_over = true;

        s.update();
        assert_eq!(s.curtain, Some(0));
        s.update();
        assert_eq!(s.curtain, Some(CURTAIN_SPEED));

        for _ in 0..200 {
            s.update();
            if s.curtain == Some(CURTAIN_HEIGHT) {
                break;
            }
        }
        assert_eq!(s.curtain, Some(CURTAIN_HEIGHT));
        assert_eq!(s.end_timer, None);

        s.update();
        assert_eq!(s.end_timer, Some(0));
        s.update();
        assert_eq!(s.end_timer, Some(1));
        assert_eq!(s.curtain, Some(CURTAIN_HEIGHT));
    }

    #[test]
    fn test_reset_clears_everything_but_palette() {
        let mut s = GameSession::new(7);
        s.board.set(19, 0, 1);
        s.points = 500;
        s.lines = 12;
        s.level = 1;
        s.game_over = true;
        s.curtain = Some(CURTAIN_HEIGHT);
        s.end_timer = Some(30);
        s.dropping = true;
        s.palette = {
            let mut p = Palette::new();
            p.regenerate(&mut SimpleRng::new(2));
            p
        };
        let palette = s.palette;

        s.reset();
        assert!(s.board.cells().iter().all(|&c| c == EMPTY));
        assert_eq!((s.points, s.lines, s.level), (0, 0, 0));
        assert!(!s.game_over);
        assert_eq!(s.curtain, None);
        assert_eq!(s.end_timer, None);
        assert!(!s.dropping);
        assert_eq!(s.palette, palette);
        assert_eq!(s.active.row, 0);
    }

    #[test]
    fn test_preview_becomes_active() {
        let mut s = GameSession::new(4242);
        let upcoming = s.next;
        s.spawn_next();
        assert_eq!(s.active.kind, upcoming);
    }
}
