//! Mode controller - menu, game and pause
//!
//! Owns the [`GameSession`] and the [`DemoPilot`]. In [`Mode::Menu`] the
//! session plays itself from synthetic input and real keys only start a game.
//! In [`Mode::Game`] real keys drive the session and `Pause` toggles the
//! pause flag, or returns to the menu once the game-over curtain has fallen.

use tracing::info;

use crate::demo::{DemoEvent, DemoPilot};
use crate::session::GameSession;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Mode, ATTRACT_RESET_TICKS};

/// Offsets the demo seed so the pilot does not mirror the piece sequence.
const DEMO_SEED_MIX: u32 = 0x9e37_79b9;

#[derive(Debug, Clone)]
pub struct ModeController {
    mode: Mode,
    paused: bool,
    session: GameSession,
    demo: DemoPilot,
}

impl ModeController {
    /// Start on the menu with the attract game running.
    pub fn new(seed: u32) -> Self {
        Self {
            mode: Mode::Menu,
            paused: false,
            session: GameSession::new(seed),
            demo: DemoPilot::new(seed ^ DEMO_SEED_MIX),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn demo(&self) -> &DemoPilot {
        &self.demo
    }

    /// Advance one tick. Does nothing while paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        if self.mode == Mode::Menu {
            for event in self.demo.tick() {
                match event {
                    DemoEvent::Press(action) => self.session.button_down(action),
                    DemoEvent::Release(action) => self.session.button_up(action),
                };
            }
        }

        self.session.update();

        if self.mode == Mode::Menu
            && self
                .session
                .end_timer()
                .is_some_and(|t| t >= ATTRACT_RESET_TICKS)
        {
            info!("attract game over, restarting");
            self.restart();
        }
    }

    /// Real key pressed. Returns whether it had an effect.
    pub fn key_down(&mut self, action: GameAction) -> bool {
        match self.mode {
            Mode::Menu => {
                if action != GameAction::Pause {
                    return false;
                }
                self.mode = Mode::Game;
                self.restart();
                info!(seed = self.session.seed(), "game started");
                true
            }
            Mode::Game => {
                if action == GameAction::Pause {
                    return self.toggle_pause();
                }
                if self.paused {
                    return false;
                }
                self.session.button_down(action)
            }
        }
    }

    /// Real key released. Processed while paused so held state is not stuck.
    pub fn key_up(&mut self, action: GameAction) -> bool {
        match self.mode {
            Mode::Menu => false,
            Mode::Game => self.session.button_up(action),
        }
    }

    fn toggle_pause(&mut self) -> bool {
        if !self.session.game_over() {
            self.paused = !self.paused;
            info!(paused = self.paused, "pause toggled");
            true
        } else if self.session.end_timer().is_some() {
            self.restart();
            self.mode = Mode::Menu;
            info!("back to menu");
            true
        } else {
            false
        }
    }

    /// Erase the board and restart the session and the demo pilot.
    pub fn restart(&mut self) {
        self.paused = false;
        self.session.reset();
        self.demo.reset();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
        out.mode = self.mode;
        out.paused = self.paused;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
