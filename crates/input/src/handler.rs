//! Held-key tracking for terminal environments.
//!
//! The session wants clean key-down/key-up edges. Terminals deliver auto-repeat
//! presses while a key is held, and many never report releases at all. The
//! tracker turns the raw stream into edges: repeats are swallowed, and while no
//! real release has been seen a key counts as released once it has been quiet
//! for the release timeout.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::GameAction;

/// Matches the interval of typical terminal auto-repeat after the first delay.
pub const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 150;

const ACTIONS: usize = 6;

/// An edge to forward to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    Down(GameAction),
    Up(GameAction),
}

/// Releases synthesized by [`KeyTracker::update`].
pub type Released = ArrayVec<GameAction, ACTIONS>;

fn slot(action: GameAction) -> usize {
    match action {
        GameAction::RotateCcw => 0,
        GameAction::RotateCw => 1,
        GameAction::MoveLeft => 2,
        GameAction::MoveRight => 3,
        GameAction::SoftDrop => 4,
        GameAction::Pause => 5,
    }
}

const SLOT_ACTIONS: [GameAction; ACTIONS] = [
    GameAction::RotateCcw,
    GameAction::RotateCw,
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDrop,
    GameAction::Pause,
];

#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Milliseconds since the last press/repeat, per held action.
    held: [Option<u32>; ACTIONS],
    release_timeout_ms: u32,
    /// Set once the terminal reports a real release; synthesis stops then.
    releases_seen: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: [None; ACTIONS],
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
            releases_seen: false,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    pub fn releases_seen(&self) -> bool {
        self.releases_seen
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.held[slot(action)].is_some()
    }

    /// Press or auto-repeat. Returns the action only on the first press.
    pub fn press(&mut self, action: GameAction) -> Option<GameAction> {
        let held = &mut self.held[slot(action)];
        let fresh = held.is_none();
        *held = Some(0);
        fresh.then_some(action)
    }

    /// Real release. Returns the action if it was held.
    pub fn release(&mut self, action: GameAction) -> Option<GameAction> {
        self.releases_seen = true;
        self.held[slot(action)].take().map(|_| action)
    }

    /// Translate a raw terminal event into an edge.
    pub fn handle(&mut self, key: KeyEvent) -> Option<KeyInput> {
        let action = map_key(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(action).map(KeyInput::Down),
            KeyEventKind::Release => self.release(action).map(KeyInput::Up),
        }
    }

    /// Age held keys by `elapsed_ms` and release the ones that went quiet.
    ///
    /// Does nothing once real releases have been observed.
    pub fn update(&mut self, elapsed_ms: u32) -> Released {
        let mut released = Released::new();
        if self.releases_seen {
            return released;
        }
        for (i, held) in self.held.iter_mut().enumerate() {
            let Some(idle) = held else { continue };
            *idle = idle.saturating_add(elapsed_ms);
            if *idle > self.release_timeout_ms {
                *held = None;
                released.push(SLOT_ACTIONS[i]);
            }
        }
        released
    }

    /// Forget every held key, returning the ones that were down.
    pub fn reset(&mut self) -> Released {
        let mut released = Released::new();
        for (i, held) in self.held.iter_mut().enumerate() {
            if held.take().is_some() {
                released.push(SLOT_ACTIONS[i]);
            }
        }
        released
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
