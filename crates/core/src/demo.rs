//! Demo pilot - synthetic input for the attract screen
//!
//! The pilot presses a random action, holds it for a random number of ticks
//! and waits a random number of ticks before the next press. All three are
//! unpacked from one pooled random number.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::GameAction;

/// Upper bound (exclusive) of the pooled random number; 5 * 60 * 120.
pub const DEMO_POOL: u32 = 36_000;

/// A synthetic key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoEvent {
    Press(GameAction),
    Release(GameAction),
}

/// At most one release and one press per tick.
pub type DemoEvents = ArrayVec<DemoEvent, 2>;

#[derive(Debug, Clone)]
pub struct DemoPilot {
    rng: SimpleRng,
    pool: Option<u32>,
    action: Option<GameAction>,
    /// Ticks until the held action is released; fires at -1.
    hold: i32,
    /// Ticks until the next press; fires at 0.
    next: i32,
}

impl DemoPilot {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            pool: None,
            action: None,
            hold: 0,
            next: 0,
        }
    }

    /// Schedule the next press for the coming tick.
    pub fn reset(&mut self) {
        self.hold = 0;
        self.next = 0;
    }

    pub fn action(&self) -> Option<GameAction> {
        self.action
    }

    pub fn hold(&self) -> i32 {
        self.hold
    }

    pub fn next_press(&self) -> i32 {
        self.next
    }

    /// Advance one tick and return the events to feed the session.
    pub fn tick(&mut self) -> DemoEvents {
        let mut events = DemoEvents::new();
        if self.hold == -1 {
            if let Some(action) = self.action {
                events.push(DemoEvent::Release(action));
            }
        }
        if self.next == 0 {
            events.push(DemoEvent::Press(self.fire()));
        }
        self.next -= 1;
        self.hold -= 1;
        events
    }

    fn fire(&mut self) -> GameAction {
        let mut pool = match self.pool {
            Some(pool) => pool,
            None => self.rng.next_range(DEMO_POOL),
        };
        let mut take = |size: u32| {
            let n = pool % size;
            pool /= size;
            n as i32
        };

        let action = GameAction::DEMO[take(GameAction::DEMO.len() as u32) as usize];
        self.hold = take(60) + 2;
        self.next = take(120) + 4;
        if self.hold >= self.next {
            self.hold = self.next - 2;
        }

        self.action = Some(action);
        self.pool = Some(self.rng.next_range(DEMO_POOL));
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_presses() {
        let mut pilot = DemoPilot::new(3);
        let events = pilot.tick();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], DemoEvent::Press(_)));
        assert_eq!(events[0], DemoEvent::Press(pilot.action().unwrap()));
    }

    #[test]
    fn hold_always_shorter_than_gap() {
        let mut pilot = DemoPilot::new(99);
        for _ in 0..2_000 {
            let events = pilot.tick();
            if events.iter().any(|e| matches!(e, DemoEvent::Press(_))) {
                // both counters were already decremented once
                assert!(pilot.hold() < pilot.next_press());
                assert!(pilot.hold() >= 1);
                assert!(pilot.next_press() >= 3);
            }
        }
    }

    #[test]
    fn every_press_is_released_before_the_next() {
        let mut pilot = DemoPilot::new(7);
        let mut held: Option<GameAction> = None;
        for _ in 0..5_000 {
            for event in pilot.tick() {
                match event {
                    DemoEvent::Release(action) => {
                        assert_eq!(held.take(), Some(action));
                    }
                    DemoEvent::Press(action) => {
                        assert_eq!(held, None);
                        held = Some(action);
                    }
                }
            }
        }
    }

    #[test]
    fn reset_fires_on_next_tick() {
        let mut pilot = DemoPilot::new(11);
        pilot.tick();
        pilot.tick();
        pilot.reset();
        let events = pilot.tick();
        assert!(events.iter().any(|e| matches!(e, DemoEvent::Press(_))));
    }

    #[test]
    fn same_seed_same_script() {
        let mut a = DemoPilot::new(42);
        let mut b = DemoPilot::new(42);
        for _ in 0..1_000 {
            assert_eq!(a.tick(), b.tick());
        }
    }
}
