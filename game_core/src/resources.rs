use hecs::Entity;

use crate::components::Side;

/// Number of ticks simulated so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick(pub u64);

impl Tick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

/// Velocity component flipped by a bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal, // vx inverted
    Vertical,   // vy inverted
}

/// One resolved collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounce {
    pub entity: Entity,
    pub obstacle: Entity,
    pub axis: Axis,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub bounces: Vec<Bounce>,
    pub ball_reset: Option<Side>, // Side the ball left through
    pub ai_skipped: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.bounces.clear();
        self.ball_reset = None;
        self.ai_skipped = false;
    }

    /// Whether `entity` bounced this tick
    pub fn bounced(&self, entity: Entity) -> bool {
        self.bounces.iter().any(|b| b.entity == entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advance() {
        let mut tick = Tick::new();
        assert_eq!(tick, Tick(0));
        tick.advance();
        tick.advance();
        assert_eq!(tick, Tick(2));
    }

    #[test]
    fn test_events_clear() {
        let mut world = hecs::World::new();
        let a = world.spawn(());
        let b = world.spawn(());

        let mut events = Events::new();
        events.bounces.push(Bounce {
            entity: a,
            obstacle: b,
            axis: Axis::Vertical,
        });
        events.ball_reset = Some(Side::Left);
        events.ai_skipped = true;
        assert!(events.bounced(a));
        assert!(!events.bounced(b));

        events.clear();

        assert!(events.bounces.is_empty());
        assert_eq!(events.ball_reset, None);
        assert!(!events.ai_skipped);
        assert!(!events.bounced(a));
    }
}
