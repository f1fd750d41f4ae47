use crate::components::Side;
use crate::registry::Registry;
use crate::resources::Events;
use crate::Config;

/// Put the ball back at its spawn point once it leaves the playfield sideways.
///
/// Only the position is reset: the ball keeps the velocity it left with.
pub fn check_scoring(registry: &mut Registry, config: &Config, events: &mut Events) {
    let Some(entity) = registry.ball() else {
        return;
    };
    let Some(ball) = registry.rect_mut(entity) else {
        return;
    };

    let exited = if ball.right() > config.arena_width {
        Some(Side::Right)
    } else if ball.left() < 0.0 {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(side) = exited {
        ball.pos = config.ball_spawn();
        events.ball_reset = Some(side);
        tracing::debug!(?side, vel = ?ball.vel, "ball left the playfield, reset to spawn");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Ball, Rect};
    use glam::Vec2;

    fn setup(pos: Vec2, vel: Vec2) -> (Registry, hecs::Entity, Config, Events) {
        let mut registry = Registry::new();
        let ball = registry.spawn(Rect::new(pos, Vec2::splat(6.0), vel), (Ball,));
        (registry, ball, Config::new(), Events::new())
    }

    #[test]
    fn test_ball_resets_after_exiting_right() {
        let vel = Vec2::new(100.0 / 60.0, -1.0);
        let (mut registry, ball, config, mut events) = setup(Vec2::new(240.0, 30.0), vel);

        check_scoring(&mut registry, &config, &mut events);

        let rect = registry.rect(ball);
        assert_eq!(rect.map(|r| r.pos), Some(Vec2::new(117.0, 77.0)));
        assert_eq!(rect.map(|r| r.vel), Some(vel), "velocity is kept");
        assert_eq!(events.ball_reset, Some(Side::Right));
    }

    #[test]
    fn test_ball_resets_after_exiting_left() {
        let vel = Vec2::new(-100.0 / 60.0, 1.0);
        let (mut registry, ball, config, mut events) = setup(Vec2::new(-0.5, 120.0), vel);

        check_scoring(&mut registry, &config, &mut events);

        let rect = registry.rect(ball);
        assert_eq!(rect.map(|r| r.pos), Some(Vec2::new(117.0, 77.0)));
        assert_eq!(rect.map(|r| r.vel), Some(vel));
        assert_eq!(events.ball_reset, Some(Side::Left));
    }

    #[test]
    fn test_ball_touching_edges_stays() {
        for x in [0.0, 234.0] {
            let (mut registry, ball, config, mut events) =
                setup(Vec2::new(x, 50.0), Vec2::new(1.0, 0.0));

            check_scoring(&mut registry, &config, &mut events);

            assert_eq!(registry.rect(ball).map(|r| r.pos), Some(Vec2::new(x, 50.0)));
            assert_eq!(events.ball_reset, None);
        }
    }
}
