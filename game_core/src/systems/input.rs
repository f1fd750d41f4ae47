use crate::components::Controller;
use crate::registry::Registry;
use crate::Config;

/// Keys the simulation distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Other,
}

/// Discrete keyboard event delivered by the host between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

/// Vertical paddle velocity after `event`.
///
/// Releasing any key stops the paddle, even when the other direction key is
/// still held.
pub fn paddle_velocity(event: InputEvent, current: f32, speed: f32) -> f32 {
    match event {
        InputEvent::KeyDown(Key::Up) => -speed,
        InputEvent::KeyDown(Key::Down) => speed,
        InputEvent::KeyDown(Key::Other) => current,
        InputEvent::KeyUp(_) => 0.0,
    }
}

/// Apply a key event to every human-controlled paddle
pub fn apply_input(registry: &mut Registry, config: &Config, event: InputEvent) {
    let speed = config.paddle_step();
    for entity in registry.controlled_by(Controller::Human) {
        if let Some(rect) = registry.rect_mut(entity) {
            rect.vel.y = paddle_velocity(event, rect.vel.y, speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Paddle, Rect, Side};
    use glam::Vec2;

    const SPEED: f32 = 100.0 / 60.0;

    #[test]
    fn test_key_down_sets_direction() {
        assert_eq!(paddle_velocity(InputEvent::KeyDown(Key::Up), 0.0, SPEED), -SPEED);
        assert_eq!(paddle_velocity(InputEvent::KeyDown(Key::Down), 0.0, SPEED), SPEED);
        assert_eq!(paddle_velocity(InputEvent::KeyDown(Key::Down), -SPEED, SPEED), SPEED);
    }

    #[test]
    fn test_other_key_down_is_ignored() {
        assert_eq!(paddle_velocity(InputEvent::KeyDown(Key::Other), -SPEED, SPEED), -SPEED);
        assert_eq!(paddle_velocity(InputEvent::KeyDown(Key::Other), 0.0, SPEED), 0.0);
    }

    #[test]
    fn test_any_key_up_stops() {
        for key in [Key::Up, Key::Down, Key::Other] {
            assert_eq!(paddle_velocity(InputEvent::KeyUp(key), SPEED, SPEED), 0.0);
            assert_eq!(paddle_velocity(InputEvent::KeyUp(key), -SPEED, SPEED), 0.0);
        }
    }

    #[test]
    fn test_releasing_one_of_two_held_keys_stops() {
        let mut vel = 0.0;
        vel = paddle_velocity(InputEvent::KeyDown(Key::Up), vel, SPEED);
        vel = paddle_velocity(InputEvent::KeyDown(Key::Down), vel, SPEED);
        assert_eq!(vel, SPEED);
        vel = paddle_velocity(InputEvent::KeyUp(Key::Down), vel, SPEED);
        assert_eq!(vel, 0.0, "up is still held but the paddle stops");
    }

    #[test]
    fn test_apply_input_only_moves_human_paddles() {
        let config = Config::new();
        let mut registry = Registry::new();
        let paddle = Rect::fixed(Vec2::new(5.0, 65.0), Vec2::new(5.0, 30.0));
        let human = registry.spawn(paddle, (Paddle::new(Side::Left), Controller::Human));
        let ai = registry.spawn(paddle, (Paddle::new(Side::Right), Controller::Ai));

        apply_input(&mut registry, &config, InputEvent::KeyDown(Key::Up));
        assert_eq!(registry.rect(human).map(|r| r.vel.y), Some(-config.paddle_step()));
        assert_eq!(registry.rect(ai).map(|r| r.vel.y), Some(0.0));

        apply_input(&mut registry, &config, InputEvent::KeyUp(Key::Other));
        assert_eq!(registry.rect(human).map(|r| r.vel.y), Some(0.0));
    }
}
