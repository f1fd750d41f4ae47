pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod registry;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use registry::*;
pub use render::*;
pub use resources::*;

use glam::Vec2;
use hecs::Entity;
use systems::*;

/// Run one tick of the rect-pong simulation
pub fn step<S: Surface + ?Sized>(
    registry: &mut Registry,
    config: &Config,
    events: &mut Events,
    surface: &mut S,
) {
    // Clear events at start of tick
    events.clear();
    surface.clear(config.arena_width, config.arena_height);

    // 1. Move every rect in spawn order, drawing it at its new position
    for index in 0..registry.len() {
        let Some(entity) = registry.entity_at(index) else {
            continue;
        };
        move_rect(registry, entity, events);
        if let Some(rect) = registry.rect(entity) {
            surface.fill_rect(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y);
        }
    }

    // 2. Steer AI paddles toward the ball
    update_ai(registry, config, events);

    // 3. Reset the ball if it left the playfield
    check_scoring(registry, config, events);
}

/// Helper to create a paddle at its side's starting position
pub fn create_paddle(
    registry: &mut Registry,
    config: &Config,
    side: Side,
    controller: Controller,
) -> Entity {
    let x = match side {
        Side::Left => config.left_paddle_x,
        Side::Right => config.right_paddle_x,
    };
    let rect = Rect::fixed(
        Vec2::new(x, config.paddle_y),
        Vec2::new(config.paddle_width, config.paddle_height),
    );
    registry.spawn(rect, (Paddle::new(side), controller))
}

/// Helper to create the ball at its spawn point with the serve velocity
pub fn create_ball(registry: &mut Registry, config: &Config) -> Entity {
    let rect = Rect::new(
        config.ball_spawn(),
        Vec2::splat(config.ball_size),
        config.ball_serve_velocity(),
    );
    registry.spawn(rect, (Ball,))
}

/// Helper to create a full-width wall with its top edge at `y`
pub fn create_wall(registry: &mut Registry, config: &Config, y: f32) -> Entity {
    let rect = Rect::fixed(
        Vec2::new(0.0, y),
        Vec2::new(config.arena_width, config.wall_thickness),
    );
    registry.spawn(rect, (Wall,))
}
