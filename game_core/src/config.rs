use std::time::Duration;

use glam::Vec2;

use crate::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub fps: f32,
    pub arena_width: f32,
    pub arena_height: f32,
    pub wall_thickness: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    pub paddle_y: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_spawn_x: f32,
    pub ball_spawn_y: f32,
    pub ball_serve_x: f32,
    pub ball_serve_y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: Params::FPS,
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_x: Params::RIGHT_PADDLE_X,
            paddle_y: Params::PADDLE_Y,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_spawn_x: Params::BALL_SPAWN_X,
            ball_spawn_y: Params::BALL_SPAWN_Y,
            ball_serve_x: Params::BALL_SERVE_X,
            ball_serve_y: Params::BALL_SERVE_Y,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paddle displacement per tick while a direction is held
    pub fn paddle_step(&self) -> f32 {
        self.paddle_speed / self.fps
    }

    /// Ball velocity at startup, in units per tick
    pub fn ball_serve_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_serve_x, self.ball_serve_y) * (self.ball_speed / self.fps)
    }

    /// Top-left corner the ball starts from and returns to after leaving the playfield
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.ball_spawn_x, self.ball_spawn_y)
    }

    /// Wall-clock interval between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }
}
