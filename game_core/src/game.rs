use hecs::Entity;

use crate::components::{Rect, Side};
use crate::render::Surface;
use crate::systems::{apply_input, InputEvent};
use crate::{create_ball, create_paddle, create_wall, step, Config, Controller, Events, Registry, Tick};

/// A complete local match: one human paddle, one AI paddle, the ball and two walls
pub struct Game {
    pub registry: Registry,
    pub config: Config,
    pub events: Events,
    pub tick: Tick,
    ball: Entity,
    left_paddle: Entity,
    right_paddle: Entity,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut registry = Registry::new();

        // Spawn order decides collision order
        let left_paddle = create_paddle(&mut registry, &config, Side::Left, Controller::Human);
        let right_paddle = create_paddle(&mut registry, &config, Side::Right, Controller::Ai);
        let ball = create_ball(&mut registry, &config);
        create_wall(&mut registry, &config, 0.0);
        create_wall(
            &mut registry,
            &config,
            config.arena_height - config.wall_thickness,
        );

        Self {
            registry,
            config,
            events: Events::new(),
            tick: Tick::new(),
            ball,
            left_paddle,
            right_paddle,
        }
    }

    /// Run one tick of the game loop, drawing into `surface`
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        step(&mut self.registry, &self.config, &mut self.events, surface);
        self.tick.advance();
    }

    /// Feed a key event to the human paddle; it takes effect on the next tick
    pub fn handle_input(&mut self, event: InputEvent) {
        apply_input(&mut self.registry, &self.config, event);
    }

    pub fn ball(&self) -> Entity {
        self.ball
    }

    pub fn left_paddle(&self) -> Entity {
        self.left_paddle
    }

    pub fn right_paddle(&self) -> Entity {
        self.right_paddle
    }

    pub fn ball_rect(&self) -> Option<Rect> {
        self.registry.rect(self.ball)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
