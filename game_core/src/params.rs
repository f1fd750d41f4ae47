/// Fixed tuning constants for the rect-pong simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Timing
    pub const FPS: f32 = 60.0;

    // Playfield
    pub const ARENA_WIDTH: f32 = 240.0;
    pub const ARENA_HEIGHT: f32 = 160.0;
    pub const WALL_THICKNESS: f32 = 1.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 100.0; // units per second
    pub const LEFT_PADDLE_X: f32 = 5.0;
    pub const RIGHT_PADDLE_X: f32 = 230.0;
    pub const PADDLE_Y: f32 = 65.0;

    // Ball
    pub const BALL_SIZE: f32 = 6.0;
    pub const BALL_SPEED: f32 = 100.0; // units per second
    pub const BALL_SPAWN_X: f32 = 117.0;
    pub const BALL_SPAWN_Y: f32 = 77.0;
    pub const BALL_SERVE_X: f32 = -1.0; // multiples of BALL_SPEED / FPS
    pub const BALL_SERVE_Y: f32 = 0.6;
}
