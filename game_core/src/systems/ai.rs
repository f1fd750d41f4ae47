use crate::components::{Controller, Rect};
use crate::registry::Registry;
use crate::resources::Events;
use crate::Config;

/// Where the ball will cross the paddle's x if it keeps its current heading.
///
/// Wall bounces on the way are ignored. Returns `None` while the ball has no
/// horizontal motion, since it never reaches the paddle.
pub fn predict_intercept(paddle: &Rect, ball: &Rect) -> Option<f32> {
    if ball.vel.x == 0.0 {
        return None;
    }
    Some((ball.vel.y / ball.vel.x) * (paddle.pos.x - ball.pos.x) + ball.pos.y)
}

/// Velocity steering the paddle toward the predicted intercept.
///
/// Up when the prediction falls in the paddle's top third, down in the bottom
/// third, still in the middle third.
pub fn ai_velocity(paddle: &Rect, ball: &Rect, speed: f32) -> Option<f32> {
    let prediction = predict_intercept(paddle, ball)?;
    let height = paddle.size.y;

    let vel = if prediction < paddle.top() + height / 3.0 {
        -speed
    } else if prediction > paddle.top() + height * 2.0 / 3.0 {
        speed
    } else {
        0.0
    };
    Some(vel)
}

/// Steer every AI paddle; with a vertically-moving ball the paddles keep their velocity
pub fn update_ai(registry: &mut Registry, config: &Config, events: &mut Events) {
    let Some(ball) = registry.ball().and_then(|e| registry.rect(e)) else {
        return;
    };
    let speed = config.paddle_step();

    for entity in registry.controlled_by(Controller::Ai) {
        let Some(rect) = registry.rect_mut(entity) else {
            continue;
        };
        match ai_velocity(rect, &ball, speed) {
            Some(vel) => rect.vel.y = vel,
            None => {
                tracing::trace!("ball has no horizontal velocity, AI holds");
                events.ai_skipped = true;
            }
        }
    }
}
