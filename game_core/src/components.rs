use glam::Vec2;
use thiserror::Error;

/// Axis-aligned rectangle taking part in motion, collision and drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,  // Top-left corner
    pub size: Vec2, // Width and height, both positive
    pub vel: Vec2,  // Units per tick
}

/// Rejected rectangle geometry
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("rect size must be positive, got {width}x{height}")]
    NonPositiveSize { width: f32, height: f32 },
    #[error("rect position must be finite, got ({x}, {y})")]
    NonFinitePosition { x: f32, y: f32 },
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "rect size must be positive");
        debug_assert!(pos.is_finite(), "rect position must be finite");
        Self { pos, size, vel }
    }

    /// Build a rect, rejecting empty or non-finite geometry
    pub fn try_new(pos: Vec2, size: Vec2, vel: Vec2) -> Result<Self, GeometryError> {
        // Written so that NaN sizes fail too
        if !(size.x > 0.0 && size.y > 0.0) {
            return Err(GeometryError::NonPositiveSize {
                width: size.x,
                height: size.y,
            });
        }
        if !pos.is_finite() {
            return Err(GeometryError::NonFinitePosition { x: pos.x, y: pos.y });
        }
        Ok(Self { pos, size, vel })
    }

    /// Rect that never moves on its own
    pub fn fixed(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos, size, Vec2::ZERO)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn is_static(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// Which end of the playfield a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

/// Ball tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ball;

/// Wall tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wall;

/// Who drives a paddle's vertical velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_follow_position() {
        let mut rect = Rect::new(Vec2::new(5.0, 65.0), Vec2::new(5.0, 30.0), Vec2::ZERO);
        assert_eq!(rect.left(), 5.0);
        assert_eq!(rect.right(), 10.0);
        assert_eq!(rect.top(), 65.0);
        assert_eq!(rect.bottom(), 95.0);

        rect.pos += Vec2::new(1.0, -2.0);
        assert_eq!(rect.left(), 6.0);
        assert_eq!(rect.right(), 11.0);
        assert_eq!(rect.top(), 63.0);
        assert_eq!(rect.bottom(), 93.0);
    }

    #[test]
    fn test_rect_try_new_rejects_empty_size() {
        let result = Rect::try_new(Vec2::ZERO, Vec2::new(0.0, 4.0), Vec2::ZERO);
        assert_eq!(
            result,
            Err(GeometryError::NonPositiveSize {
                width: 0.0,
                height: 4.0
            })
        );
        assert!(Rect::try_new(Vec2::ZERO, Vec2::new(3.0, -1.0), Vec2::ZERO).is_err());
        assert!(Rect::try_new(Vec2::ZERO, Vec2::new(f32::NAN, 1.0), Vec2::ZERO).is_err());
    }

    #[test]
    fn test_rect_try_new_rejects_non_finite_position() {
        let result = Rect::try_new(Vec2::new(f32::INFINITY, 0.0), Vec2::ONE, Vec2::ZERO);
        assert!(matches!(
            result,
            Err(GeometryError::NonFinitePosition { .. })
        ));
    }

    #[test]
    fn test_rect_fixed_is_static() {
        let wall = Rect::fixed(Vec2::ZERO, Vec2::new(240.0, 1.0));
        assert!(wall.is_static());
        let ball = Rect::new(Vec2::ZERO, Vec2::splat(6.0), Vec2::new(1.0, 0.0));
        assert!(!ball.is_static());
    }

    #[test]
    fn test_geometry_error_message() {
        let err = GeometryError::NonPositiveSize {
            width: 0.0,
            height: 2.0,
        };
        assert_eq!(err.to_string(), "rect size must be positive, got 0x2");
    }
}
