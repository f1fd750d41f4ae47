/// Drawing capability the game loop renders each tick through
pub trait Surface {
    /// Blank the whole `width` x `height` frame
    fn clear(&mut self, width: f32, height: f32);

    /// Fill an axis-aligned rectangle with its top-left corner at (`x`, `y`)
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// Surface that discards everything, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _width: f32, _height: f32) {}

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}
}
