pub mod ai;
pub mod input;
pub mod motion;
pub mod scoring;

pub use ai::*;
pub use input::*;
pub use motion::*;
pub use scoring::*;
