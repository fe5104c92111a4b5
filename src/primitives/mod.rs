//! Floating-point geometric primitives.

mod circle2;
mod edge2;
mod point2;
mod triangle2;
mod vec2;

pub use circle2::Circle2;
pub use edge2::Edge2;
pub use point2::Point2;
pub use triangle2::Triangle2;
pub use vec2::Vec2;
