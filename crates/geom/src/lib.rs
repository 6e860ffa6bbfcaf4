pub mod rect;
pub mod transform;
pub mod vec2;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
