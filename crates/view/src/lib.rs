pub mod canvas;
pub mod canvas_view;
pub mod cull;
pub mod model;

pub use canvas::PhysicalCanvas;
pub use canvas_view::{CanvasView, CanvasViewOptions};
pub use cull::{hit_test, visible_spans};
pub use model::{Profile, ProfileMetadata, Span};
