use pyrelens_geom::{Rect, Vec2};

use crate::canvas::PhysicalCanvas;
use crate::canvas_view::CanvasView;
use crate::model::{Profile, Span};

/// Spans overlapping the current visible window: time overlap on x, row
/// range on y. This is the set a renderer actually needs to draw.
pub fn visible_spans<'a>(
    profile: &'a Profile,
    view: &'a CanvasView,
) -> impl Iterator<Item = &'a Span> {
    let window = view.config_view();
    let start = profile.metadata.start_time;
    profile.spans.iter().filter(move |span| {
        let rect = span_rect(span, start);
        !rect.is_empty() && rect.overlaps(&window)
    })
}

/// The span under a physical pointer position, for hover / tooltip / click
/// targeting. Returns `None` over empty canvas regions or between spans.
pub fn hit_test<'a>(
    profile: &'a Profile,
    view: &CanvasView,
    canvas: &PhysicalCanvas,
    physical: Vec2,
) -> Option<&'a Span> {
    if canvas.is_empty() {
        return None;
    }
    let cursor = view.get_transformed_config_space_cursor(physical, canvas);
    if cursor.y < 0.0 {
        return None;
    }
    let row = cursor.y.floor() as u32;
    let time = profile.metadata.start_time + cursor.x;
    profile
        .spans
        .iter()
        .find(|span| span.depth == row && span.start <= time && time < span.end)
}

fn span_rect(span: &Span, profile_start: f64) -> Rect {
    Rect::new(
        span.start - profile_start,
        f64::from(span.depth),
        span.duration(),
        1.0,
    )
}
