//! Integration test: drive a CanvasView through a realistic session —
//! construct from a profile, zoom, pan, resize the canvas, and query
//! cursors — verifying the navigation invariants hold throughout.

use pyrelens_geom::{Rect, Transform, Vec2};
use pyrelens_view::{
    CanvasView, CanvasViewOptions, PhysicalCanvas, Profile, ProfileMetadata, Span, hit_test,
    visible_spans,
};

fn span(id: u64, start: f64, end: f64, depth: u32, parent: Option<u64>) -> Span {
    Span {
        id,
        name: format!("frame_{id}"),
        start,
        end,
        depth,
        parent,
        self_time: end - start,
        category: None,
    }
}

/// A 1000µs profile, 50 rows deep, with a 1µs leaf span — the zoom floor.
fn fixture_profile() -> Profile {
    let mut spans = vec![span(0, 0.0, 1000.0, 0, None)];
    for depth in 1..50u32 {
        spans.push(span(
            u64::from(depth),
            f64::from(depth),
            490.0,
            depth,
            Some(u64::from(depth - 1)),
        ));
    }
    spans.push(span(100, 500.0, 501.0, 1, Some(0)));
    Profile {
        metadata: ProfileMetadata {
            name: Some("fixture".into()),
            start_time: 0.0,
            end_time: 1000.0,
        },
        spans,
    }
}

fn assert_rect(actual: Rect, expected: Rect) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9
            && (actual.y - expected.y).abs() < 1e-9
            && (actual.width - expected.width).abs() < 1e-9
            && (actual.height - expected.height).abs() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn zoom_pan_resize_session() {
    let mut canvas = PhysicalCanvas::new(1000.0, 1000.0, 1.0);
    let profile = fixture_profile();
    let mut view = CanvasView::new(&canvas, &profile, CanvasViewOptions::default());

    // All 50 rows fit a 1000px canvas at 20px per row.
    assert_rect(view.config_space(), Rect::new(0.0, 0.0, 1000.0, 50.0));
    assert_rect(view.config_view(), Rect::new(0.0, 0.0, 1000.0, 50.0));
    assert!((view.min_width() - 1.0).abs() < 1e-9);

    // Attempting to scroll past the right edge pins to it.
    view.set_config_view(Rect::new(600.0, 0.0, 500.0, 50.0));
    assert_rect(view.config_view(), Rect::new(500.0, 0.0, 500.0, 50.0));

    // Zooming in halts at the narrowest distinguishable span.
    view.set_config_view(Rect::new(500.0, 0.0, 1e-6, 50.0));
    assert!((view.config_view().width - view.min_width()).abs() < 1e-9);

    // Zooming way out recovers the full extent, never more.
    view.transform_config_view(Transform::scale(1e9, 1.0));
    assert_rect(view.config_view(), Rect::new(0.0, 0.0, 1000.0, 50.0));

    // Cursor round trip at the window origin.
    view.set_config_view(Rect::new(250.0, 10.0, 500.0, 25.0));
    let cursor = view.get_config_space_cursor(Vec2::ZERO, &canvas);
    assert!((cursor.x - 250.0).abs() < 1e-9);
    assert!((cursor.y - 10.0).abs() < 1e-9);

    // Shrink, grow, and restore the canvas: config space is untouched, the
    // horizontal window survives, and the row fit follows the canvas height.
    canvas.resize(500.0, 500.0, 1.0);
    view.resize_config_space(&canvas);
    assert_rect(view.config_view(), Rect::new(250.0, 10.0, 500.0, 25.0));

    // 2000 physical px at dpr 2 is 1000 logical px: all 50 rows fit, and the
    // window shifts up so its bottom stays inside the space.
    canvas.resize(2000.0, 2000.0, 2.0);
    view.resize_config_space(&canvas);
    assert_rect(view.config_view(), Rect::new(250.0, 0.0, 500.0, 50.0));

    canvas.resize(1000.0, 1000.0, 1.0);
    view.resize_config_space(&canvas);
    assert_rect(view.config_space(), Rect::new(0.0, 0.0, 1000.0, 50.0));
    assert_rect(view.config_view(), Rect::new(250.0, 0.0, 500.0, 50.0));
}

#[test]
fn culling_and_hit_testing_follow_the_view() {
    let canvas = PhysicalCanvas::new(1000.0, 1000.0, 1.0);
    let profile = fixture_profile();
    let mut view = CanvasView::new(&canvas, &profile, CanvasViewOptions::default());

    let all = visible_spans(&profile, &view).count();
    assert_eq!(all, profile.spans.len());

    // A narrow window around the 1µs leaf keeps only the leaf and the root
    // span that still stretches under it; the ladder ends at 490µs.
    view.set_config_view(Rect::new(500.0, 0.0, 2.0, 50.0));
    let visible: Vec<u64> = visible_spans(&profile, &view).map(|s| s.id).collect();
    assert_eq!(visible, vec![0, 100]);

    // The pointer in the middle of the window lands on the leaf's row.
    view.set_config_view(Rect::new(500.0, 0.0, 2.0, 2.0));
    let hit = hit_test(&profile, &view, &canvas, Vec2::new(250.0, 750.0));
    assert_eq!(hit.map(|s| s.id), Some(100));
}

#[test]
fn offset_views_share_a_canvas() {
    let canvas = PhysicalCanvas::new(1000.0, 1000.0, 1.0);
    let profile = fixture_profile();

    let plain = CanvasView::new(&canvas, &profile, CanvasViewOptions::default());
    let offset = CanvasView::new(
        &canvas,
        &profile,
        CanvasViewOptions {
            transform_offset: Rect::new(200.0, 0.0, 1.0, 1.0),
            ..CanvasViewOptions::default()
        },
    );

    assert!(plain.config_space_transform().is_identity());
    assert_eq!(
        offset.config_space_transform(),
        Transform::translation(200.0, 0.0)
    );

    // The same model point draws 200 config units to the right in the
    // offset view, and the cursor query undoes exactly that shift.
    let physical = canvas.physical_rect();
    let p = Vec2::new(300.0, 5.0);
    let a = offset.from_transformed_config_view(physical).apply(p);
    let b = plain.from_config_view(physical).apply(Vec2::new(500.0, 5.0));
    assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);

    let cursor = offset.get_transformed_config_space_cursor(Vec2::new(500.0, 0.0), &canvas);
    assert!((cursor.x - 300.0).abs() < 1e-9);
}
