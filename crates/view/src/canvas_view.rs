use pyrelens_geom::{Rect, Transform, Vec2};

use crate::canvas::PhysicalCanvas;
use crate::model::Profile;

const DEFAULT_BAR_HEIGHT: f64 = 20.0;

/// Layout and behavior knobs for a [`CanvasView`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasViewOptions {
    /// Logical pixels per stack row. Only used to compute how many rows fit
    /// in the canvas; config-space y-coordinates are measured in rows.
    pub bar_height: f64,
    /// Extra rows of headroom added to the config-space height.
    pub depth_offset: f64,
    /// Icicle layout: depth grows downward instead of upward. Affects the
    /// draw-direction transforms only, never cursor mapping.
    pub inverted: bool,
    /// Offset rect for views sharing a canvas with a time-shifted sibling.
    /// The x value becomes a pure x-translation between config space and
    /// draw space; an empty rect means no offset.
    pub transform_offset: Rect,
}

impl Default for CanvasViewOptions {
    fn default() -> Self {
        Self {
            bar_height: DEFAULT_BAR_HEIGHT,
            depth_offset: 0.0,
            inverted: false,
            transform_offset: Rect::EMPTY,
        }
    }
}

/// View state for one rendered canvas: the full logical bounds of the data
/// (`config_space`), the currently visible window into it (`config_view`),
/// and an optional translation applied between config space and draw space
/// (`config_space_transform`).
///
/// Coordinate conventions: x is time in the profile's logical units, y is
/// stack depth in rows. All mutation goes through [`set_config_view`] /
/// [`resize_config_space`], which clamp silently — out-of-range input never
/// errors, it lands on the nearest valid window.
///
/// [`set_config_view`]: CanvasView::set_config_view
/// [`resize_config_space`]: CanvasView::resize_config_space
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasView {
    config_space: Rect,
    config_view: Rect,
    config_space_transform: Transform,
    min_width: f64,
    bar_height: f64,
    depth_offset: f64,
    inverted: bool,
}

impl CanvasView {
    pub fn new(canvas: &PhysicalCanvas, profile: &Profile, options: CanvasViewOptions) -> Self {
        let bar_height = normalize_bar_height(options.bar_height);
        let config_space = Rect::new(
            0.0,
            0.0,
            profile.duration().max(0.0),
            f64::from(profile.depth_rows()) + options.depth_offset.max(0.0),
        );

        // Start fully zoomed out on x; on y show only as many rows as the
        // canvas fits, anchored at the top.
        let visible_rows = rows_that_fit(canvas, bar_height);
        let config_view = config_space.with_height(visible_rows.min(config_space.height));

        let config_space_transform = if options.transform_offset.is_empty() {
            Transform::IDENTITY
        } else {
            Transform::translation(options.transform_offset.x, 0.0)
        };

        Self {
            config_space,
            config_view,
            config_space_transform,
            min_width: profile.min_span_duration(),
            bar_height,
            depth_offset: options.depth_offset.max(0.0),
            inverted: options.inverted,
        }
    }

    pub fn config_space(&self) -> Rect {
        self.config_space
    }

    pub fn config_view(&self) -> Rect {
        self.config_view
    }

    pub fn config_space_transform(&self) -> Transform {
        self.config_space_transform
    }

    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    pub fn bar_height(&self) -> f64 {
        self.bar_height
    }

    pub fn depth_offset(&self) -> f64 {
        self.depth_offset
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Replace the visible window with `rect`, clamped to stay navigable.
    ///
    /// Clamp order is deliberate and observable: width/height limits first
    /// (re-centering on the candidate when a dimension was clamped), then
    /// per-axis edge alignment against the config-space bounds.
    pub fn set_config_view(&mut self, rect: Rect) {
        let space = self.config_space;

        // Zoom limits. The lower bound cannot exceed the space itself
        // (degenerate profiles where min_width > duration).
        let min_w = self.min_width.min(space.width);
        let width = rect.width.clamp(min_w, space.width);
        let height = rect.height.clamp(0.0, space.height);

        // A clamped dimension grows/shrinks symmetrically around the
        // candidate's center; edge alignment below pins any overhang.
        let mut x = if width == rect.width {
            rect.x
        } else {
            rect.x - (width - rect.width) / 2.0
        };
        let mut y = if height == rect.height {
            rect.y
        } else {
            rect.y - (height - rect.height) / 2.0
        };

        if x < space.left() {
            x = space.left();
        }
        if x + width > space.right() {
            x = space.right() - width;
        }

        if y < space.top() {
            y = space.top();
        }
        if y + height > space.bottom() {
            y = space.bottom() - height;
        }

        self.config_view = Rect::new(x, y, width, height);
    }

    /// Apply a pan/zoom delta to the visible window and re-clamp.
    pub fn transform_config_view(&mut self, transform: Transform) {
        self.set_config_view(transform.apply_rect(self.config_view));
    }

    /// Refit the visible row count after the canvas resized, keeping the
    /// horizontal window and the vertical scroll position where possible.
    pub fn resize_config_space(&mut self, canvas: &PhysicalCanvas) {
        let height = rows_that_fit(canvas, self.bar_height).min(self.config_space.height);
        self.set_config_view(self.config_view.with_height(height));
    }

    /// Draw transform: config-space coordinates → physical pixels, such
    /// that the physical rect shows exactly `config_view`.
    pub fn from_config_view(&self, physical_space: Rect) -> Transform {
        self.draw_transform(self.config_view, physical_space)
    }

    /// Draw transform mapping the full config space onto the physical rect
    /// (minimap-style full-extent rendering).
    pub fn from_config_space(&self, physical_space: Rect) -> Transform {
        self.draw_transform(self.config_space, physical_space)
    }

    /// Like [`from_config_view`](Self::from_config_view), with the config
    /// space transform applied first — draw coordinates that already carry
    /// the shared-canvas offset.
    pub fn from_transformed_config_view(&self, physical_space: Rect) -> Transform {
        self.from_config_view(physical_space)
            .compose(self.config_space_transform)
    }

    /// Like [`from_config_space`](Self::from_config_space), offset-first.
    pub fn from_transformed_config_space(&self, physical_space: Rect) -> Transform {
        self.from_config_space(physical_space)
            .compose(self.config_space_transform)
    }

    /// Inverse of [`from_config_view`](Self::from_config_view).
    pub fn to_config_view(&self, physical_space: Rect) -> Transform {
        self.from_config_view(physical_space)
            .invert()
            .unwrap_or(Transform::IDENTITY)
    }

    /// Inverse of [`from_config_space`](Self::from_config_space).
    pub fn to_config_space(&self, physical_space: Rect) -> Transform {
        self.from_config_space(physical_space)
            .invert()
            .unwrap_or(Transform::IDENTITY)
    }

    /// Map a physical pointer position to config-space coordinates.
    ///
    /// The point is taken relative to the canvas origin and divided by the
    /// device pixel ratio before scaling into the visible window. A
    /// zero-area canvas yields the window origin.
    pub fn get_config_space_cursor(&self, physical: Vec2, canvas: &PhysicalCanvas) -> Vec2 {
        let logical_size = canvas.logical_size();
        if logical_size.x <= 0.0 || logical_size.y <= 0.0 {
            return self.config_view.origin();
        }
        let logical = physical.sub(canvas.origin()).scale(1.0 / canvas.dpr());
        Vec2::new(
            self.config_view.x + logical.x * self.config_view.width / logical_size.x,
            self.config_view.y + logical.y * self.config_view.height / logical_size.y,
        )
    }

    /// Cursor position relative to the visible window's origin.
    pub fn get_config_view_cursor(&self, physical: Vec2, canvas: &PhysicalCanvas) -> Vec2 {
        self.get_config_space_cursor(physical, canvas)
            .sub(self.config_view.origin())
    }

    /// Cursor in the un-offset coordinate system of the underlying model:
    /// the config-space cursor passed through the inverse of
    /// `config_space_transform`.
    pub fn get_transformed_config_space_cursor(
        &self,
        physical: Vec2,
        canvas: &PhysicalCanvas,
    ) -> Vec2 {
        let cursor = self.get_config_space_cursor(physical, canvas);
        self.config_space_transform
            .invert()
            .unwrap_or(Transform::IDENTITY)
            .apply(cursor)
    }

    fn draw_transform(&self, logical: Rect, physical_space: Rect) -> Transform {
        let base = Transform::between(logical, physical_space);
        if self.inverted {
            Transform::flip_y_within(physical_space).compose(base)
        } else {
            base
        }
    }
}

/// How many rows the canvas can display, fractional, never below one —
/// a zero-size canvas still gets a single-row window.
fn rows_that_fit(canvas: &PhysicalCanvas, bar_height: f64) -> f64 {
    (canvas.logical_size().y / bar_height).max(1.0)
}

fn normalize_bar_height(bar_height: f64) -> f64 {
    if bar_height > 0.0 && bar_height.is_finite() {
        bar_height
    } else {
        DEFAULT_BAR_HEIGHT
    }
}
