use serde::{Deserialize, Serialize};

use pyrelens_geom::{Rect, Vec2};

/// The pixel-addressable drawing surface behind a view.
///
/// Sizes are stored in physical (device) pixels; the device pixel ratio
/// converts to logical (CSS-style) pixels, which is what pointer events and
/// row-fit computations work in. The origin offsets this canvas within a
/// larger surface when several tracks share one drawing target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalCanvas {
    width: f64,
    height: f64,
    dpr: f64,
    origin: Vec2,
}

impl PhysicalCanvas {
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr: normalize_dpr(dpr),
            origin: Vec2::ZERO,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Replace the physical dimensions after the underlying surface resizes.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.dpr = normalize_dpr(dpr);
    }

    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn physical_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.width / self.dpr, self.height / self.dpr)
    }

    pub fn physical_rect(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.width, self.height)
    }

    pub fn logical_rect(&self) -> Rect {
        let size = self.logical_size();
        Rect::new(
            self.origin.x / self.dpr,
            self.origin.y / self.dpr,
            size.x,
            size.y,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.physical_rect().is_empty()
    }
}

fn normalize_dpr(dpr: f64) -> f64 {
    if dpr > 0.0 && dpr.is_finite() {
        dpr
    } else {
        1.0
    }
}
