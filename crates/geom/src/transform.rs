use serde::{Deserialize, Serialize};

use crate::rect::Rect;
use crate::vec2::Vec2;

/// An immutable 2D affine transform — the top two rows of a 3×3 matrix:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
///
/// mapping `x' = a·x + c·y + tx` and `y' = b·x + d·y + ty`. All operations
/// return new values; there is no in-place mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn translation(x: f64, y: f64) -> Self {
        Transform {
            tx: x,
            ty: y,
            ..Transform::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Transform {
            a: sx,
            d: sy,
            ..Transform::IDENTITY
        }
    }

    /// The transform mapping `src` onto `dst`: `src`'s origin lands on
    /// `dst`'s origin and `src`'s size scales to `dst`'s size.
    ///
    /// An empty `src` has no well-defined mapping; the identity is returned
    /// instead of dividing by zero.
    pub fn between(src: Rect, dst: Rect) -> Self {
        if src.is_empty() {
            return Transform::IDENTITY;
        }
        let sx = dst.width / src.width;
        let sy = dst.height / src.height;
        Transform {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            tx: dst.x - src.x * sx,
            ty: dst.y - src.y * sy,
        }
    }

    /// A vertical flip inside `rect`: `rect.top()` maps to `rect.bottom()`
    /// and vice versa, x is untouched. Used for inverted (icicle) layouts.
    pub fn flip_y_within(rect: Rect) -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: -1.0,
            tx: 0.0,
            ty: rect.top() + rect.bottom(),
        }
    }

    /// Matrix product `self · other`: the resulting transform applies
    /// `other` first, then `self`.
    pub fn compose(self, other: Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// The inverse transform, or `None` when the matrix is singular.
    pub fn invert(self) -> Option<Transform> {
        let det = self.a * self.d - self.b * self.c;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Transform {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            tx: (self.c * self.ty - self.d * self.tx) / det,
            ty: (self.b * self.tx - self.a * self.ty) / det,
        })
    }

    pub fn apply(self, point: Vec2) -> Vec2 {
        Vec2::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }

    /// Transform an axis-aligned rect, normalizing so width/height stay
    /// non-negative (a flip moves the origin instead).
    pub fn apply_rect(self, rect: Rect) -> Rect {
        let p0 = self.apply(rect.origin());
        let p1 = self.apply(Vec2::new(rect.right(), rect.bottom()));
        Rect::new(
            p0.x.min(p1.x),
            p0.y.min(p1.y),
            (p1.x - p0.x).abs(),
            (p1.y - p0.y).abs(),
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Transform::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}
