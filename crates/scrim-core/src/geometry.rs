#![forbid(unsafe_code)]

//! Geometric records exchanged with the host layout system.
//!
//! [`Bounds`] is the box a parent assigns to a popup surface; [`Insets`] is
//! the four-edge safe-area record pushed by an inset provider. Both use `f64`
//! logical units. Inset application performs plain arithmetic with no
//! clamping: insets larger than the box produce negative widths/heights, and
//! downstream layout must tolerate degenerate sizes.

/// A bounding box assigned by a parent layout system.
///
/// Origin at top-left. Width and height may be negative after inset
/// adjustment; no invariant forbids it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Bounds {
    /// Create a new bounding box.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the box has no positive area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrink the box by the given insets.
    ///
    /// The origin moves by the left/top inset and each dimension loses both
    /// of its edge insets. Results are not clamped.
    pub fn inset(&self, insets: Insets) -> Bounds {
        Bounds {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: self.width - insets.horizontal_sum(),
            height: self.height - insets.vertical_sum(),
        }
    }
}

/// Four-edge padding record for safe-area/system insets.
///
/// Values are non-negative in practice but nothing enforces it; negative or
/// inconsistent insets are accepted silently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// All-zero insets.
    pub const ZERO: Self = Self::all(0.0);

    /// Create insets with equal values on every edge.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create insets on the left/right edges only.
    pub const fn horizontal(val: f64) -> Self {
        Self {
            top: 0.0,
            right: val,
            bottom: 0.0,
            left: val,
        }
    }

    /// Create insets on the top/bottom edges only.
    pub const fn vertical(val: f64) -> Self {
        Self {
            top: val,
            right: 0.0,
            bottom: val,
            left: 0.0,
        }
    }

    /// Create insets with specific per-edge values.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }

    /// Whether every edge is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<f64> for Insets {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

impl From<(f64, f64)> for Insets {
    fn from((vertical, horizontal): (f64, f64)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl From<(f64, f64, f64, f64)> for Insets {
    fn from((top, right, bottom, left): (f64, f64, f64, f64)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}
