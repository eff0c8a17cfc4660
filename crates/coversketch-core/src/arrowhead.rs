//! Arrowhead geometry for double-headed dimension arrows.
//!
//! Each end of a line gets a triangular head made of the endpoint (the tip)
//! and two wing points. The wings sit [`DEFAULT_HEAD_LENGTH`] away from the
//! tip at [`HEAD_ANGLE`] either side of the line, pointing back into the
//! line's interior.
//!
//! ```text
//!   left wing                          right wing
//!        \                                 /
//!   start ◄───────────────────────────────► end
//!        /                                 \
//!   right wing                         left wing
//! ```

use std::f32::consts::FRAC_PI_6;

use crate::geometry::Point;

/// Default distance from an arrow tip to each of its wing points.
pub const DEFAULT_HEAD_LENGTH: f32 = 10.0;

/// Angle between the line and each wing, in radians (30°).
pub const HEAD_ANGLE: f32 = FRAC_PI_6;

/// One triangular arrowhead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    tip: Point,
    left_wing: Point,
    right_wing: Point,
}

impl ArrowHead {
    pub fn tip(&self) -> Point {
        self.tip
    }

    /// Wing at `angle - 30°` relative to the line direction.
    pub fn left_wing(&self) -> Point {
        self.left_wing
    }

    /// Wing at `angle + 30°` relative to the line direction.
    pub fn right_wing(&self) -> Point {
        self.right_wing
    }

    /// Returns the triangle as a closed polygon: tip, left wing, right wing.
    pub fn triangle(&self) -> [Point; 3] {
        [self.tip, self.left_wing, self.right_wing]
    }
}

/// The two heads of a double-headed arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHeads {
    start: ArrowHead,
    end: ArrowHead,
}

impl ArrowHeads {
    /// Computes both heads of the arrow from `start` to `end`.
    ///
    /// The start head's wings point forward along the line and the end head's
    /// wings point backward, so both heads open toward the line's interior.
    /// A zero-length line yields heads pointing along the positive X axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use coversketch_core::{arrowhead::ArrowHeads, geometry::Point};
    /// let heads = ArrowHeads::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0);
    /// assert!(heads.end().left_wing().x() < 100.0);
    /// assert!(heads.start().left_wing().x() > 0.0);
    /// ```
    pub fn new(start: Point, end: Point, head_length: f32) -> Self {
        let angle = start.angle_to(end);
        let left = Point::from_polar(angle - HEAD_ANGLE, head_length);
        let right = Point::from_polar(angle + HEAD_ANGLE, head_length);

        Self {
            start: ArrowHead {
                tip: start,
                left_wing: start.add_point(left),
                right_wing: start.add_point(right),
            },
            end: ArrowHead {
                tip: end,
                left_wing: end.sub_point(left),
                right_wing: end.sub_point(right),
            },
        }
    }

    pub fn start(&self) -> ArrowHead {
        self.start
    }

    pub fn end(&self) -> ArrowHead {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_horizontal_end_wings_are_symmetric() {
        let heads = ArrowHeads::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0);
        let end = heads.end();

        let dx = 10.0 * HEAD_ANGLE.cos();
        let dy = 10.0 * HEAD_ANGLE.sin();

        assert_eq!(end.tip(), Point::new(100.0, 0.0));
        assert_approx_eq!(f32, end.left_wing().x(), 100.0 - dx);
        assert_approx_eq!(f32, end.left_wing().y(), dy);
        assert_approx_eq!(f32, end.right_wing().x(), 100.0 - dx);
        assert_approx_eq!(f32, end.right_wing().y(), -dy);

        // Mirror images about the line's axis
        assert_approx_eq!(f32, end.left_wing().y(), -end.right_wing().y());
        assert_approx_eq!(f32, end.left_wing().x(), end.right_wing().x());
    }

    #[test]
    fn test_horizontal_wings_length_and_angle() {
        let heads = ArrowHeads::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0);

        for head in [heads.start(), heads.end()] {
            for wing in [head.left_wing(), head.right_wing()] {
                let offset = wing.sub_point(head.tip());
                assert_approx_eq!(f32, offset.hypot(), 10.0, epsilon = 1e-5);
                let angle = (offset.y() / offset.x()).atan().abs();
                assert_approx_eq!(f32, angle, HEAD_ANGLE, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_start_wings_point_forward() {
        let heads = ArrowHeads::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0);
        let start = heads.start();

        assert_approx_eq!(f32, start.left_wing().x(), 10.0 * HEAD_ANGLE.cos());
        assert_approx_eq!(f32, start.left_wing().y(), -5.0, epsilon = 1e-5);
        assert_approx_eq!(f32, start.right_wing().y(), 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_vertical_arrow_heads_point_inward() {
        // Device-space vertical arrow running downward
        let heads = ArrowHeads::new(Point::new(620.0, 90.0), Point::new(620.0, 610.0), 10.0);

        assert!(heads.start().left_wing().y() > 90.0);
        assert!(heads.start().right_wing().y() > 90.0);
        assert!(heads.end().left_wing().y() < 610.0);
        assert!(heads.end().right_wing().y() < 610.0);
    }

    #[test]
    fn test_triangle_order() {
        let heads = ArrowHeads::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0), DEFAULT_HEAD_LENGTH);
        let end = heads.end();
        assert_eq!(end.triangle(), [end.tip(), end.left_wing(), end.right_wing()]);
    }

    #[test]
    fn test_zero_length_arrow() {
        let point = Point::new(5.0, 5.0);
        let heads = ArrowHeads::new(point, point, 10.0);
        assert_eq!(heads.start().tip(), point);
        assert!(heads.start().left_wing().x() > point.x());
        assert!(heads.end().left_wing().x() < point.x());
    }
}
