//! Triangle primitives for hull collision
//!
//! Containment uses the area-sum test: a point lies inside a triangle when the
//! three sub-triangles it forms with the edges add up to the whole.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Relative slack allowed between the sub-area sum and the triangle area
pub const AREA_EPSILON: f32 = 1e-5;

/// Fixed playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if a point lies inside the visible playfield (edges inclusive)
    pub fn contains(&self, point: IVec2) -> bool {
        (0..=self.width).contains(&point.x) && (0..=self.height).contains(&point.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        use crate::consts::{BOUNDS_HEIGHT, BOUNDS_WIDTH};
        Self::new(BOUNDS_WIDTH, BOUNDS_HEIGHT)
    }
}

/// Area of the triangle `abc`
#[inline]
pub fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a).abs() / 2.0
}

/// Check if `p` lies inside (or on an edge of) the triangle `abc`
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let whole = triangle_area(a, b, c);
    let parts = triangle_area(p, a, b) + triangle_area(p, b, c) + triangle_area(p, c, a);

    // Scale the tolerance with the triangle so large hulls don't reject edge hits
    (parts - whole).abs() <= AREA_EPSILON * whole.max(1.0)
}

/// A triangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        triangle_area(self.a, self.b, self.c)
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_triangle(point, self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0))
    }

    #[test]
    fn test_triangle_area() {
        assert_eq!(unit_triangle().area(), 50.0);
        // Winding doesn't matter
        let tri = unit_triangle();
        assert_eq!(triangle_area(tri.c, tri.b, tri.a), 50.0);
        // Collinear points have no area
        assert_eq!(
            triangle_area(Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)),
            0.0
        );
    }

    #[test]
    fn test_point_inside() {
        assert!(unit_triangle().contains(Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn test_point_outside() {
        let tri = unit_triangle();
        assert!(!tri.contains(Vec2::new(8.0, 8.0)));
        assert!(!tri.contains(Vec2::new(-1.0, 5.0)));
        assert!(!tri.contains(Vec2::new(50.0, -50.0)));
    }

    #[test]
    fn test_point_on_edge_and_vertex() {
        let tri = unit_triangle();
        assert!(tri.contains(Vec2::new(5.0, 0.0)));
        assert!(tri.contains(Vec2::new(5.0, 5.0)));
        assert!(tri.contains(tri.a));
        assert!(tri.contains(tri.c));
    }

    #[test]
    fn test_fractional_edge_point() {
        // Hypotenuse point that isn't exactly representable
        let tri = unit_triangle();
        let p = Vec2::new(10.0 / 3.0, 20.0 / 3.0);
        assert!(tri.contains(p));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::default();
        assert!(bounds.contains(IVec2::new(0, 0)));
        assert!(bounds.contains(IVec2::new(800, 600)));
        assert!(!bounds.contains(IVec2::new(-1, 10)));
        assert!(!bounds.contains(IVec2::new(801, 10)));
    }

    fn coord() -> impl Strategy<Value = f32> {
        (-500i32..=500).prop_map(|v| v as f32)
    }

    fn point() -> impl Strategy<Value = Vec2> {
        (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        #[test]
        fn containment_ignores_vertex_order(
            p in point(),
            a in point(),
            b in point(),
            c in point()
        ) {
            let expected = point_in_triangle(p, a, b, c);
            prop_assert_eq!(point_in_triangle(p, b, c, a), expected);
            prop_assert_eq!(point_in_triangle(p, c, a, b), expected);
            prop_assert_eq!(point_in_triangle(p, a, c, b), expected);
            prop_assert_eq!(point_in_triangle(p, c, b, a), expected);
            prop_assert_eq!(point_in_triangle(p, b, a, c), expected);
        }

        #[test]
        fn vertices_are_contained(a in point(), b in point(), c in point()) {
            prop_assert!(point_in_triangle(a, a, b, c));
            prop_assert!(point_in_triangle(b, a, b, c));
            prop_assert!(point_in_triangle(c, a, b, c));
        }
    }
}
