// Copyright 2025 Lars Brubaker
// License: MIT
//
// Pure geometric predicates on 2-D points.
//
// Orientation is always decided with a cross product rather than by comparing
// slopes, so vertical edges and coincident points never divide by zero.

pub type Real = f32;

/// A 2-D position `[x, y]`.
pub type Point = [Real; 2];

/// Returns true if u == v (exact equality).
#[inline]
pub fn vert_eq(u: Point, v: Point) -> bool {
    u[0] == v[0] && u[1] == v[1]
}

#[inline]
pub fn midpoint(u: Point, v: Point) -> Point {
    [(u[0] + v[0]) / 2.0, (u[1] + v[1]) / 2.0]
}

/// Cross product of (v - u) and (w - u).
/// Positive when u, v, w turn counter-clockwise (y up), zero when collinear.
#[inline]
pub fn orient(u: Point, v: Point, w: Point) -> Real {
    (v[0] - u[0]) * (w[1] - u[1]) - (v[1] - u[1]) * (w[0] - u[0])
}

/// Signed area of the triangle (u, v, w); positive for CCW.
#[inline]
pub fn triangle_signed_area(u: Point, v: Point, w: Point) -> Real {
    0.5 * orient(u, v, w)
}

#[inline]
pub fn centroid(u: Point, v: Point, w: Point) -> Point {
    [(u[0] + v[0] + w[0]) / 3.0, (u[1] + v[1] + w[1]) / 3.0]
}

/// Moves `p` away from `center` by factor `s` (s > 1 pushes outward).
#[inline]
pub fn scale_about(p: Point, center: Point, s: Real) -> Point {
    [center[0] + (p[0] - center[0]) * s, center[1] + (p[1] - center[1]) * s]
}

/// Signed area of a closed polygon (shoelace); positive for CCW.
pub fn polygon_signed_area(poly: &[Point]) -> Real {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        area += a[0] * b[1] - b[0] * a[1];
    }
    area * 0.5
}

/// Orientation results smaller than this, relative to the squared magnitude
/// of the coordinates involved, are indistinguishable from f32 rounding.
pub const ORIENT_TOLERANCE: Real = 16.0 * Real::EPSILON;

/// Sign of `orient(u, v, w)`: 1 for a left turn, -1 for a right turn, 0 when
/// the points are collinear to within rounding.
pub fn orient_sign(u: Point, v: Point, w: Point) -> i8 {
    let o = orient(u, v, w);
    let m = u.iter().chain(&v).chain(&w).fold(0.0, |m: Real, c| m.max(c.abs()));
    if o.abs() <= ORIENT_TOLERANCE * m * m {
        0
    } else if o > 0.0 {
        1
    } else {
        -1
    }
}

/// Returns true if `p` lies strictly inside triangle (a, b, c), regardless of
/// its winding. Points on an edge (to within rounding) are outside.
pub fn point_strictly_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = orient_sign(a, b, p);
    let d2 = orient_sign(b, c, p);
    let d3 = orient_sign(c, a, p);
    d1 != 0 && d1 == d2 && d2 == d3
}

/// Returns true if `p` lies on segment (a, b) but is neither endpoint.
pub fn on_open_segment(p: Point, a: Point, b: Point) -> bool {
    !vert_eq(p, a) && !vert_eq(p, b) && orient_sign(a, b, p) == 0 && on_segment(a, p, b)
}

/// Assuming p, q, r are collinear, returns true if q lies on segment pr.
#[inline]
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q[0] <= p[0].max(r[0]) && q[0] >= p[0].min(r[0]) && q[1] <= p[1].max(r[1]) && q[1] >= p[1].min(r[1])
}

#[inline]
fn boxes_overlap(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    p1[0].min(q1[0]) <= p2[0].max(q2[0])
        && p2[0].min(q2[0]) <= p1[0].max(q1[0])
        && p1[1].min(q1[1]) <= p2[1].max(q2[1])
        && p2[1].min(q2[1]) <= p1[1].max(q1[1])
}

/// Returns true if closed segments (p1, q1) and (p2, q2) share at least one point.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    if !boxes_overlap(p1, q1, p2, q2) {
        return false;
    }
    let o1 = orient_sign(p1, q1, p2);
    let o2 = orient_sign(p1, q1, q2);
    let o3 = orient_sign(p2, q2, p1);
    let o4 = orient_sign(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    (o1 == 0 && on_segment(p1, p2, q1))
        || (o2 == 0 && on_segment(p1, q2, q1))
        || (o3 == 0 && on_segment(p2, p1, q2))
        || (o4 == 0 && on_segment(p2, q1, q2))
}

/// Linear interpolation of sample index `i` of `count` across `[lo, hi]`.
#[inline]
pub fn index_to_x(i: usize, count: usize, lo: Real, hi: Real) -> Real {
    if count < 2 {
        return lo;
    }
    lo + (hi - lo) * (i as Real / (count - 1) as Real)
}
