use cold_core::Point2i;

/// Number of farthest-point refinements used to pick the anchor pair of a
/// closed curve.
const ANCHOR_ITERS: usize = 3;

/// Unsigned shoelace area of the polygon through `points`.
pub fn contour_area(points: &[Point2i]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
    }
    twice.abs() as f64 * 0.5
}

/// Polyline length; `closed` adds the segment from the last point back to
/// the first.
pub fn arc_length(points: &[Point2i], closed: bool) -> f64 {
    let open: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    match (closed, points.first(), points.last()) {
        (true, Some(&first), Some(&last)) if points.len() > 1 => open + last.distance(first),
        _ => open,
    }
}

/// Distance from `p` to the line through `a` and `b`, or to `a` when the two
/// coincide.
fn segment_distance(p: Point2i, a: Point2i, b: Point2i) -> f64 {
    let ab = b - a;
    let ap = p - a;
    if ab.is_zero() {
        return ap.norm();
    }
    ab.cross(ap).unsigned_abs() as f64 / ab.norm()
}

/// Index of the point farthest from `points[from]`, scanning forward
/// cyclically. Ties keep the first one found.
fn farthest_from(points: &[Point2i], from: usize) -> (usize, i64) {
    let n = points.len();
    let origin = points[from];
    let mut best = (from, 0i64);
    for step in 1..n {
        let i = (from + step) % n;
        let d = (points[i] - origin).norm_sq();
        if d > best.1 {
            best = (i, d);
        }
    }
    best
}

/// Douglas-Peucker simplification.
///
/// A point survives when it lies farther than `epsilon` from the chord of
/// the span that contains it. Open curves keep both endpoints. Closed curves
/// are split at two mutually distant anchors and the result is emitted in
/// cyclic order starting from the first anchor; a closed curve whose points
/// all lie within `epsilon` of that anchor collapses to the anchor alone.
///
/// Inputs with two or fewer points are returned unchanged.
pub fn approx_polygon(points: &[Point2i], epsilon: f64, closed: bool) -> Vec<Point2i> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }
    let epsilon = epsilon.max(0.0);

    let mut keep = vec![false; n];
    let mut spans = Vec::new();
    let start;

    if closed {
        let mut anchor = 0;
        let mut far = (0, 0i64);
        for iter in 0..ANCHOR_ITERS {
            if iter > 0 {
                anchor = far.0;
            }
            far = farthest_from(points, anchor);
        }
        if far.1 as f64 <= epsilon * epsilon {
            return vec![points[anchor]];
        }
        start = anchor;
        keep[anchor] = true;
        keep[far.0] = true;
        spans.push((far.0, anchor));
        spans.push((anchor, far.0));
    } else {
        start = 0;
        keep[0] = true;
        keep[n - 1] = true;
        spans.push((0, n - 1));
    }

    while let Some((a, b)) = spans.pop() {
        let len = (b + n - a) % n;
        if len < 2 {
            continue;
        }

        let (pa, pb) = (points[a], points[b]);
        let mut split = (a, 0.0f64);
        for step in 1..len {
            let i = (a + step) % n;
            let d = segment_distance(points[i], pa, pb);
            if d > split.1 {
                split = (i, d);
            }
        }

        if split.1 > epsilon {
            keep[split.0] = true;
            spans.push((split.0, b));
            spans.push((a, split.0));
        }
    }

    (0..n)
        .map(|step| (start + step) % n)
        .filter(|&i| keep[i])
        .map(|i| points[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use cold_core::Point2i;

    use super::{approx_polygon, arc_length, contour_area};

    fn pts(coords: &[(i32, i32)]) -> Vec<Point2i> {
        coords.iter().map(|&(x, y)| Point2i::new(x, y)).collect()
    }

    /// Boundary pixels of a `w x h` block at the origin, traced down the
    /// left side first.
    fn rectangle_border(w: i32, h: i32) -> Vec<Point2i> {
        let mut out = Vec::new();
        out.extend((0..h).map(|y| Point2i::new(0, y)));
        out.extend((1..w).map(|x| Point2i::new(x, h - 1)));
        out.extend((0..h - 1).rev().map(|y| Point2i::new(w - 1, y)));
        out.extend((1..w - 1).rev().map(|x| Point2i::new(x, 0)));
        out
    }

    #[test]
    fn area_is_orientation_independent() {
        let ccw = pts(&[(0, 0), (0, 3), (4, 3), (4, 0)]);
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert!((contour_area(&ccw) - 12.0).abs() < 1e-12);
        assert!((contour_area(&cw) - 12.0).abs() < 1e-12);
        assert_eq!(contour_area(&pts(&[(0, 0), (5, 5)])), 0.0);
    }

    #[test]
    fn arc_length_open_and_closed() {
        let tri = pts(&[(0, 0), (3, 0), (3, 4)]);
        assert!((arc_length(&tri, false) - 7.0).abs() < 1e-12);
        assert!((arc_length(&tri, true) - 12.0).abs() < 1e-12);
        assert_eq!(arc_length(&tri[..1], true), 0.0);
        assert_eq!(arc_length(&[], true), 0.0);
    }

    #[test]
    fn closed_rectangle_reduces_to_corners() {
        let border = rectangle_border(5, 4);
        assert_eq!(border.len(), 14);

        let eps = 0.01 * arc_length(&border, true);
        let poly = approx_polygon(&border, eps, true);
        assert_eq!(poly, pts(&[(0, 0), (0, 3), (4, 3), (4, 0)]));
    }

    #[test]
    fn open_collinear_run_keeps_endpoints() {
        let line = pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(approx_polygon(&line, 0.5, false), pts(&[(0, 0), (3, 0)]));
    }

    #[test]
    fn peaks_beyond_tolerance_survive() {
        let zigzag = pts(&[(0, 0), (2, 2), (4, 0)]);
        assert_eq!(approx_polygon(&zigzag, 1.0, false), zigzag);
        assert_eq!(approx_polygon(&zigzag, 2.5, false), pts(&[(0, 0), (4, 0)]));
    }

    #[test]
    fn tiny_closed_curve_collapses_to_one_point() {
        let block = pts(&[(1, 1), (1, 2), (2, 2), (2, 1)]);
        let poly = approx_polygon(&block, 5.0, true);
        assert_eq!(poly.len(), 1);
        assert!(block.contains(&poly[0]));
    }

    #[test]
    fn short_inputs_pass_through() {
        let two = pts(&[(0, 0), (9, 9)]);
        assert_eq!(approx_polygon(&two, 100.0, true), two);
        assert!(approx_polygon(&[], 1.0, true).is_empty());
    }
}
