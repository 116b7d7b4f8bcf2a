use std::f64::consts::TAU;

use super::{cross_2d, left_normal, Point2, PRECISION};

/// Bounded segment-segment intersection.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are the parameters in
/// `[0, 1]` along `a0 -> a1` and `b0 -> b1`. Parallel segments never intersect.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = cross_2d(&da, &db);
    if cross.abs() < PRECISION {
        return None;
    }

    let d = b0 - a0;
    let t = cross_2d(&d, &db) / cross;
    let u = cross_2d(&d, &da) / cross;

    let eps = PRECISION;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t = t.clamp(0.0, 1.0);
        Some((a0 + da * t, t, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Unbounded line-line intersection.
///
/// Given lines `p1 + t * (q1 - p1)` and `p2 + u * (q2 - p2)`, returns `(t, u)`
/// if they are not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    q1: &Point2,
    p2: &Point2,
    q2: &Point2,
) -> Option<(f64, f64)> {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let cross = cross_2d(&d1, &d2);
    if cross.abs() < PRECISION {
        return None;
    }
    let d = p2 - p1;
    Some((cross_2d(&d, &d2) / cross, cross_2d(&d, &d1) / cross))
}

/// Intersection of the segment `a0 -> a1` with a circular arc.
///
/// The arc has `center`, `radius`, `start_angle` and signed `sweep`.
/// Returns `(point, t_seg, t_arc)` triples with both parameters in `[0, 1]`,
/// ordered along the segment. A touching line yields a single hit.
#[must_use]
pub fn line_arc_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> Vec<(Point2, f64, f64)> {
    let d = a1 - a0;
    let len_sq = d.norm_squared();
    if radius < PRECISION || sweep.abs() < PRECISION || len_sq < PRECISION * PRECISION {
        return Vec::new();
    }

    // Foot of the perpendicular from the center, then half the chord on
    // either side of it.
    let foot_t = (center - a0).dot(&d) / len_sq;
    let foot = a0 + d * foot_t;
    let half_chord_sq = radius * radius - (center - foot).norm_squared();
    if half_chord_sq < -PRECISION {
        return Vec::new();
    }
    let half_chord = half_chord_sq.max(0.0).sqrt();
    let params = if half_chord < PRECISION * 100.0 {
        vec![foot_t]
    } else {
        let dt = half_chord / len_sq.sqrt();
        vec![foot_t - dt, foot_t + dt]
    };

    params
        .into_iter()
        .filter(|t| (-PRECISION..=1.0 + PRECISION).contains(t))
        .filter_map(|t| {
            let t = t.clamp(0.0, 1.0);
            let p = a0 + d * t;
            angle_to_arc_param(polar_angle(center, &p), start_angle, sweep).map(|s| (p, t, s))
        })
        .collect()
}

/// Intersection of two circular arcs.
///
/// Returns `(point, t1, t2)` triples where `t1` and `t2` are arc parameters in
/// `[0, 1]`. Concentric arcs report no intersection.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn arc_arc_intersect_2d(
    c1: &Point2,
    r1: f64,
    start1: f64,
    sweep1: f64,
    c2: &Point2,
    r2: f64,
    start2: f64,
    sweep2: f64,
) -> Vec<(Point2, f64, f64)> {
    let between = c2 - c1;
    let dist = between.norm();
    if r1 < PRECISION
        || r2 < PRECISION
        || dist < PRECISION
        || dist > r1 + r2 + PRECISION
        || dist < (r1 - r2).abs() - PRECISION
    {
        return Vec::new();
    }

    // Both crossings lie on the chord perpendicular to the center line.
    let axis = between / dist;
    let along = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let across_sq = r1 * r1 - along * along;
    if across_sq < -PRECISION {
        return Vec::new();
    }
    let chord_mid = c1 + axis * along;
    let across = left_normal(&axis) * across_sq.max(0.0).sqrt();
    let candidates = if across.norm() < PRECISION {
        vec![chord_mid]
    } else {
        vec![chord_mid + across, chord_mid - across]
    };

    candidates
        .into_iter()
        .filter_map(|p| {
            let t1 = angle_to_arc_param(polar_angle(c1, &p), start1, sweep1)?;
            let t2 = angle_to_arc_param(polar_angle(c2, &p), start2, sweep2)?;
            Some((p, t1, t2))
        })
        .collect()
}

fn polar_angle(center: &Point2, p: &Point2) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Converts an absolute angle to an arc parameter `t` in `[0, 1]`.
///
/// Returns `None` if the angle is not within the arc's angular range.
#[must_use]
pub fn angle_to_arc_param(angle: f64, start_angle: f64, sweep: f64) -> Option<f64> {
    let eps = PRECISION * 100.0;
    if sweep.abs() < PRECISION {
        return None;
    }

    // Offset from start_angle in the sweep direction, in [0, 2π).
    let delta = if sweep > 0.0 {
        (angle - start_angle).rem_euclid(TAU)
    } else {
        -(start_angle - angle).rem_euclid(TAU)
    };

    let t = delta / sweep;
    if t <= 1.0 + eps {
        return Some(t.clamp(0.0, 1.0));
    }
    // Just short of a full turn counts as the start point.
    if (delta.abs() - TAU).abs() < eps * TAU {
        return Some(0.0);
    }
    None
}
