//! Analytic template paths in unit-square coordinates.
//!
//! These are raw paths: they still have to go through the normalization
//! pipeline before they can be compared with a stroke.

use std::f64::consts::PI;

use crate::math::Point2;
use crate::recognition::{GestureKind, HorizontalDirection};

/// Returns the raw path for a template class, or `None` for `Unknown`.
#[must_use]
pub fn raw_path(kind: GestureKind, n: usize) -> Option<Vec<Point2>> {
    match kind {
        GestureKind::LineRight => Some(line(HorizontalDirection::Right, n)),
        GestureKind::LineLeft => Some(line(HorizontalDirection::Left, n)),
        GestureKind::ArrowRight => Some(arrow(HorizontalDirection::Right, n)),
        GestureKind::ArrowLeft => Some(arrow(HorizontalDirection::Left, n)),
        GestureKind::Circle => Some(circle(n)),
        GestureKind::Z => Some(z(n)),
        GestureKind::Unknown => None,
    }
}

/// `i / (count - 1)`, with a single-sample run pinned to 0.
#[allow(clippy::cast_precision_loss)]
fn fraction(i: usize, count: usize) -> f64 {
    i as f64 / count.saturating_sub(1).max(1) as f64
}

/// `n` points along `y = 0`, left to right or right to left.
#[must_use]
pub fn line(direction: HorizontalDirection, n: usize) -> Vec<Point2> {
    (0..n)
        .map(|i| {
            let t = fraction(i, n);
            let x = match direction {
                HorizontalDirection::Left => 1.0 - t,
                _ => t,
            };
            Point2::new(x, 0.0)
        })
        .collect()
}

/// A horizontal shaft carrying 60% of the points, followed by a five-point
/// head (base, upper flank, tip, lower flank, tip) pointing along travel.
#[must_use]
pub fn arrow(direction: HorizontalDirection, n: usize) -> Vec<Point2> {
    const Y: f64 = 0.5;
    const TOP: f64 = 0.35;
    const BOTTOM: f64 = 0.65;
    const FLANK: f64 = 0.15;

    let leftward = matches!(direction, HorizontalDirection::Left);
    let (start, end, tip, back) = if leftward {
        (0.9, 0.2, 0.1, FLANK)
    } else {
        (0.1, 0.8, 0.9, -FLANK)
    };

    let shaft = (n * 3 / 5).max(2);
    let mut pts: Vec<Point2> = (0..shaft)
        .map(|i| Point2::new(start + fraction(i, shaft) * (end - start), Y))
        .collect();

    let base = end;
    pts.extend([
        Point2::new(base, Y),
        Point2::new(base + back, TOP),
        Point2::new(tip, Y),
        Point2::new(base + back, BOTTOM),
        Point2::new(tip, Y),
    ]);
    pts
}

/// `n` points evenly spaced by angle around the unit circle. The loop is
/// left open: the last point stops one step short of the first.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circle(n: usize) -> Vec<Point2> {
    (0..n)
        .map(|i| {
            let t = (i as f64 / n as f64) * PI * 2.0;
            Point2::new(t.cos(), t.sin())
        })
        .collect()
}

/// Three equal runs tracing a Z: top edge, diagonal back, bottom edge.
#[must_use]
pub fn z(n: usize) -> Vec<Point2> {
    let seg = (n / 3).max(2);
    let mut pts = Vec::with_capacity(seg * 3);
    pts.extend((0..seg).map(|i| Point2::new(fraction(i, seg), 0.0)));
    pts.extend((0..seg).map(|i| {
        let t = fraction(i, seg);
        Point2::new(1.0 - t, t)
    }));
    pts.extend((0..seg).map(|i| Point2::new(fraction(i, seg), 1.0)));
    pts
}
