use crate::math::{path_length, Point2};

/// Resamples a point sequence into `count` points spaced equally by arc length.
pub struct Resample {
    count: usize,
}

impl Resample {
    /// Creates a new `Resample` operation.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Executes the resampling, returning exactly `count` points.
    ///
    /// The walk keeps the distance covered since the last emitted point. When
    /// the next segment would reach the spacing, the exact point at the
    /// spacing is interpolated, emitted, and becomes the start of the rest of
    /// that segment. Rounding shortfalls at the end are padded with the final
    /// input point. A zero-length path yields `count` copies of its first
    /// point.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, points: &[Point2]) -> Vec<Point2> {
        let n = self.count;
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return Vec::new();
        };

        let total = path_length(points);
        if n < 2 || total == 0.0 {
            return vec![first; n];
        }

        let interval = total / (n - 1) as f64;
        let mut out = Vec::with_capacity(n);
        out.push(first);

        let mut walked = 0.0;
        let mut prev = first;
        let mut i = 1;
        while i < points.len() && out.len() < n {
            let next = points[i];
            let seg = nalgebra::distance(&prev, &next);
            if walked + seg >= interval {
                // walked < interval always holds here, so seg > 0.
                let t = (interval - walked) / seg;
                let q = prev + (next - prev) * t;
                out.push(q);
                prev = q;
                walked = 0.0;
            } else {
                walked += seg;
                prev = next;
                i += 1;
            }
        }

        out.resize(n, last);
        out
    }
}
