//! Square-root scale used to weight treemap leaves by entry size.

/// Output range of the size scale.
pub const SIZE_RANGE: (f64, f64) = (10.0, 100.0);

/// Maps `sqrt(x)` linearly from `sqrt(domain)` onto `range`. Not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale spanning the smallest to largest of `sizes` onto [`SIZE_RANGE`].
    /// `None` when `sizes` is empty.
    pub fn fit<I: IntoIterator<Item = u64>>(sizes: I) -> Option<Self> {
        let (min, max) = sizes.into_iter().fold(None::<(u64, u64)>, |acc, size| match acc {
            None => Some((size, size)),
            Some((lo, hi)) => Some((u64::min(lo, size), u64::max(hi, size))),
        })?;
        Some(Self::new((min as f64, max as f64), SIZE_RANGE))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn apply(&self, x: f64) -> f64 {
        let d0 = self.domain.0.sqrt();
        let d1 = self.domain.1.sqrt();
        let (r0, r1) = self.range;
        // A single-point domain maps everything to the middle of the range.
        let t = if d1 == d0 { 0.5 } else { (x.sqrt() - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }
}
