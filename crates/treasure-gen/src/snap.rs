//! Random pixel coordinates snapped to the block grid.

use rand::Rng;

/// Block-aligned inclusive range `[lo, hi]`, both multiples of `block`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapRange {
    pub lo: i32,
    pub hi: i32,
    pub block: i32,
}

impl SnapRange {
    /// Rounds `min` up and `max` down to block multiples; `None` when nothing aligned fits.
    pub fn new(min: f32, max: f32, block: u32) -> Option<Self> {
        let b = block.max(1) as f32;
        let lo = (min / b).ceil() * b;
        let hi = (max / b).floor() * b;
        if !(lo.is_finite() && hi.is_finite()) || hi < lo {
            return None;
        }
        Some(Self {
            lo: lo as i32,
            hi: hi as i32,
            block: block.max(1) as i32,
        })
    }

    /// Number of aligned positions in the range.
    pub fn steps(&self) -> i32 {
        (self.hi - self.lo) / self.block + 1
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        let k = rng.gen_range(0..self.steps());
        self.lo + k * self.block
    }
}

/// Uniform block-aligned coordinate in `[min, max]`.
///
/// When the bounds are too tight to hold an aligned value the result is the
/// aligned midpoint of the request.
pub fn snap_random<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32, block: u32) -> i32 {
    match SnapRange::new(min, max, block) {
        Some(range) => range.sample(rng),
        None => {
            let b = block.max(1) as f32;
            let mid = ((min + max) * 0.5 / b).floor() * b;
            log::warn!(
                "no block-aligned position in [{:.1}, {:.1}] (block {}); clamping to {}",
                min,
                max,
                block,
                mid
            );
            if mid.is_finite() { mid as i32 } else { 0 }
        }
    }
}
