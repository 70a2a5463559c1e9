use std::cmp;

use crate::model::play::HitCounts;

/// osu!standard hit judgements reconstructed from an accuracy value.
///
/// Accuracy is measured in "hit units" where a 300 is worth 6, a 100 is
/// worth 2, a 50 is worth 1, and a miss is worth nothing. An accuracy `acc`
/// on `n` objects hence corresponds to `acc * n * 6` hit units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitDistribution {
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
    pub misses: u32,
}

impl HitDistribution {
    /// Find the 300s, 100s, and 50s that match the accuracy best.
    ///
    /// `acc` must be between `0.0` and `1.0` and is clamped otherwise.
    /// `misses` is clamped to `n_objects`.
    ///
    /// The resulting judgements always add up to `n_objects`.
    ///
    /// # Example
    ///
    /// ```
    /// use osu_helper_pp::any::HitDistribution;
    ///
    /// let hits = HitDistribution::estimate(1000, 0, 1.0);
    ///
    /// assert_eq!(hits.n300, 1000);
    /// assert_eq!(hits.n100 + hits.n50 + hits.misses, 0);
    /// ```
    pub fn estimate(n_objects: u32, misses: u32, acc: f64) -> Self {
        let misses = cmp::min(misses, n_objects);
        let n_remaining = i64::from(n_objects - misses);

        let acc = if acc.is_nan() { 0.0 } else { acc.clamp(0.0, 1.0) };
        let target = acc * f64::from(n_objects) * 6.0;
        let rounded_target = target.round_ties_even() as i64;

        // Every object starts out as a 50; each 300 adds 5 units, each 100 adds 1.
        let guess300 = ((target - n_remaining as f64) / 5.0).round_ties_even() as i64;

        let min300 = (guess300 - 1).clamp(0, n_remaining);
        let max300 = (guess300 + 1).clamp(0, n_remaining);

        let mut best300 = 0;
        let mut best100 = 0;
        let mut best_dist = f64::INFINITY;

        for new300 in min300..=max300 {
            let lowest = n_remaining + 5 * new300;
            let highest = 2 * n_remaining + 4 * new300;
            let reachable = cmp::min(highest, cmp::max(lowest, rounded_target));

            let dist = (target - reachable as f64).abs();

            if dist < best_dist {
                best_dist = dist;
                best300 = new300;
                best100 = reachable - lowest;
            }
        }

        // Both values are bound by `n_remaining` which fits into `u32`
        let n300 = best300 as u32;
        let n100 = best100 as u32;

        Self {
            n300,
            n100,
            n50: n_objects - misses - n300 - n100,
            misses,
        }
    }

    /// The amount of objects, saturating at `u32::MAX`.
    pub const fn n_objects(&self) -> u32 {
        self.n300
            .saturating_add(self.n100)
            .saturating_add(self.n50)
            .saturating_add(self.misses)
    }

    /// The accuracy in hit units.
    pub fn hit_units(&self) -> u64 {
        6 * u64::from(self.n300) + 2 * u64::from(self.n100) + u64::from(self.n50)
    }
}

impl From<HitDistribution> for HitCounts {
    fn from(hits: HitDistribution) -> Self {
        Self::new(hits.n300, hits.n100, hits.n50, hits.misses)
    }
}
