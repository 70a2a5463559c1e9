use crate::any::{accuracy, Performance, PerformanceBreakdown};

use super::{
    attributes::BeatmapAttributes, beatmap::BeatmapDifficulty, mode::GameMode, mods::GameMods,
};

/// Hit judgement counts of a play.
///
/// The meaning of the buckets depends on the mode:
///
/// | Field | osu! | taiko | catch | mania |
/// | - | - | - | - | - |
/// | `n300` | 300 | great | fruit | 300 |
/// | `n100` | 100 | good | droplet | 100 |
/// | `n50` | 50 | - | tiny droplet | 50 |
/// | `n_katu` | - | - | missed tiny droplet | 200 |
/// | `n_geki` | - | - | - | 320 |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitCounts {
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
    pub misses: u32,
    pub n_katu: u32,
    pub n_geki: u32,
}

impl HitCounts {
    /// Create hit counts without katus and gekis.
    pub const fn new(n300: u32, n100: u32, n50: u32, misses: u32) -> Self {
        Self {
            n300,
            n100,
            n50,
            misses,
            n_katu: 0,
            n_geki: 0,
        }
    }

    /// Return the total amount of hits by adding everything up based on the
    /// mode.
    ///
    /// The sum saturates at `u32::MAX`.
    pub fn total_hits(&self, mode: GameMode) -> u32 {
        let mut amount = self.n300.saturating_add(self.n100).saturating_add(self.misses);

        if mode != GameMode::Taiko {
            amount = amount.saturating_add(self.n50);

            if mode != GameMode::Osu {
                amount = amount.saturating_add(self.n_katu);

                if mode != GameMode::Catch {
                    amount = amount.saturating_add(self.n_geki);
                }
            }
        }

        amount
    }

    /// Accuracy in percent.
    ///
    /// Returns `NaN` if there are no hits, see [`accuracy`].
    pub fn accuracy(&self, mode: GameMode) -> f64 {
        accuracy(mode, self)
    }

    /// The same counts with all misses turned into 300s.
    ///
    /// The 300s saturate at `u32::MAX`.
    #[must_use]
    pub const fn without_misses(self) -> Self {
        Self {
            n300: self.n300.saturating_add(self.misses),
            misses: 0,
            ..self
        }
    }
}

/// A submitted play.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayResult {
    /// The mode the play was set in.
    pub mode: GameMode,
    /// The mods of the play.
    pub mods: GameMods,
    /// Hit judgements.
    pub counts: HitCounts,
    /// Maximum combo reached in the play.
    pub max_combo: u32,
    /// The play's score.
    pub score: u32,
    /// Performance value provided by the data source.
    ///
    /// If `None`, it will be calculated.
    pub pp: Option<f64>,
}

impl PlayResult {
    /// Accuracy of the play in percent.
    ///
    /// Returns `NaN` if there are no hits.
    pub fn accuracy(&self) -> f64 {
        self.counts.accuracy(self.mode)
    }

    /// Calculate the play's performance.
    ///
    /// `attrs` must have been calculated for `map` and the play's mods.
    pub fn performance(&self, map: &BeatmapDifficulty, attrs: &BeatmapAttributes) -> PerformanceBreakdown {
        Performance::new(self, map, attrs).calculate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_hits_per_mode() {
        let counts = HitCounts {
            n300: 100,
            n100: 20,
            n50: 5,
            misses: 3,
            n_katu: 7,
            n_geki: 11,
        };

        assert_eq!(counts.total_hits(GameMode::Osu), 128);
        assert_eq!(counts.total_hits(GameMode::Taiko), 123);
        assert_eq!(counts.total_hits(GameMode::Catch), 135);
        assert_eq!(counts.total_hits(GameMode::Mania), 146);
    }

    #[test]
    fn without_misses() {
        let counts = HitCounts::new(900, 80, 15, 5).without_misses();

        assert_eq!(counts, HitCounts::new(905, 80, 15, 0));
    }

    #[test]
    fn sums_saturate() {
        let counts = HitCounts {
            n300: u32::MAX - 10,
            n100: 20,
            n50: 5,
            misses: 3,
            n_katu: 7,
            n_geki: 11,
        };

        for mode in [GameMode::Osu, GameMode::Taiko, GameMode::Catch, GameMode::Mania] {
            assert_eq!(counts.total_hits(mode), u32::MAX, "{mode}");
        }

        assert_eq!(counts.without_misses().n300, u32::MAX);
    }
}
