use crate::{
    any::ScoreState,
    model::{attributes::BeatmapAttributes, beatmap::BeatmapDifficulty},
    util::{difficulty::length_bonus, pp::base_value},
    GameMods,
};

use super::CatchPerformanceAttributes;

pub struct CatchPerformanceCalculator<'a> {
    map: &'a BeatmapDifficulty,
    attrs: &'a BeatmapAttributes,
    mods: GameMods,
    state: ScoreState,
}

impl<'a> CatchPerformanceCalculator<'a> {
    pub const fn new(
        map: &'a BeatmapDifficulty,
        attrs: &'a BeatmapAttributes,
        mods: GameMods,
        state: ScoreState,
    ) -> Self {
        Self {
            map,
            attrs,
            mods,
            state,
        }
    }
}

impl CatchPerformanceCalculator<'_> {
    pub fn calculate(self) -> CatchPerformanceAttributes {
        let counts = &self.state.counts;

        // Fruits, droplets, and misses; tiny droplets don't count
        let combo_hits =
            f64::from(counts.misses) + f64::from(counts.n100) + f64::from(counts.n300);
        let acc = self.accuracy(combo_hits);

        let mut pp = base_value(self.map.stars, 0.0049, 2.0, 100_000.0);

        // Longer maps are worth more
        let len_bonus = length_bonus(combo_hits, 0.95, 0.3, 2500.0, 0.475);
        pp *= len_bonus;

        // Penalize misses exponentially
        pp *= 0.97_f64.powi(counts.misses as i32);

        // Combo scaling
        if self.map.max_combo > 0 {
            pp *= (f64::from(self.state.max_combo) / f64::from(self.map.max_combo))
                .powf(0.8)
                .min(1.0);
        }

        let ar = self.attrs.ar;
        let mut ar_factor = 1.0;

        if ar > 9.0 {
            ar_factor += 0.1 * (ar - 9.0);
        }

        if ar > 10.0 {
            ar_factor += 0.1 * (ar - 10.0);
        } else if ar < 8.0 {
            ar_factor += 0.025 * (8.0 - ar);
        }

        pp *= ar_factor;

        if self.mods.hd() {
            if ar <= 10.0 {
                pp *= 1.05 + 0.075 * (10.0 - ar);
            } else {
                pp *= 1.01 + 0.04 * (11.0 - ar.min(11.0));
            }
        }

        if self.mods.fl() {
            pp *= 1.35 * len_bonus;
        }

        pp *= acc.powf(5.5);

        if self.mods.nf() {
            pp *= 0.9;
        }

        if self.mods.so() {
            pp *= 0.95;
        }

        CatchPerformanceAttributes { pp, accuracy: acc }
    }

    fn accuracy(&self, combo_hits: f64) -> f64 {
        let counts = &self.state.counts;

        let caught = f64::from(counts.n50) + f64::from(counts.n100) + f64::from(counts.n300);
        let total = combo_hits + f64::from(counts.n50) + f64::from(counts.n_katu);

        // NaN for empty plays would otherwise survive the clamp
        if total <= 0.0 {
            return 0.0;
        }

        (caught / total).clamp(0.0, 1.0)
    }
}
