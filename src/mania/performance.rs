use crate::{
    any::ScoreState,
    model::{attributes::BeatmapAttributes, beatmap::BeatmapDifficulty},
    util::pp::{base_value, power_mean},
    GameMode, GameMods,
};

use super::ManiaPerformanceAttributes;

pub const PERFORMANCE_BASE_MULTIPLIER: f64 = 0.8;

/// Scores from which on accuracy is rewarded.
const ACC_SCORE_THRESHOLD: f64 = 960_000.0;

/// Lower bound and slope of each score bracket.
const SCORE_BRACKETS: [(f64, f64, f64); 6] = [
    (0.0, 0.0, 0.1 / 500_000.0),
    (500_000.0, 0.0, 0.3 / 100_000.0),
    (600_000.0, 0.3, 0.25 / 100_000.0),
    (700_000.0, 0.55, 0.2 / 100_000.0),
    (800_000.0, 0.75, 0.15 / 100_000.0),
    (900_000.0, 0.9, 0.1 / 100_000.0),
];

pub struct ManiaPerformanceCalculator<'a> {
    map: &'a BeatmapDifficulty,
    attrs: &'a BeatmapAttributes,
    mods: GameMods,
    score: u32,
    state: ScoreState,
}

impl<'a> ManiaPerformanceCalculator<'a> {
    pub const fn new(
        map: &'a BeatmapDifficulty,
        attrs: &'a BeatmapAttributes,
        mods: GameMods,
        score: u32,
        state: ScoreState,
    ) -> Self {
        Self {
            map,
            attrs,
            mods,
            score,
            state,
        }
    }
}

impl ManiaPerformanceCalculator<'_> {
    pub fn calculate(self) -> ManiaPerformanceAttributes {
        let total_hits = f64::from(self.state.counts.total_hits(GameMode::Mania));
        let score = f64::from(self.score);

        let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

        if self.mods.nf() {
            multiplier *= 0.9;
        }

        if self.mods.so() {
            multiplier *= 0.95;
        }

        if self.mods.ez() {
            multiplier *= 0.5;
        }

        let mut strain_base = base_value(self.map.stars, 0.2, 2.2, 135.0);
        strain_base *= 1.0 + 0.1 * (total_hits / 1500.0).min(1.0);

        let strain_value = strain_base * score_multiplier(score);
        let acc_value = self.compute_accuracy_value(strain_base, score);

        let pp = power_mean([strain_value, acc_value]) * multiplier;

        ManiaPerformanceAttributes {
            pp,
            pp_strain: strain_value,
            pp_acc: acc_value,
        }
    }

    fn compute_accuracy_value(&self, strain_base: f64, score: f64) -> f64 {
        if score < ACC_SCORE_THRESHOLD {
            return 0.0;
        }

        let od_nerf = if self.mods.ez() { 0.5 } else { 1.0 };

        self.attrs.od
            * od_nerf
            * 0.02
            * strain_base
            * ((score - ACC_SCORE_THRESHOLD) / 40_000.0).powf(1.1)
    }
}

fn score_multiplier(score: f64) -> f64 {
    let (lower, offset, slope) = SCORE_BRACKETS
        .iter()
        .rev()
        .find(|(lower, ..)| score >= *lower)
        .copied()
        .unwrap_or(SCORE_BRACKETS[0]);

    offset + (score - lower) * slope
}

#[cfg(test)]
mod tests {
    use crate::{model::play::HitCounts, util::float_ext::FloatExt};

    use super::*;

    fn test_map() -> BeatmapDifficulty {
        BeatmapDifficulty {
            mode: GameMode::Mania,
            od: 8.0,
            hp: 7.0,
            cs: 4.0,
            stars: 4.0,
            max_combo: 2400,
            n_circles: 1200,
            n_sliders: 300,
            ..Default::default()
        }
    }

    fn calculate(mods: GameMods, score: u32) -> ManiaPerformanceAttributes {
        let map = test_map();
        let attrs = map.attributes(mods);

        let mut counts = HitCounts::new(600, 20, 5, 5);
        counts.n_geki = 800;
        counts.n_katu = 70;

        ManiaPerformanceCalculator::new(&map, &attrs, mods, score, ScoreState::new(2000, counts))
            .calculate()
    }

    #[test]
    fn score_brackets() {
        let cases = [
            (0.0, 0.0),
            (250_000.0, 0.05),
            (500_000.0, 0.0),
            (550_000.0, 0.15),
            (600_000.0, 0.3),
            (700_000.0, 0.55),
            (800_000.0, 0.75),
            (850_000.0, 0.825),
            (900_000.0, 0.9),
            (1_000_000.0, 1.0),
        ];

        for (score, expected) in cases {
            let multiplier = score_multiplier(score);

            assert!(
                multiplier.almost_eq(expected, 1e-12),
                "{score}: {multiplier} != {expected}"
            );
        }
    }

    #[test]
    fn accuracy_requires_threshold() {
        let below = calculate(GameMods::NO_MOD, 959_999);
        let above = calculate(GameMods::NO_MOD, 980_000);

        assert!(below.pp_acc.eq(0.0));
        assert!(above.pp_acc > 0.0);
        assert!(below.pp_strain < above.pp_strain);
    }

    #[test]
    fn easy_halves_total_and_od() {
        let nomod = calculate(GameMods::NO_MOD, 1_000_000);
        let easy = calculate(GameMods::EASY, 1_000_000);

        assert!(easy.pp_strain.eq(nomod.pp_strain));

        // OD is halved by the mod and by the nerf
        assert!(easy.pp_acc.almost_eq(nomod.pp_acc / 4.0, 1e-9));

        let expected = power_mean([easy.pp_strain, easy.pp_acc]) * 0.8 * 0.5;
        assert!(easy.pp.almost_eq(expected, 1e-9), "{} != {expected}", easy.pp);
    }

    #[test]
    fn no_fail_and_spun_out() {
        let nomod = calculate(GameMods::NO_MOD, 900_000);
        let nfso = calculate(GameMods::NO_FAIL | GameMods::SPUN_OUT, 900_000);

        assert!(nfso.pp.almost_eq(nomod.pp * 0.9 * 0.95, 1e-9));
    }
}
