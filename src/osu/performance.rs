use crate::{
    any::ScoreState,
    model::{attributes::BeatmapAttributes, beatmap::BeatmapDifficulty},
    util::{
        difficulty::{length_bonus, logistic},
        float_ext::FloatExt,
        pp::{base_value, power_mean},
    },
    GameMode, GameMods,
};

use super::OsuPerformanceAttributes;

pub const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.12;

/// Revision of the osu!standard performance formula.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OsuFormula {
    /// Misses are estimated from the combo to include dropped slider ends.
    #[default]
    Refined,
    /// Only the play's explicit misses are penalized.
    Legacy,
}

pub struct OsuPerformanceCalculator<'a> {
    map: &'a BeatmapDifficulty,
    attrs: &'a BeatmapAttributes,
    mods: GameMods,
    state: ScoreState,
    formula: OsuFormula,
}

impl<'a> OsuPerformanceCalculator<'a> {
    pub const fn new(
        map: &'a BeatmapDifficulty,
        attrs: &'a BeatmapAttributes,
        mods: GameMods,
        state: ScoreState,
        formula: OsuFormula,
    ) -> Self {
        Self {
            map,
            attrs,
            mods,
            state,
            formula,
        }
    }
}

impl OsuPerformanceCalculator<'_> {
    pub fn calculate(self) -> OsuPerformanceAttributes {
        let total_hits = f64::from(self.state.counts.total_hits(GameMode::Osu));
        let acc = self.state.counts.accuracy(GameMode::Osu) / 100.0;

        let effective_miss_count = match self.formula {
            OsuFormula::Refined => calculate_effective_misses(self.map, &self.state),
            OsuFormula::Legacy => f64::from(self.state.counts.misses),
        };

        let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

        // NF penalty
        if self.mods.nf() {
            multiplier *= (1.0 - 0.02 * f64::from(self.state.counts.misses)).max(0.9);
        }

        // SO penalty
        if self.mods.so() {
            multiplier *= 1.0 - (f64::from(self.map.n_spinners) / total_hits).powf(0.85);
        }

        let bonuses = SharedBonuses::new(&self, total_hits, effective_miss_count);

        let aim_value = self.compute_aim_value(&bonuses, acc);
        let speed_value = self.compute_speed_value(&bonuses, total_hits, acc);
        let acc_value = self.compute_accuracy_value(total_hits);

        let pp = power_mean([aim_value, speed_value, acc_value]) * multiplier;

        OsuPerformanceAttributes {
            pp,
            pp_aim: aim_value,
            pp_speed: speed_value,
            pp_acc: acc_value,
            effective_miss_count,
        }
    }

    fn compute_aim_value(&self, bonuses: &SharedBonuses, acc: f64) -> f64 {
        let mut aim_value = base_value(self.map.aim_stars, 0.0675, 3.0, 100_000.0);

        aim_value *= bonuses.length;
        aim_value *= bonuses.miss;
        aim_value *= bonuses.combo;
        aim_value *= bonuses.hidden;
        aim_value *= bonuses.approach_rate;

        // FL bonus
        if self.mods.fl() {
            aim_value *= bonuses.flashlight;
        }

        // Scale with accuracy
        aim_value *= 0.5 + acc / 2.0;
        aim_value *= 0.98 + self.attrs.od * self.attrs.od / 2500.0;

        aim_value
    }

    fn compute_speed_value(&self, bonuses: &SharedBonuses, total_hits: f64, acc: f64) -> f64 {
        let mut speed_value = base_value(self.map.speed_stars, 0.0675, 3.0, 100_000.0);

        speed_value *= bonuses.length;
        speed_value *= bonuses.miss;
        speed_value *= bonuses.combo;
        speed_value *= bonuses.approach_rate;
        speed_value *= bonuses.hidden;

        // Scale with accuracy and OD
        speed_value *= (0.95 + self.attrs.od * self.attrs.od / 750.0)
            * acc.powf((14.5 - self.attrs.od.max(8.0)) / 2.0);

        // Penalize 50s beyond one per 500 objects
        let n50 = f64::from(self.state.counts.n50);
        speed_value *= 0.98_f64.powf((n50 - total_hits / 500.0).max(0.0));

        speed_value
    }

    fn compute_accuracy_value(&self, total_hits: f64) -> f64 {
        // Sliders and spinners are always considered 300s
        let n_circles = f64::from(self.map.n_circles);
        let n300 = f64::from(self.state.counts.n300);
        let n100 = f64::from(self.state.counts.n100);
        let n50 = f64::from(self.state.counts.n50);

        let better_acc_percentage = if n_circles > 0.0 {
            (((n300 - (total_hits - n_circles)) * 6.0 + n100 * 2.0 + n50) / (n_circles * 6.0))
                .max(0.0)
        } else {
            0.0
        };

        let mut acc_value =
            1.52163_f64.powf(self.attrs.od) * better_acc_percentage.powi(24) * 2.83;

        // Bonus for many hitcircles
        acc_value *= (n_circles / 1000.0).powf(0.3).min(1.15);

        // HD bonus
        if self.mods.hd() {
            acc_value *= 1.08;
        }

        // FL bonus
        if self.mods.fl() {
            acc_value *= 1.02;
        }

        acc_value
    }
}

/// Multipliers that apply to both aim and speed.
struct SharedBonuses {
    length: f64,
    miss: f64,
    combo: f64,
    approach_rate: f64,
    hidden: f64,
    flashlight: f64,
}

impl SharedBonuses {
    fn new(calc: &OsuPerformanceCalculator<'_>, total_hits: f64, effective_miss_count: f64) -> Self {
        let ar = calc.attrs.ar;

        // Longer maps are worth more
        let length = length_bonus(total_hits, 0.95, 0.4, 2000.0, 0.5);

        let miss = if effective_miss_count.not_eq(0.0) {
            0.97 * (1.0 - (effective_miss_count / total_hits).powf(0.775))
                .powf(effective_miss_count)
        } else {
            1.0
        };

        let combo = if calc.map.max_combo > 0 {
            (f64::from(calc.state.max_combo) / f64::from(calc.map.max_combo))
                .powf(0.8)
                .min(1.0)
        } else {
            1.0
        };

        // High AR rewards more than low AR
        let ar_factor = if ar > 10.33 {
            ar - 10.33
        } else if ar < 8.0 {
            0.025 * (8.0 - ar)
        } else {
            0.0
        };

        // Short maps only get a fraction of the AR bonus
        let ar_hit_factor = logistic(total_hits, 400.0, 0.007, None);
        let approach_rate = 1.0 + (0.03 + 0.37 * ar_hit_factor) * ar_factor;

        let hidden = if calc.mods.hd() {
            1.0 + 0.04 * (12.0 - ar)
        } else {
            1.0
        };

        let mut flashlight = 1.0 + 0.35 * (total_hits / 200.0).min(1.0);

        if total_hits > 200.0 {
            flashlight += 0.3 * ((total_hits - 200.0) / 300.0).min(1.0);

            if total_hits > 500.0 {
                flashlight += (total_hits - 500.0) / 1200.0;
            }
        }

        Self {
            length,
            miss,
            combo,
            approach_rate,
            hidden,
            flashlight,
        }
    }
}

fn calculate_effective_misses(map: &BeatmapDifficulty, state: &ScoreState) -> f64 {
    let counts = &state.counts;

    // Guess the number of misses + slider breaks from combo
    let mut combo_based_miss_count = 0.0;

    if map.n_sliders > 0 {
        let full_combo_threshold = f64::from(map.max_combo) - 0.1 * f64::from(map.n_sliders);

        if f64::from(state.max_combo) < full_combo_threshold {
            combo_based_miss_count = full_combo_threshold / f64::from(state.max_combo).max(1.0);
        }
    }

    // Clamp miss count to maximum amount of possible breaks
    combo_based_miss_count =
        combo_based_miss_count.min(f64::from(counts.n100 + counts.n50 + counts.misses));

    combo_based_miss_count.max(f64::from(counts.misses))
}

#[cfg(test)]
mod tests {
    use crate::model::play::HitCounts;

    use super::*;

    fn test_map() -> BeatmapDifficulty {
        BeatmapDifficulty {
            mode: GameMode::Osu,
            ar: 9.0,
            od: 8.0,
            cs: 4.0,
            hp: 5.0,
            stars: 5.5,
            aim_stars: 2.7,
            speed_stars: 2.5,
            max_combo: 1500,
            n_circles: 600,
            n_sliders: 380,
            n_spinners: 20,
            total_length: 240.0,
            drain_length: 230.0,
        }
    }

    fn calculate(
        map: &BeatmapDifficulty,
        mods: GameMods,
        state: ScoreState,
        formula: OsuFormula,
    ) -> OsuPerformanceAttributes {
        let attrs = map.attributes(mods);

        OsuPerformanceCalculator::new(map, &attrs, mods, state, formula).calculate()
    }

    #[test]
    fn effective_misses_from_combo() {
        let map = test_map();
        let state = ScoreState::new(500, HitCounts::new(960, 30, 8, 2));

        // threshold 1462 / combo 500
        let effective = calculate_effective_misses(&map, &state);

        assert!(effective.almost_eq(2.924, 1e-9), "{effective} != 2.924");
    }

    #[test]
    fn effective_misses_clamped_to_non_300s() {
        let map = test_map();
        let state = ScoreState::new(10, HitCounts::new(995, 3, 1, 1));

        let effective = calculate_effective_misses(&map, &state);

        assert!(effective.eq(5.0), "{effective} != 5");
    }

    #[test]
    fn effective_misses_full_combo() {
        let map = test_map();
        let state = ScoreState::new(1500, HitCounts::new(990, 10, 0, 0));

        assert!(calculate_effective_misses(&map, &state).eq(0.0));
    }

    #[test]
    fn legacy_formula_ignores_combo_breaks() {
        let map = test_map();
        let state = ScoreState::new(500, HitCounts::new(960, 30, 8, 2));

        let refined = calculate(&map, GameMods::NO_MOD, state, OsuFormula::Refined);
        let legacy = calculate(&map, GameMods::NO_MOD, state, OsuFormula::Legacy);

        assert!(legacy.effective_miss_count.eq(2.0));
        assert!(refined.pp < legacy.pp, "{} >= {}", refined.pp, legacy.pp);
        assert!(refined.pp_acc.eq(legacy.pp_acc));
    }

    #[test]
    fn components_combine_with_power_mean() {
        let map = test_map();
        let state = ScoreState::new(1500, HitCounts::new(980, 20, 0, 0));
        let attrs = calculate(&map, GameMods::NO_MOD, state, OsuFormula::Refined);

        let expected =
            power_mean([attrs.pp_aim, attrs.pp_speed, attrs.pp_acc]) * PERFORMANCE_BASE_MULTIPLIER;

        assert!(attrs.pp.almost_eq(expected, 1e-9), "{} != {expected}", attrs.pp);
        assert!(attrs.pp_aim > 0.0 && attrs.pp_speed > 0.0 && attrs.pp_acc > 0.0);
    }

    #[test]
    fn hidden_increases_every_component() {
        let map = test_map();
        let state = ScoreState::new(1500, HitCounts::new(980, 20, 0, 0));

        let nomod = calculate(&map, GameMods::NO_MOD, state, OsuFormula::Refined);
        let hidden = calculate(&map, GameMods::HIDDEN, state, OsuFormula::Refined);

        assert!(hidden.pp_aim > nomod.pp_aim);
        assert!(hidden.pp_speed > nomod.pp_speed);
        assert!(hidden.pp_acc.almost_eq(nomod.pp_acc * 1.08, 1e-9));
    }

    #[test]
    fn no_fail_penalty_is_capped() {
        let map = test_map();
        let state = ScoreState::new(1500, HitCounts::new(940, 20, 0, 40));

        let nomod = calculate(&map, GameMods::NO_MOD, state, OsuFormula::Refined);
        let no_fail = calculate(&map, GameMods::NO_FAIL, state, OsuFormula::Refined);

        assert!(no_fail.pp.almost_eq(nomod.pp * 0.9, 1e-9));
    }

    #[test]
    fn spun_out_scales_with_spinner_share() {
        let map = test_map();
        let state = ScoreState::new(1500, HitCounts::new(1000, 0, 0, 0));

        let nomod = calculate(&map, GameMods::NO_MOD, state, OsuFormula::Refined);
        let spun_out = calculate(&map, GameMods::SPUN_OUT, state, OsuFormula::Refined);

        let expected = nomod.pp * (1.0 - 0.02_f64.powf(0.85));

        assert!(spun_out.pp.almost_eq(expected, 1e-9), "{} != {expected}", spun_out.pp);
    }

    #[test]
    fn no_circles_means_no_accuracy_value() {
        let map = BeatmapDifficulty {
            n_circles: 0,
            n_sliders: 980,
            ..test_map()
        };

        let state = ScoreState::new(1500, HitCounts::new(1000, 0, 0, 0));
        let attrs = calculate(&map, GameMods::NO_MOD, state, OsuFormula::Refined);

        assert!(attrs.pp_acc.eq(0.0));
        assert!(attrs.pp > 0.0);
    }
}
