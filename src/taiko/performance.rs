use crate::{
    any::ScoreState,
    model::{attributes::BeatmapAttributes, beatmap::BeatmapDifficulty},
    util::pp::{base_value, power_mean},
    GameMode, GameMods,
};

use super::TaikoPerformanceAttributes;

pub const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.1;

pub struct TaikoPerformanceCalculator<'a> {
    map: &'a BeatmapDifficulty,
    attrs: &'a BeatmapAttributes,
    mods: GameMods,
    state: ScoreState,
}

impl<'a> TaikoPerformanceCalculator<'a> {
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

impl TaikoPerformanceCalculator<'_> {
    pub fn calculate(self) -> TaikoPerformanceAttributes {
        // The combo stands in for the amount of hits
        let total_hits = f64::from(self.state.max_combo);
        let acc = self.state.counts.accuracy(GameMode::Taiko) / 100.0;

        let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

        if self.mods.nf() {
            multiplier *= 0.9;
        }

        if self.mods.hd() {
            multiplier *= 1.1;
        }

        let great_hit_window = self.great_hit_window();
        let strain_value = self.compute_strain_value(total_hits, acc);
        let acc_value = compute_accuracy_value(great_hit_window, total_hits, acc);

        let pp = power_mean([strain_value, acc_value]) * multiplier;

        TaikoPerformanceAttributes {
            pp,
            pp_strain: strain_value,
            pp_acc: acc_value,
            great_hit_window,
        }
    }

    fn compute_strain_value(&self, total_hits: f64, acc: f64) -> f64 {
        let mut strain_value = base_value(self.map.stars, 0.0075, 2.0, 100_000.0);

        let length_bonus = 1.0 + 0.1 * (total_hits / 1500.0).min(1.0);
        strain_value *= length_bonus;

        strain_value *= 0.985_f64.powi(self.state.counts.misses as i32);

        if total_hits > 0.0 {
            strain_value *= (f64::from(self.state.max_combo) / total_hits)
                .sqrt()
                .min(1.0);
        }

        if self.mods.hd() {
            strain_value *= 1.025;
        }

        if self.mods.fl() {
            strain_value *= 1.05 * length_bonus;
        }

        strain_value * acc
    }

    fn great_hit_window(&self) -> f64 {
        let mut hit_window = (50.0 - 3.0 * self.attrs.od).floor() - 0.5;

        if self.mods.ht() {
            hit_window *= 1.5;
        }

        if self.mods.dt() {
            hit_window *= 0.75;
        }

        (hit_window * 100.0).round_ties_even() / 100.0
    }
}

fn compute_accuracy_value(great_hit_window: f64, total_hits: f64, acc: f64) -> f64 {
    if great_hit_window <= 0.0 {
        return 0.0;
    }

    (150.0 / great_hit_window).powf(1.1)
        * acc.powi(15)
        * 22.0
        * (total_hits / 1500.0).powf(0.3).min(1.15)
}

#[cfg(test)]
mod tests {
    use crate::{model::play::HitCounts, util::float_ext::FloatExt};

    use super::*;

    fn test_map() -> BeatmapDifficulty {
        BeatmapDifficulty {
            mode: GameMode::Taiko,
            od: 5.0,
            hp: 6.0,
            stars: 3.5,
            max_combo: 900,
            n_circles: 900,
            ..Default::default()
        }
    }

    fn calculate(mods: GameMods, state: ScoreState) -> TaikoPerformanceAttributes {
        let map = test_map();
        let attrs = map.attributes(mods);

        TaikoPerformanceCalculator::new(&map, &attrs, mods, state).calculate()
    }

    #[test]
    fn hit_window_per_clock_rate() {
        let state = ScoreState::new(900, HitCounts::new(880, 20, 0, 0));

        assert!(calculate(GameMods::NO_MOD, state)
            .great_hit_window
            .eq(34.5));

        // OD 5 turns into 2.25 on HT before the window gets scaled up
        let half_time = calculate(GameMods::HALF_TIME, state).great_hit_window;
        assert!(half_time.almost_eq(63.75, 1e-9), "{half_time} != 63.75");
    }

    #[test]
    fn no_window_no_accuracy_value() {
        assert!(compute_accuracy_value(0.0, 900.0, 1.0).eq(0.0));
        assert!(compute_accuracy_value(-3.5, 900.0, 1.0).eq(0.0));
    }

    #[test]
    fn misses_lower_strain() {
        let clean = calculate(GameMods::NO_MOD, ScoreState::new(900, HitCounts::new(880, 20, 0, 0)));
        let missed = calculate(GameMods::NO_MOD, ScoreState::new(900, HitCounts::new(870, 20, 0, 10)));

        assert!(missed.pp_strain < clean.pp_strain);
        assert!(missed.pp_acc < clean.pp_acc);
        assert!(missed.pp < clean.pp);
    }

    #[test]
    fn hidden_multiplies_both() {
        let state = ScoreState::new(900, HitCounts::new(880, 20, 0, 0));

        let nomod = calculate(GameMods::NO_MOD, state);
        let hidden = calculate(GameMods::HIDDEN, state);

        assert!(hidden.pp_strain.almost_eq(nomod.pp_strain * 1.025, 1e-9));
        assert!(hidden.pp_acc.eq(nomod.pp_acc));

        let expected = power_mean([hidden.pp_strain, hidden.pp_acc]) * 1.1 * 1.1;
        assert!(hidden.pp.almost_eq(expected, 1e-9), "{} != {expected}", hidden.pp);
    }

    #[test]
    fn zero_combo_is_finite() {
        let attrs = calculate(GameMods::NO_MOD, ScoreState::new(0, HitCounts::new(880, 20, 0, 0)));

        assert!(attrs.pp.is_finite());
    }
}
