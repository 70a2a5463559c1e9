use crate::{
    catch::CatchPerformanceCalculator,
    mania::ManiaPerformanceCalculator,
    model::{attributes::BeatmapAttributes, beatmap::BeatmapDifficulty, play::PlayResult},
    osu::{OsuFormula, OsuPerformanceAttributes, OsuPerformanceCalculator},
    taiko::TaikoPerformanceCalculator,
    GameMode,
};

use super::{attributes::PerformanceAttributes, score_state::ScoreState};

/// Performance calculator for plays of any mode.
///
/// # Example
///
/// ```
/// use osu_helper_pp::{
///     any::Performance,
///     model::{beatmap::BeatmapDifficulty, play::{HitCounts, PlayResult}},
///     GameMode, GameMods,
/// };
///
/// let map = BeatmapDifficulty {
///     mode: GameMode::Osu,
///     ar: 9.0,
///     od: 8.5,
///     cs: 4.0,
///     hp: 6.0,
///     stars: 5.6,
///     aim_stars: 2.8,
///     speed_stars: 2.6,
///     max_combo: 1200,
///     n_circles: 600,
///     n_sliders: 390,
///     n_spinners: 10,
///     ..Default::default()
/// };
///
/// let play = PlayResult {
///     mode: GameMode::Osu,
///     mods: GameMods::HIDDEN,
///     counts: HitCounts::new(950, 40, 5, 5),
///     max_combo: 800,
///     ..Default::default()
/// };
///
/// let attrs = map.attributes(play.mods);
/// let breakdown = Performance::new(&play, &map, &attrs).calculate();
///
/// assert!(breakdown.current > 0.0);
/// assert!(breakdown.if_fc >= breakdown.current);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Performance<'a> {
    play: &'a PlayResult,
    map: &'a BeatmapDifficulty,
    attrs: &'a BeatmapAttributes,
    formula: OsuFormula,
}

impl<'a> Performance<'a> {
    /// Create a new performance calculator.
    ///
    /// `attrs` must have been calculated for `map` and the play's mods.
    pub const fn new(
        play: &'a PlayResult,
        map: &'a BeatmapDifficulty,
        attrs: &'a BeatmapAttributes,
    ) -> Self {
        Self {
            play,
            map,
            attrs,
            formula: OsuFormula::Refined,
        }
    }

    /// Specify the osu!standard formula revision.
    ///
    /// Defaults to [`OsuFormula::Refined`]. Irrelevant for other modes.
    pub const fn formula(mut self, formula: OsuFormula) -> Self {
        self.formula = formula;

        self
    }

    /// Calculate the performance of the play and of its full combo
    /// counterpart.
    ///
    /// Plays with ScoreV2, Relax, Autopilot, or Autoplay are worth nothing.
    pub fn calculate(self) -> PerformanceBreakdown {
        let mode = self.play.mode;
        let mods = self.play.mods;

        if mods.excludes_performance() {
            debug_log!(%mode, %mods, "mods exclude the play from performance");

            return PerformanceBreakdown {
                current: 0.0,
                if_fc: 0.0,
                attributes: PerformanceAttributes::zero(mode),
            };
        }

        let state = ScoreState::new(self.play.max_combo, self.play.counts);

        if state.counts.total_hits(mode) == 0 {
            debug_log!(%mode, "play without hits has undefined performance");
        }

        let attributes = self.calculate_state(state);
        let if_fc = self
            .calculate_state(state.full_combo(self.map.max_combo))
            .pp();

        PerformanceBreakdown {
            current: self.play.pp.unwrap_or_else(|| attributes.pp()),
            if_fc,
            attributes,
        }
    }

    /// Calculate the performance attributes for the given score state.
    ///
    /// Mods are taken from the play but neither the play's hit counts nor
    /// its provided pp value are considered.
    pub fn calculate_state(&self, state: ScoreState) -> PerformanceAttributes {
        let Self {
            play,
            map,
            attrs,
            formula,
        } = *self;

        let mods = play.mods;

        match play.mode {
            GameMode::Osu => OsuPerformanceCalculator::new(map, attrs, mods, state, formula)
                .calculate()
                .into(),
            GameMode::Taiko => TaikoPerformanceCalculator::new(map, attrs, mods, state)
                .calculate()
                .into(),
            GameMode::Catch => CatchPerformanceCalculator::new(map, attrs, mods, state)
                .calculate()
                .into(),
            GameMode::Mania => ManiaPerformanceCalculator::new(map, attrs, mods, play.score, state)
                .calculate()
                .into(),
        }
    }
}

/// The result of a [`Performance`] calculation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceBreakdown {
    /// The play's performance.
    ///
    /// This is the value provided by the data source if there is one.
    pub current: f64,
    /// The performance if the play was a full combo with the same accuracy
    /// i.e. all misses were 300s.
    pub if_fc: f64,
    /// The calculated attributes of the play as it is.
    pub attributes: PerformanceAttributes,
}

impl PerformanceBreakdown {
    /// The osu!standard components of the calculation.
    pub const fn osu(&self) -> Option<&OsuPerformanceAttributes> {
        match self.attributes {
            PerformanceAttributes::Osu(ref attrs) => Some(attrs),
            _ => None,
        }
    }
}
