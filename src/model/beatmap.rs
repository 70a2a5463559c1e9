use super::{attributes::BeatmapAttributes, mode::GameMode, mods::GameMods};

/// Precomputed difficulty attributes of a beatmap as provided by the osu! API.
///
/// Values are stored as given, i.e. without accounting for mods. Use
/// [`BeatmapDifficulty::attributes`] or [`BeatmapAttributesBuilder`] to
/// apply mods.
///
/// [`BeatmapAttributesBuilder`]: crate::model::attributes::BeatmapAttributesBuilder
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeatmapDifficulty {
    /// The game mode.
    pub mode: GameMode,
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The total star rating.
    pub stars: f64,
    /// The aim star rating. Only relevant for osu!standard.
    pub aim_stars: f64,
    /// The speed star rating. Only relevant for osu!standard.
    pub speed_stars: f64,
    /// The maximum achievable combo.
    pub max_combo: u32,
    /// The amount of circles.
    pub n_circles: u32,
    /// The amount of sliders.
    pub n_sliders: u32,
    /// The amount of spinners.
    pub n_spinners: u32,
    /// Length from first to last object in seconds.
    pub total_length: f64,
    /// Length in seconds without breaks.
    pub drain_length: f64,
}

impl BeatmapDifficulty {
    /// The amount of hitobjects.
    pub const fn n_objects(&self) -> u32 {
        self.n_circles
            .saturating_add(self.n_sliders)
            .saturating_add(self.n_spinners)
    }

    /// Apply the given mods on the map's AR, OD, CS, and HP.
    pub fn attributes(&self, mods: GameMods) -> BeatmapAttributes {
        BeatmapAttributes::builder().map(self).mods(mods).build()
    }

    /// The total length in seconds after considering the mods' clock rate.
    pub fn length_with_mods(&self, mods: GameMods) -> f64 {
        self.total_length / mods.clock_rate()
    }

    /// The drain length in seconds after considering the mods' clock rate.
    pub fn drain_length_with_mods(&self, mods: GameMods) -> f64 {
        self.drain_length / mods.clock_rate()
    }
}

/// Beatmap attributes as they come from the data source where any field may
/// be absent.
///
/// [`RawBeatmapDifficulty::into_difficulty`] is the only place in which
/// missing values are replaced, all of them with `0`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawBeatmapDifficulty {
    pub mode: GameMode,
    pub ar: Option<f64>,
    pub od: Option<f64>,
    pub cs: Option<f64>,
    pub hp: Option<f64>,
    pub stars: Option<f64>,
    pub aim_stars: Option<f64>,
    pub speed_stars: Option<f64>,
    pub max_combo: Option<u32>,
    pub n_circles: Option<u32>,
    pub n_sliders: Option<u32>,
    pub n_spinners: Option<u32>,
    pub total_length: Option<f64>,
    pub drain_length: Option<f64>,
}

impl RawBeatmapDifficulty {
    /// Substitute all missing values with `0`.
    pub fn into_difficulty(self) -> BeatmapDifficulty {
        BeatmapDifficulty {
            mode: self.mode,
            ar: self.ar.unwrap_or(0.0),
            od: self.od.unwrap_or(0.0),
            cs: self.cs.unwrap_or(0.0),
            hp: self.hp.unwrap_or(0.0),
            stars: self.stars.unwrap_or(0.0),
            aim_stars: self.aim_stars.unwrap_or(0.0),
            speed_stars: self.speed_stars.unwrap_or(0.0),
            max_combo: self.max_combo.unwrap_or(0),
            n_circles: self.n_circles.unwrap_or(0),
            n_sliders: self.n_sliders.unwrap_or(0),
            n_spinners: self.n_spinners.unwrap_or(0),
            total_length: self.total_length.unwrap_or(0.0),
            drain_length: self.drain_length.unwrap_or(0.0),
        }
    }
}

impl From<RawBeatmapDifficulty> for BeatmapDifficulty {
    fn from(raw: RawBeatmapDifficulty) -> Self {
        raw.into_difficulty()
    }
}
