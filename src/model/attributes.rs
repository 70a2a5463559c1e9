use super::{beatmap::BeatmapDifficulty, mods::GameMods};

/// Mod-adjusted difficulty attributes of a beatmap.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeatmapAttributes {
    /// The approach rate. Not clamped so it may exceed `10.0`.
    pub ar: f64,
    /// The overall difficulty. Not clamped so it may exceed `10.0`.
    pub od: f64,
    /// The circle size, clamped between `0.0` and `10.0`.
    pub cs: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The clock rate with respect to mods i.e. `1.5`, `0.75`, or `1.0`.
    pub clock_rate: f64,
    /// The hit windows for approach rate and overall difficulty.
    pub hit_windows: HitWindows,
}

impl BeatmapAttributes {
    /// Create a [`BeatmapAttributesBuilder`].
    pub const fn builder() -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new()
    }
}

/// AR and OD hit windows
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitWindows {
    /// Hit window for approach rate i.e. `TimePreempt` in milliseconds.
    pub ar: f64,
    /// Hit window for overall difficulty i.e. time to hit a 300 in milliseconds.
    pub od: f64,
}

/// A value that is either a base value or already includes mods.
#[derive(Copy, Clone, Debug, PartialEq)]
struct ModsDependent {
    value: f64,
    with_mods: bool,
}

impl ModsDependent {
    const fn new(value: f64) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

/// A builder for [`BeatmapAttributes`] and [`HitWindows`].
///
/// # Example
///
/// ```
/// use osu_helper_pp::{model::attributes::BeatmapAttributesBuilder, GameMods};
///
/// let attrs = BeatmapAttributesBuilder::new()
///     .ar(9.0, false)
///     .od(8.0, false)
///     .mods(GameMods::DOUBLE_TIME)
///     .build();
///
/// assert!((attrs.ar - 31.0 / 3.0).abs() < 1e-9);
/// assert!((attrs.clock_rate - 1.5).abs() < f64::EPSILON);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    ar: ModsDependent,
    od: ModsDependent,
    cs: ModsDependent,
    hp: ModsDependent,
    mods: GameMods,
}

impl BeatmapAttributesBuilder {
    const OD_0_MS: f64 = 79.5;
    const OD_10_MS: f64 = 19.5;
    const OD_MS_STEP: f64 = 6.0;

    const AR_0_MS: f64 = 1800.0;
    const AR_5_MS: f64 = 1200.0;
    const AR_10_MS: f64 = 450.0;
    const AR_MS_STEP_LOW: f64 = 120.0;
    const AR_MS_STEP_HIGH: f64 = 150.0;

    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// Attributes are set to `5.0` and mods are empty.
    pub const fn new() -> Self {
        Self {
            ar: ModsDependent::new(5.0),
            od: ModsDependent::new(5.0),
            cs: ModsDependent::new(5.0),
            hp: ModsDependent::new(5.0),
            mods: GameMods::NO_MOD,
        }
    }

    /// Use the given [`BeatmapDifficulty`]'s attributes.
    pub const fn map(self, map: &BeatmapDifficulty) -> Self {
        Self {
            ar: ModsDependent::new(map.ar),
            od: ModsDependent::new(map.od),
            cs: ModsDependent::new(map.cs),
            hp: ModsDependent::new(map.hp),
            mods: self.mods,
        }
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// Values that already include mods are still bound to the hit window
    /// range i.e. they're clamped between `0.0` and `10.0`.
    pub const fn ar(self, ar: f64, with_mods: bool) -> Self {
        Self {
            ar: ModsDependent {
                value: ar,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the overall difficulty.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// Values that already include mods are still bound to the hit window
    /// range i.e. they're clamped between `0.0` and `10.0`.
    pub const fn od(self, od: f64, with_mods: bool) -> Self {
        Self {
            od: ModsDependent {
                value: od,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the circle size.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn cs(self, cs: f64, with_mods: bool) -> Self {
        Self {
            cs: ModsDependent {
                value: cs,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the drain rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn hp(self, hp: f64, with_mods: bool) -> Self {
        Self {
            hp: ModsDependent {
                value: hp,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the mods.
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Calculate the AR and OD hit windows.
    pub fn hit_windows(&self) -> HitWindows {
        let mods = self.mods;

        let clock_rate = mods.clock_rate();
        let ar_clock_rate = if self.ar.with_mods { 1.0 } else { clock_rate };
        let od_clock_rate = if self.od.with_mods { 1.0 } else { clock_rate };

        let mod_mult = |val: ModsDependent| {
            if val.with_mods {
                val.value
            } else {
                val.value * mods.od_ar_hp_multiplier()
            }
        };

        let preempt = Self::ar_to_ms(mod_mult(self.ar)) / ar_clock_rate;
        let great = Self::od_to_ms(mod_mult(self.od)) / od_clock_rate;

        HitWindows {
            ar: preempt,
            od: great,
        }
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let mods = self.mods;

        if mods.hr() && mods.ez() {
            debug_log!(%mods, "HardRock and Easy are both set; applying HardRock");
        }

        if mods.dt() && mods.ht() {
            debug_log!(%mods, "DoubleTime and HalfTime are both set; applying DoubleTime");
        }

        // HP
        let mut hp = self.hp.value;

        if !self.hp.with_mods {
            hp *= mods.od_ar_hp_multiplier();
        }

        // CS
        let mut cs = self.cs.value;

        if !self.cs.with_mods {
            cs *= mods.cs_multiplier();
        }

        let hit_windows = self.hit_windows();

        BeatmapAttributes {
            ar: Self::ms_to_ar(hit_windows.ar),
            od: Self::ms_to_od(hit_windows.od),
            cs: cs.clamp(0.0, 10.0),
            hp,
            clock_rate: mods.clock_rate(),
            hit_windows,
        }
    }

    fn od_to_ms(od: f64) -> f64 {
        (Self::OD_0_MS - Self::OD_MS_STEP * od).clamp(Self::OD_10_MS, Self::OD_0_MS)
    }

    fn ar_to_ms(ar: f64) -> f64 {
        let ms = if ar < 5.0 {
            Self::AR_0_MS - Self::AR_MS_STEP_LOW * ar
        } else {
            Self::AR_5_MS - Self::AR_MS_STEP_HIGH * (ar - 5.0)
        };

        ms.clamp(Self::AR_10_MS, Self::AR_0_MS)
    }

    fn ms_to_od(ms: f64) -> f64 {
        (Self::OD_0_MS - ms) / Self::OD_MS_STEP
    }

    fn ms_to_ar(ms: f64) -> f64 {
        if ms > Self::AR_5_MS {
            (Self::AR_0_MS - ms) / Self::AR_MS_STEP_LOW
        } else {
            5.0 + (Self::AR_5_MS - ms) / Self::AR_MS_STEP_HIGH
        }
    }
}

impl From<&BeatmapDifficulty> for BeatmapAttributesBuilder {
    fn from(map: &BeatmapDifficulty) -> Self {
        Self::new().map(map)
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
