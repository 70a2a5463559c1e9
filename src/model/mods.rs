use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{BitOr, BitOrAssign},
    str::FromStr,
};

/// Bit-set of game mods with the legacy osu! API layout.
///
/// See <https://github.com/ppy/osu-api/wiki#mods>
///
/// # Example
///
/// ```
/// use osu_helper_pp::GameMods;
///
/// let hdhr = GameMods::HIDDEN | GameMods::HARD_ROCK;
///
/// assert_eq!(hdhr, GameMods::from(8 + 16));
/// assert_eq!(hdhr, "HDHR".parse::<GameMods>().unwrap());
/// assert!(hdhr.hr() && !hdhr.dt());
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GameMods(u32);

macro_rules! impl_mods {
    ( $( $func_name:ident: $const_name:ident, )* ) => {
        $(
            #[doc = concat!("Whether `", stringify!($const_name), "` is set.")]
            pub const fn $func_name(self) -> bool {
                self.0 & Self::$const_name.0 > 0
            }
        )*
    };
}

impl GameMods {
    /// No mods
    pub const NO_MOD: Self = Self(0);
    /// NoFail
    pub const NO_FAIL: Self = Self(1 << 0);
    /// Easy
    pub const EASY: Self = Self(1 << 1);
    /// TouchDevice
    pub const TOUCH_DEVICE: Self = Self(1 << 2);
    /// Hidden
    pub const HIDDEN: Self = Self(1 << 3);
    /// HardRock
    pub const HARD_ROCK: Self = Self(1 << 4);
    /// SuddenDeath
    pub const SUDDEN_DEATH: Self = Self(1 << 5);
    /// DoubleTime
    pub const DOUBLE_TIME: Self = Self(1 << 6);
    /// Relax
    pub const RELAX: Self = Self(1 << 7);
    /// HalfTime
    pub const HALF_TIME: Self = Self(1 << 8);
    /// Nightcore
    pub const NIGHTCORE: Self = Self(1 << 9);
    /// Flashlight
    pub const FLASHLIGHT: Self = Self(1 << 10);
    /// Autoplay
    pub const AUTOPLAY: Self = Self(1 << 11);
    /// SpunOut
    pub const SPUN_OUT: Self = Self(1 << 12);
    /// Autopilot
    pub const RELAX2: Self = Self(1 << 13);
    /// Perfect
    pub const PERFECT: Self = Self(1 << 14);
    /// ScoreV2
    pub const SCORE_V2: Self = Self(1 << 29);

    /// Mods the remote difficulty lookup accepts.
    ///
    /// Nightcore stays its own bit even though it behaves like DoubleTime.
    pub const API_ELIGIBLE: Self = Self(
        Self::EASY.0 | Self::HARD_ROCK.0 | Self::DOUBLE_TIME.0 | Self::HALF_TIME.0 | Self::NIGHTCORE.0,
    );

    /// Plays with any of these mods have no performance value.
    pub const PERFORMANCE_EXCLUDED: Self =
        Self(Self::SCORE_V2.0 | Self::RELAX.0 | Self::RELAX2.0 | Self::AUTOPLAY.0);

    const ACRONYMS: [(&'static str, Self); 16] = [
        ("NF", Self::NO_FAIL),
        ("EZ", Self::EASY),
        ("TD", Self::TOUCH_DEVICE),
        ("HD", Self::HIDDEN),
        ("HR", Self::HARD_ROCK),
        ("SD", Self::SUDDEN_DEATH),
        ("DT", Self::DOUBLE_TIME),
        ("RX", Self::RELAX),
        ("HT", Self::HALF_TIME),
        ("NC", Self::NIGHTCORE),
        ("FL", Self::FLASHLIGHT),
        ("AT", Self::AUTOPLAY),
        ("SO", Self::SPUN_OUT),
        ("AP", Self::RELAX2),
        ("PF", Self::PERFECT),
        ("V2", Self::SCORE_V2),
    ];

    /// Create mods from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether all bits of `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is set.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 > 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Keep only the mods the remote difficulty lookup accepts.
    pub const fn api_eligible(self) -> Self {
        Self(self.0 & Self::API_ELIGIBLE.0)
    }

    /// Whether the mods disqualify a play from receiving performance.
    pub const fn excludes_performance(self) -> bool {
        self.intersects(Self::PERFORMANCE_EXCLUDED)
    }

    /// The same mods without the DoubleTime bit if Nightcore is set.
    ///
    /// The osu! API reports Nightcore plays with both bits set.
    ///
    /// ```
    /// use osu_helper_pp::GameMods;
    ///
    /// let mods = GameMods::from(8 + 64 + 512);
    ///
    /// assert_eq!(mods.normalized(), GameMods::HIDDEN | GameMods::NIGHTCORE);
    /// assert_eq!(mods.to_string(), "HDNC");
    /// ```
    #[must_use]
    pub const fn normalized(self) -> Self {
        if self.nc() {
            Self(self.0 & !Self::DOUBLE_TIME.0)
        } else {
            self
        }
    }

    /// Upper bound for mod-adjusted difficulty values.
    ///
    /// `11.0` if HardRock is combined with DoubleTime or Nightcore, `10.0`
    /// otherwise.
    pub const fn difficulty_limit(self) -> f64 {
        if self.hr() && self.dt() {
            11.0
        } else {
            10.0
        }
    }

    /// Apply the AR, OD, and HP multiplier on `base` and clamp the result
    /// between `0.0` and [`difficulty_limit`](Self::difficulty_limit).
    ///
    /// Unlike [`BeatmapAttributesBuilder`](crate::BeatmapAttributesBuilder)
    /// this does not account for the clock rate.
    pub fn difficulty(self, base: f64) -> f64 {
        (base * self.od_ar_hp_multiplier()).clamp(0.0, self.difficulty_limit())
    }

    /// Whether the clock rate differs from `1.0`.
    pub const fn change_speed(self) -> bool {
        self.dt() || self.ht()
    }

    /// The mods' clock rate.
    ///
    /// DoubleTime takes precedence if both DoubleTime and HalfTime are set.
    pub const fn clock_rate(self) -> f64 {
        if self.dt() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }

    /// Multiplier for AR, OD, and HP.
    ///
    /// HardRock takes precedence if both HardRock and Easy are set.
    pub const fn od_ar_hp_multiplier(self) -> f64 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    /// Multiplier for CS.
    pub const fn cs_multiplier(self) -> f64 {
        if self.hr() {
            1.3
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    /// Whether DoubleTime *or* Nightcore is set.
    pub const fn dt(self) -> bool {
        self.intersects(Self(Self::DOUBLE_TIME.0 | Self::NIGHTCORE.0))
    }

    impl_mods! {
        nf: NO_FAIL,
        ez: EASY,
        td: TOUCH_DEVICE,
        hd: HIDDEN,
        hr: HARD_ROCK,
        sd: SUDDEN_DEATH,
        rx: RELAX,
        ht: HALF_TIME,
        nc: NIGHTCORE,
        fl: FLASHLIGHT,
        at: AUTOPLAY,
        so: SPUN_OUT,
        ap: RELAX2,
        pf: PERFECT,
        v2: SCORE_V2,
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<GameMods> for u32 {
    fn from(mods: GameMods) -> Self {
        mods.0
    }
}

impl BitOr for GameMods {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for GameMods {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Display for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_empty() {
            return f.write_str("NM");
        }

        let mods = self.normalized();

        for (acronym, gamemod) in Self::ACRONYMS {
            if mods.contains(gamemod) {
                f.write_str(acronym)?;
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "GameMods({self} = {})", self.0)
    }
}

impl FromStr for GameMods {
    type Err = ParseGameModsError;

    /// Parse concatenated acronyms such as `"HDHR"` or `"+hddt"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('+').unwrap_or(s);

        if s.eq_ignore_ascii_case("NM") || s.is_empty() {
            return Ok(Self::NO_MOD);
        }

        if s.len() % 2 == 1 || !s.is_ascii() {
            return Err(ParseGameModsError::InvalidLength(s.to_owned()));
        }

        let mut mods = Self::NO_MOD;

        for i in (0..s.len()).step_by(2) {
            let acronym = &s[i..i + 2];

            let gamemod = Self::ACRONYMS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(acronym))
                .map(|(_, gamemod)| *gamemod)
                .ok_or_else(|| ParseGameModsError::UnknownAcronym(acronym.to_owned()))?;

            mods |= gamemod;
        }

        Ok(mods)
    }
}

/// Failed to parse [`GameMods`] from acronyms.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseGameModsError {
    #[error("mod acronyms must come in pairs of two ascii letters, got `{0}`")]
    InvalidLength(String),
    #[error("unknown mod acronym `{0}`")]
    UnknownAcronym(String),
}
