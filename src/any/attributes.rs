use crate::{
    catch::CatchPerformanceAttributes, mania::ManiaPerformanceAttributes,
    osu::OsuPerformanceAttributes, taiko::TaikoPerformanceAttributes, GameMode,
};

/// The result of a performance calculation based on the mode.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerformanceAttributes {
    /// osu!standard performance calculation result.
    Osu(OsuPerformanceAttributes),
    /// osu!taiko performance calculation result.
    Taiko(TaikoPerformanceAttributes),
    /// osu!catch performance calculation result.
    Catch(CatchPerformanceAttributes),
    /// osu!mania performance calculation result.
    Mania(ManiaPerformanceAttributes),
}

impl PerformanceAttributes {
    /// Attributes of the given mode with every value set to zero.
    pub fn zero(mode: GameMode) -> Self {
        match mode {
            GameMode::Osu => Self::Osu(OsuPerformanceAttributes::default()),
            GameMode::Taiko => Self::Taiko(TaikoPerformanceAttributes::default()),
            GameMode::Catch => Self::Catch(CatchPerformanceAttributes::default()),
            GameMode::Mania => Self::Mania(ManiaPerformanceAttributes::default()),
        }
    }

    /// The pp value.
    pub const fn pp(&self) -> f64 {
        match self {
            Self::Osu(attrs) => attrs.pp,
            Self::Taiko(attrs) => attrs.pp,
            Self::Catch(attrs) => attrs.pp,
            Self::Mania(attrs) => attrs.pp,
        }
    }

    /// The mode of the attributes.
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::Osu(_) => GameMode::Osu,
            Self::Taiko(_) => GameMode::Taiko,
            Self::Catch(_) => GameMode::Catch,
            Self::Mania(_) => GameMode::Mania,
        }
    }
}

impl Default for PerformanceAttributes {
    fn default() -> Self {
        Self::zero(GameMode::Osu)
    }
}

impl From<OsuPerformanceAttributes> for PerformanceAttributes {
    fn from(attrs: OsuPerformanceAttributes) -> Self {
        Self::Osu(attrs)
    }
}

impl From<TaikoPerformanceAttributes> for PerformanceAttributes {
    fn from(attrs: TaikoPerformanceAttributes) -> Self {
        Self::Taiko(attrs)
    }
}

impl From<CatchPerformanceAttributes> for PerformanceAttributes {
    fn from(attrs: CatchPerformanceAttributes) -> Self {
        Self::Catch(attrs)
    }
}

impl From<ManiaPerformanceAttributes> for PerformanceAttributes {
    fn from(attrs: ManiaPerformanceAttributes) -> Self {
        Self::Mania(attrs)
    }
}
