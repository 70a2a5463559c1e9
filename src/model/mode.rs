use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// The four osu! game modes.
///
/// The set of modes is closed so every mode-specific formula is selected
/// through an exhaustive `match`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// osu!standard
    #[default]
    Osu = 0,
    /// osu!taiko
    Taiko = 1,
    /// osu!catch
    Catch = 2,
    /// osu!mania
    Mania = 3,
}

impl GameMode {
    /// The mode's identifier as used by the osu! API.
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for GameMode {
    type Error = ParseGameModeError;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(Self::Osu),
            1 => Ok(Self::Taiko),
            2 => Ok(Self::Catch),
            3 => Ok(Self::Mania),
            _ => Err(ParseGameModeError::UnknownId(mode)),
        }
    }
}

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "osu" | "std" | "standard" => Ok(Self::Osu),
            "1" | "taiko" => Ok(Self::Taiko),
            "2" | "catch" | "fruits" | "ctb" => Ok(Self::Catch),
            "3" | "mania" => Ok(Self::Mania),
            _ => Err(ParseGameModeError::UnknownName(s.to_owned())),
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Osu => "osu",
            Self::Taiko => "taiko",
            Self::Catch => "catch",
            Self::Mania => "mania",
        };

        f.write_str(name)
    }
}

/// Failed to convert a raw value into a [`GameMode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseGameModeError {
    #[error("unknown mode id {0}")]
    UnknownId(u8),
    #[error("unknown mode name `{0}`")]
    UnknownName(String),
}
