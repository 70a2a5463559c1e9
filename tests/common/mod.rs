#![allow(dead_code)]

mod mode;

// False positive
#[allow(unused)]
pub use self::{mode::*, mods::*};

/// Bit values for mods
mod mods {
    #![allow(unused)]

    use osu_helper_pp::GameMods;

    pub const NM: GameMods = GameMods::NO_MOD;
    pub const NF: GameMods = GameMods::NO_FAIL;
    pub const EZ: GameMods = GameMods::EASY;
    pub const HD: GameMods = GameMods::HIDDEN;
    pub const HR: GameMods = GameMods::HARD_ROCK;
    pub const DT: GameMods = GameMods::DOUBLE_TIME;
    pub const RX: GameMods = GameMods::RELAX;
    pub const HT: GameMods = GameMods::HALF_TIME;
    pub const NC: GameMods = GameMods::NIGHTCORE;
    pub const FL: GameMods = GameMods::FLASHLIGHT;
    pub const AT: GameMods = GameMods::AUTOPLAY;
    pub const SO: GameMods = GameMods::SPUN_OUT;
    pub const AP: GameMods = GameMods::RELAX2;
    pub const V2: GameMods = GameMods::SCORE_V2;
}

#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < f64::EPSILON, "{a} != {b}")
}

#[track_caller]
pub fn assert_almost_eq(a: f64, b: f64, tolerance: f64) {
    assert!((a - b).abs() <= tolerance, "|{a} - {b}| > {tolerance}")
}

pub trait AssertEq {
    fn assert_eq(&self, expected: &Self);
}
