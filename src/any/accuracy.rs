use crate::{
    model::{mode::GameMode, play::HitCounts},
    util::float_ext::FloatExt,
};

/// Calculate the accuracy in percent, i.e. between `0.0` and `100.0`, for
/// the given mode.
///
/// | Mode | Formula |
/// | - | - |
/// | osu! | `(50·n50 + 100·n100 + 300·n300) / (300·(n50 + n100 + n300 + misses))` |
/// | taiko | `(0.5·n100 + n300) / (n100 + n300 + misses)` |
/// | catch | `(n50 + n100 + n300) / (n50 + n100 + n300 + misses + katu)` |
/// | mania | `(50·n50 + 100·n100 + 200·katu + 300·(n300 + geki)) / (300·(misses + n50 + n100 + katu + n300 + geki))` |
///
/// # NaN
///
/// If the mode's denominator is zero, i.e. there are no hits to judge, the
/// accuracy is undefined and `f64::NAN` is returned. There is no implicit
/// fallback so callers must check with [`f64::is_nan`] before presenting
/// the value.
pub fn accuracy(mode: GameMode, counts: &HitCounts) -> f64 {
    let n300 = f64::from(counts.n300);
    let n100 = f64::from(counts.n100);
    let n50 = f64::from(counts.n50);
    let misses = f64::from(counts.misses);
    let n_katu = f64::from(counts.n_katu);
    let n_geki = f64::from(counts.n_geki);

    let (numerator, denominator) = match mode {
        GameMode::Osu => (
            50.0 * n50 + 100.0 * n100 + 300.0 * n300,
            300.0 * (n50 + n100 + n300 + misses),
        ),
        GameMode::Taiko => (0.5 * n100 + n300, n100 + n300 + misses),
        GameMode::Catch => (n50 + n100 + n300, n50 + n100 + n300 + misses + n_katu),
        GameMode::Mania => (
            50.0 * n50 + 100.0 * n100 + 200.0 * n_katu + 300.0 * (n300 + n_geki),
            300.0 * (misses + n50 + n100 + n_katu + n300 + n_geki),
        ),
    };

    if denominator.eq(0.0) {
        debug_log!(%mode, "accuracy of a play without hits is undefined");

        return f64::NAN;
    }

    numerator / denominator * 100.0
}

/// Calculate the accuracy for a raw mode identifier as used by the osu! API.
///
/// Unknown identifiers fall back to the osu!standard formula.
pub fn accuracy_for_mode_id(mode: u8, counts: &HitCounts) -> f64 {
    accuracy(GameMode::try_from(mode).unwrap_or(GameMode::Osu), counts)
}
