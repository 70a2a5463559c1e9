use osu_helper_pp::{BeatmapDifficulty, GameMode, GameMods, HitCounts, PlayResult};

pub struct Osu;
pub struct Taiko;
pub struct Catch;
pub struct Mania;

pub trait Mode {
    const MODE: GameMode;
    const TEST_MAP: BeatmapDifficulty;

    /// A play with a few misses and a broken combo.
    fn test_play(mods: GameMods) -> PlayResult;
}

macro_rules! impl_mode {
    ( $( $mode:ident: $fields:tt, $counts:expr, $combo:literal, $score:literal; )* ) => {
        $(
            impl Mode for $mode {
                const MODE: GameMode = GameMode::$mode;
                const TEST_MAP: BeatmapDifficulty = BeatmapDifficulty $fields;

                fn test_play(mods: GameMods) -> PlayResult {
                    PlayResult {
                        mode: Self::MODE,
                        mods,
                        counts: $counts,
                        max_combo: $combo,
                        score: $score,
                        pp: None,
                    }
                }
            }
        )*
    };
}

impl_mode! {
    Osu: {
        mode: GameMode::Osu,
        ar: 9.3,
        od: 8.8,
        cs: 4.0,
        hp: 5.0,
        stars: 5.669858729379628,
        aim_stars: 2.8693628443424104,
        speed_stars: 2.533869745015772,
        max_combo: 909,
        n_circles: 307,
        n_sliders: 293,
        n_spinners: 1,
        total_length: 143.0,
        drain_length: 141.0,
    }, HitCounts::new(570, 20, 3, 8), 403, 5_123_456;
    Taiko: {
        mode: GameMode::Taiko,
        ar: 0.0,
        od: 5.0,
        cs: 0.0,
        hp: 6.0,
        stars: 3.4,
        aim_stars: 0.0,
        speed_stars: 0.0,
        max_combo: 289,
        n_circles: 289,
        n_sliders: 0,
        n_spinners: 0,
        total_length: 122.0,
        drain_length: 122.0,
    }, HitCounts::new(270, 14, 0, 5), 188, 812_345;
    Catch: {
        mode: GameMode::Catch,
        ar: 9.0,
        od: 8.5,
        cs: 4.2,
        hp: 5.0,
        stars: 3.9,
        aim_stars: 0.0,
        speed_stars: 0.0,
        max_combo: 730,
        n_circles: 450,
        n_sliders: 90,
        n_spinners: 2,
        total_length: 160.0,
        drain_length: 155.0,
    }, HitCounts { n_katu: 12, ..HitCounts::new(700, 25, 210, 5) }, 511, 4_321_000;
    Mania: {
        mode: GameMode::Mania,
        ar: 0.0,
        od: 8.0,
        cs: 7.0,
        hp: 8.0,
        stars: 3.3,
        aim_stars: 0.0,
        speed_stars: 0.0,
        max_combo: 3217,
        n_circles: 1800,
        n_sliders: 700,
        n_spinners: 0,
        total_length: 150.0,
        drain_length: 150.0,
    }, HitCounts { n_katu: 110, n_geki: 1500, ..HitCounts::new(820, 45, 12, 13) }, 1402, 965_000;
}
