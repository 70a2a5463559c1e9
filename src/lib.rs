//! Library to calculate performance points for all [osu!] gamemodes based on
//! precomputed beatmap attributes.
//!
//! ## Description
//!
//! Instead of parsing `.osu` files and computing star ratings itself, this
//! crate works on the difficulty values that the [osu! API] provides for a
//! beatmap (AR, OD, CS, HP, star ratings, object counts, max combo) and on
//! the judgement counts of a submitted play.
//!
//! It provides
//!   - mod-adjusted beatmap attributes through [`BeatmapAttributesBuilder`]
//!   - the accuracy of hit counts through [`accuracy`]
//!   - the performance of a play, and of its full combo counterpart, through [`Performance`]
//!   - an estimate of hit counts that reproduce a given accuracy through [`HitDistribution`]
//!
//! All calculations are pure and synchronous.
//!
//! ## Usage
//!
//! ```
//! use osu_helper_pp::{BeatmapDifficulty, GameMode, GameMods, HitCounts, Performance, PlayResult};
//!
//! // Attributes as provided by the API
//! let map = BeatmapDifficulty {
//!     mode: GameMode::Osu,
//!     ar: 9.3,
//!     od: 8.8,
//!     cs: 4.0,
//!     hp: 5.0,
//!     stars: 5.67,
//!     aim_stars: 2.87,
//!     speed_stars: 2.53,
//!     max_combo: 909,
//!     n_circles: 307,
//!     n_sliders: 293,
//!     n_spinners: 1,
//!     total_length: 143.0,
//!     drain_length: 141.0,
//! };
//!
//! let mods: GameMods = "HDDT".parse().unwrap();
//!
//! // Apply mods on AR, OD, CS, and HP
//! let attrs = map.attributes(mods);
//! assert!(attrs.ar > 10.0);
//!
//! let play = PlayResult {
//!     mode: GameMode::Osu,
//!     mods,
//!     counts: HitCounts::new(580, 15, 2, 4),
//!     max_combo: 621,
//!     score: 6_504_320,
//!     pp: None,
//! };
//!
//! println!("Accuracy: {:.2}%", play.accuracy());
//!
//! let breakdown = Performance::new(&play, &map, &attrs).calculate();
//!
//! println!("PP: {} | FC: {}", breakdown.current, breakdown.if_fc);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `serde` | Implement `Serialize` and `Deserialize` for all data types. | [`serde`]
//! | `tracing` | Zero or undefined results as well as conflicting mods are logged through `tracing::debug`. If this feature is not enabled, nothing is logged. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [osu! API]: https://github.com/ppy/osu-api/wiki
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::similar_names
)]

#[macro_use]
mod util;

#[doc(inline)]
pub use self::{
    any::{accuracy, HitDistribution, Performance, PerformanceBreakdown},
    model::{
        attributes::{BeatmapAttributes, BeatmapAttributesBuilder},
        beatmap::{BeatmapDifficulty, RawBeatmapDifficulty},
        mode::GameMode,
        mods::GameMods,
        play::{HitCounts, PlayResult},
    },
};

/// Types for calculations of any mode.
pub mod any;

/// Types for osu!standard calculations.
pub mod osu;

/// Types for osu!taiko calculations.
pub mod taiko;

/// Types for osu!catch calculations.
pub mod catch;

/// Types for osu!mania calculations.
pub mod mania;

/// Types used in and around this crate.
pub mod model;
