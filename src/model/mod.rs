/// Mod-adjusted beatmap attributes.
pub mod attributes;

/// Beatmap records.
pub mod beatmap;

/// Game modes.
pub mod mode;

/// Game mods.
pub mod mods;

/// Play records.
pub mod play;
