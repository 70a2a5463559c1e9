use crate::model::play::HitCounts;

/// The part of a play that a performance calculation depends on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreState {
    /// Maximum combo that the score has had so far. **Not** the maximum
    /// possible combo of the map.
    pub max_combo: u32,
    /// Hit judgements.
    pub counts: HitCounts,
}

impl ScoreState {
    /// Create a new score state.
    pub const fn new(max_combo: u32, counts: HitCounts) -> Self {
        Self { max_combo, counts }
    }

    /// The same score as if every miss had been a 300 and the map's full
    /// combo had been reached.
    #[must_use]
    pub const fn full_combo(self, map_max_combo: u32) -> Self {
        Self {
            max_combo: map_max_combo,
            counts: self.counts.without_misses(),
        }
    }
}
