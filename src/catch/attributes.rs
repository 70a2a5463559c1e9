/// The result of an osu!catch performance calculation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatchPerformanceAttributes {
    /// The final performance points.
    pub pp: f64,
    /// Ratio of caught fruits, droplets, and tiny droplets in `[0, 1]`.
    pub accuracy: f64,
}

impl CatchPerformanceAttributes {
    /// Return the performance point value.
    pub const fn pp(&self) -> f64 {
        self.pp
    }
}
