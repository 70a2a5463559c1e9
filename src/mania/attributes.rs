/// The result of an osu!mania performance calculation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManiaPerformanceAttributes {
    /// The final performance points.
    pub pp: f64,
    /// The strain portion of the final pp.
    pub pp_strain: f64,
    /// The accuracy portion of the final pp.
    pub pp_acc: f64,
}

impl ManiaPerformanceAttributes {
    /// Return the performance point value.
    pub const fn pp(&self) -> f64 {
        self.pp
    }
}
