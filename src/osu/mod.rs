pub use self::{
    attributes::OsuPerformanceAttributes,
    performance::{OsuFormula, OsuPerformanceCalculator},
};

mod attributes;
mod performance;
