pub use self::{
    attributes::ManiaPerformanceAttributes,
    performance::ManiaPerformanceCalculator,
};

mod attributes;
mod performance;
