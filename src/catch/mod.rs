pub use self::{
    attributes::CatchPerformanceAttributes,
    performance::CatchPerformanceCalculator,
};

mod attributes;
mod performance;
