pub use self::{
    attributes::TaikoPerformanceAttributes,
    performance::TaikoPerformanceCalculator,
};

mod attributes;
mod performance;
