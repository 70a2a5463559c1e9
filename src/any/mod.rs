pub use self::{
    accuracy::{accuracy, accuracy_for_mode_id},
    attributes::PerformanceAttributes,
    hit_distribution::HitDistribution,
    performance::{Performance, PerformanceBreakdown},
    score_state::ScoreState,
};

mod accuracy;
mod attributes;
mod hit_distribution;
mod performance;
mod score_state;
