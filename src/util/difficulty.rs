// `f64::exp` is not const
pub fn logistic(x: f64, midpoint_offset: f64, multiplier: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(multiplier * (midpoint_offset - x)))
}

/// Saturating length term shared by osu!standard and osu!catch.
///
/// Grows linearly up to `threshold` hits and logarithmically beyond.
pub fn length_bonus(total_hits: f64, base: f64, linear: f64, threshold: f64, log_scale: f64) -> f64 {
    let mut bonus = base + linear * (total_hits / threshold).min(1.0);

    if total_hits > threshold {
        bonus += (total_hits / threshold).log10() * log_scale;
    }

    bonus
}
