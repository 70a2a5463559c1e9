/// Exponent of the generalized power mean that combines performance components.
pub const COMPONENT_EXPONENT: f64 = 1.1;

/// Turns a star rating into the raw value of a performance component.
///
/// `(5 * max(1, stars / divisor) - 4)^exponent / denominator`
pub fn base_value(stars: f64, divisor: f64, exponent: f64, denominator: f64) -> f64 {
    (5.0 * (stars / divisor).max(1.0) - 4.0).powf(exponent) / denominator
}

/// `(sum(value^1.1))^(1 / 1.1)`
pub fn power_mean<const N: usize>(values: [f64; N]) -> f64 {
    values
        .into_iter()
        .map(|value| value.powf(COMPONENT_EXPONENT))
        .sum::<f64>()
        .powf(1.0 / COMPONENT_EXPONENT)
}
