/// Round with precision that shrinks as magnitude grows.
///
/// One decimal place from 100 up, two from 1 up, three below that.
/// Non-finite input rounds to 0.
pub fn round(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let digits = if value.abs() >= 100.0 {
        1
    } else if value.abs() >= 1.0 {
        2
    } else {
        3
    };
    let multiplier = 10f64.powi(digits);
    let scaled = value * multiplier;
    // past 2^53 there is no fractional part left to round
    if scaled.abs() >= 9_007_199_254_740_992.0 {
        return value;
    }
    // halves go towards positive infinity; `+ 0.0` folds -0 into 0
    round_half_up(scaled) / multiplier + 0.0
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
