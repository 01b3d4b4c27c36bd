// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average.
//
// Formula:
//   k     = 2 / (period + 1)
//   EMA_t = close_t * k + EMA_{t-1} * (1 - k)
//
// The series is seeded with the first sample rather than an initial SMA, so
// the first ~`period` outputs carry a known early-sample bias.  Downstream
// signal thresholds were tuned against this seeding; do not switch it to SMA
// seeding without re-tuning them.
// =============================================================================

use super::safe_num;

/// Compute the EMA series for `data` with smoothing factor `2 / (period + 1)`.
///
/// The output has the same length as the input; an empty input yields an
/// empty vec.  Non-finite samples fall back to the previous EMA value, so the
/// output is always finite for any input.
pub fn calculate_ema(data: &[f64], period: usize) -> Vec<f64> {
    if data.is_empty() {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);

    let mut ema = Vec::with_capacity(data.len());
    let mut prev = safe_num(data[0], 0.0);
    ema.push(prev);

    for &sample in &data[1..] {
        let price = safe_num(sample, prev);
        let val = price * k + prev * (1.0 - k);
        ema.push(val);
        prev = val;
    }

    ema
}
