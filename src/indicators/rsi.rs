// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Seed average gain / average loss with the simple average of the
//          first `period` signed deltas.
// Step 2 — First RSI value lands at index `period`.
// Step 3 — Apply Wilder's exponential smoothing:
//            avg_gain = (prev_avg_gain * (period - 1) + gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + loss) / period
// Step 4 — RS  = avg_gain / avg_loss,  RSI = 100 - 100 / (1 + RS)
//
// When the average loss is zero the seed value pins RS to 100 (RSI of
// 100 - 100/101); inside the smoothing loop the same condition short-circuits
// to exactly 100.0 instead.  A zero delta counts as a gain, so a perfectly
// flat series takes the loss-free path too: 99.0099 at index `period`, then
// 100 for every index after it.
// =============================================================================

use super::safe_num;

/// Compute the full RSI series for `data`.
///
/// The output always matches the input length and lies in `[0, 100]`:
/// indices before `period` (and any non-finite intermediate) hold the
/// neutral value 50.  Inputs with fewer than two samples (or a zero period)
/// yield an all-50 series.
pub fn calculate_rsi(data: &[f64], period: usize) -> Vec<f64> {
    if data.len() < 2 || period == 0 {
        return vec![50.0; data.len()];
    }

    let mut rsi = vec![50.0; data.len()];
    let p = period as f64;

    // Seed averages from the first `period` deltas.
    let mut gains = 0.0;
    let mut losses = 0.0;
    let limit = data.len().min(period + 1);
    for i in 1..limit {
        let diff = safe_num(data[i], 0.0) - safe_num(data[i - 1], 0.0);
        if diff >= 0.0 {
            gains += diff;
        } else {
            losses -= diff;
        }
    }
    let mut avg_gain = gains / p;
    let mut avg_loss = losses / p;

    if data.len() > period {
        let initial_rs = if avg_loss == 0.0 || avg_loss.is_nan() {
            100.0
        } else {
            avg_gain / avg_loss
        };
        rsi[period] = 100.0 - 100.0 / (1.0 + initial_rs);

        for i in period + 1..data.len() {
            let diff = safe_num(data[i], 0.0) - safe_num(data[i - 1], 0.0);
            let gain = if diff >= 0.0 { diff } else { 0.0 };
            let loss = if diff < 0.0 { -diff } else { 0.0 };

            avg_gain = (avg_gain * (p - 1.0) + gain) / p;
            avg_loss = (avg_loss * (p - 1.0) + loss) / p;

            rsi[i] = if avg_loss == 0.0 || avg_loss.is_nan() {
                100.0
            } else {
                100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
            };
            if rsi[i].is_nan() {
                rsi[i] = 50.0;
            }
        }
    }

    rsi.into_iter().map(|v| safe_num(v, 50.0)).collect()
}
