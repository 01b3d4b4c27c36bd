// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD line = EMA(12) - EMA(26), signal line = EMA(MACD, 9), histogram =
// MACD - signal.  All three series share the input length.

use super::ema::calculate_ema;
use super::safe_num;

/// Full MACD series for a price sequence.
#[derive(Debug, Clone, Default)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute the MACD, signal and histogram series with the standard
/// 12 / 26 / 9 periods.  Empty input yields three empty series.
pub fn calculate_macd(data: &[f64]) -> MacdSeries {
    if data.is_empty() {
        return MacdSeries::default();
    }

    let ema12 = calculate_ema(data, 12);
    let ema26 = calculate_ema(data, 26);

    let macd: Vec<f64> = ema12
        .iter()
        .zip(&ema26)
        .map(|(&fast, &slow)| safe_num(fast, 0.0) - safe_num(slow, fast))
        .collect();

    let signal = calculate_ema(&macd, 9);

    let histogram = macd
        .iter()
        .zip(&signal)
        .map(|(&m, &s)| safe_num(m, 0.0) - safe_num(s, m))
        .collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}
