// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band = SMA, upper/lower = SMA ± multiplier * rolling standard
// deviation.  All three series have the input length so the engine can index
// the latest band value directly.

use super::safe_num;
use super::sma::{calculate_sma, calculate_std_dev};

/// Full Bollinger Band series for a price sequence.
#[derive(Debug, Clone, Default)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    pub sma: Vec<f64>,
}

/// Compute Bollinger Bands over a trailing `period` window.
///
/// Returns all-zero series of the input length when there are fewer than
/// `period` samples (or `period` is zero).
pub fn calculate_bollinger(data: &[f64], period: usize, multiplier: f64) -> BollingerBands {
    if period == 0 || data.len() < period {
        let zeros = vec![0.0; data.len()];
        return BollingerBands {
            upper: zeros.clone(),
            lower: zeros.clone(),
            sma: zeros,
        };
    }

    let sma = calculate_sma(data, period);
    let sd = calculate_std_dev(data, period);

    let upper = sma
        .iter()
        .zip(&sd)
        .map(|(&m, &s)| m + multiplier * safe_num(s, 0.0))
        .collect();
    let lower = sma
        .iter()
        .zip(&sd)
        .map(|(&m, &s)| m - multiplier * safe_num(s, 0.0))
        .collect();

    BollingerBands { upper, lower, sma }
}
