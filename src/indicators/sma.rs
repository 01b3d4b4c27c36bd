// =============================================================================
// Simple Moving Average & Rolling Standard Deviation
// =============================================================================
//
// Both functions preserve the input length.  Indices where the trailing
// window has not yet filled emit a placeholder (the raw safeguarded sample
// for the SMA, zero for the standard deviation) rather than NaN, so callers
// can index both series in lockstep with the price series.

use super::safe_num;

/// Simple moving average over a trailing window of `period` samples.
///
/// For indices before the window fills (`i < period - 1`) the raw
/// safeguarded input value is emitted as a placeholder.  A zero `period`
/// degrades to the safeguarded input copy.
pub fn calculate_sma(data: &[f64], period: usize) -> Vec<f64> {
    if data.is_empty() {
        return Vec::new();
    }
    if period == 0 {
        return data.iter().map(|&v| safe_num(v, 0.0)).collect();
    }

    let mut sma = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        if i + 1 < period {
            sma.push(safe_num(data[i], 0.0));
            continue;
        }
        let window = &data[i + 1 - period..=i];
        let sum: f64 = window.iter().map(|&v| safe_num(v, 0.0)).sum();
        sma.push(sum / period as f64);
    }
    sma
}

/// Population standard deviation over a trailing window of `period` samples,
/// measured around the SMA at each index.
///
/// Emits zero for indices before the window fills.  Returns an all-zero
/// series of the input length when there are fewer than `period` samples.
pub fn calculate_std_dev(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![0.0; data.len()];
    }

    let sma = calculate_sma(data, period);
    let mut sd = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        if i + 1 < period {
            sd.push(0.0);
            continue;
        }
        let mean = sma[i];
        let var = data[i + 1 - period..=i]
            .iter()
            .map(|&v| {
                let d = safe_num(v, mean) - mean;
                d * d
            })
            .sum::<f64>()
            / period as f64;
        sd.push(var.sqrt());
    }
    sd
}
