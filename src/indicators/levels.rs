// =============================================================================
// Support / Resistance Levels
// =============================================================================
//
// Simple window extrema: resistance = highest high, support = lowest low over
// the trailing `lookback` candles.  Deliberately not swing-pivot detection —
// plain extrema are the standard reference for basic breakout checks.

use super::safe_num;
use crate::types::{Candlestick, Levels};

/// Compute support and resistance over the trailing `lookback` candles.
///
/// Returns `{0, 0}` when fewer than `lookback` candles are available (or the
/// lookback is zero), matching the engine's "insufficient data" convention.
pub fn support_resistance(candles: &[Candlestick], lookback: usize) -> Levels {
    if lookback == 0 || candles.len() < lookback {
        return Levels::default();
    }

    let window = &candles[candles.len() - lookback..];
    let resistance = window
        .iter()
        .map(|c| safe_num(c.high, 0.0))
        .fold(f64::NEG_INFINITY, f64::max);
    let support = window
        .iter()
        .map(|c| safe_num(c.low, 0.0))
        .fold(f64::INFINITY, f64::min);

    Levels {
        support: safe_num(support, 0.0),
        resistance: safe_num(resistance, 0.0),
    }
}
