// =============================================================================
// Average True Range (ATR)
// =============================================================================
//
// ATR measures volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// This flavor is the plain mean of TR over the most recent
// `min(period, len - 1)` intervals — no Wilder smoothing.  The signal
// engine's breakout buffers and stop distances were tuned against the
// unsmoothed value.
// =============================================================================

use super::safe_num;
use crate::types::Candlestick;

/// Compute the most recent ATR value over a trailing `period` window.
///
/// Returns a single scalar, `0.0` when fewer than two candles are supplied
/// (no interval to measure) or when the result would be non-finite.
pub fn calculate_atr(candles: &[Candlestick], period: usize) -> f64 {
    if candles.len() < 2 {
        return 0.0;
    }

    // Window start: at most `period` intervals back, never before index 1.
    let start = candles.len().saturating_sub(period).max(1);
    let count = candles.len() - start;
    if count == 0 {
        return 0.0;
    }

    let mut tr_sum = 0.0;
    for i in start..candles.len() {
        let high = safe_num(candles[i].high, 0.0);
        let low = safe_num(candles[i].low, 0.0);
        let prev_close = safe_num(candles[i - 1].close, 0.0);

        let hl = high - low;
        let hc = (high - prev_close).abs();
        let lc = (low - prev_close).abs();
        tr_sum += hl.max(hc).max(lc);
    }

    safe_num(tr_sum / count as f64, 0.0)
}
