// =============================================================================
// Risk-Managed Trade Levels
// =============================================================================
//
// Stop distance is ATR-scaled with a mode-dependent multiplier and floored at
// 0.1% of price so a flat market never produces a zero-width stop.  The
// take-profit sits at `risk * rr_ratio` on the opposite side.

use crate::types::SignalType;

/// ATR multiplier for the default (swing) mode.
const RISK_MULTIPLIER: f64 = 1.8;
/// Tighter ATR multiplier used in scalping mode.
const SCALPING_RISK_MULTIPLIER: f64 = 1.2;
/// Minimum risk as a fraction of price, guarding against near-zero ATR.
const MIN_RISK_FRACTION: f64 = 0.001;

/// Compute `(stop_loss, take_profit)` for a classified signal.
///
/// BUY-family signals place the stop below entry and the target above;
/// everything else is mirrored.  NEUTRAL is not buy-side, so it inherits the
/// sell-side formula (stop above entry, target below).  Callers that render
/// neutral levels should be aware of that asymmetry.
pub fn trade_levels(
    signal: SignalType,
    price: f64,
    atr: f64,
    rr_ratio: f64,
    scalping: bool,
) -> (f64, f64) {
    let multiplier = if scalping {
        SCALPING_RISK_MULTIPLIER
    } else {
        RISK_MULTIPLIER
    };
    let risk = (atr * multiplier).max(price * MIN_RISK_FRACTION);

    if signal.is_buy_side() {
        (price - risk, price + risk * rr_ratio)
    } else {
        (price + risk, price - risk * rr_ratio)
    }
}

/// Round a price level to 5 decimal places.
pub fn round5(v: f64) -> f64 {
    (v * 100_000.0).round() / 100_000.0
}
