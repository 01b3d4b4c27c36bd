// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicator math used by the
// signal engine.  Every function is total: malformed numeric input (NaN,
// infinity) is neutralized in place via `safe_num` and degenerate windows
// degrade to a documented fallback value instead of panicking.  Output series
// always match the input length unless stated otherwise.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod levels;
pub mod macd;
pub mod rsi;
pub mod sma;

/// Return `v` unchanged when it is a finite real number, else `fallback`.
///
/// Applied at every arithmetic boundary so that bad market data degrades to a
/// conservative value instead of propagating NaN through the pipeline.
#[inline]
pub fn safe_num(v: f64, fallback: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}
