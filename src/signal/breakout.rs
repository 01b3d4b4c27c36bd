// =============================================================================
// Breakout Detection — volume surge, candle strength, level crossing
// =============================================================================
//
// A breakout requires three independent confirmations on the current candle:
//   1. Volume surge — volume beyond a statistical threshold of the trailing
//      window (either test alone is sufficient, a deliberate OR):
//        volume > mean + 1.5 * stddev * sensitivity
//        volume > 2 * mean * sensitivity
//   2. Candle strength — body covers more than 70% of the full range.
//   3. Level crossing — price beyond support/resistance (ATR-scaled buffer)
//      or beyond the Bollinger envelope, in the candle's direction.
//
// `sensitivity` scales the thresholds: lower values trigger more easily,
// higher values demand a stronger move.

use crate::indicators::safe_num;
use crate::types::{Candlestick, Levels};

/// Trailing window used for the volume statistics.
const VOLUME_LOOKBACK: usize = 20;

/// Fraction of the candle range the body must exceed to count as "strong".
const STRONG_BODY_RATIO: f64 = 0.7;

/// Shape classification of a single candle.
#[derive(Debug, Clone, Copy)]
pub struct CandleShape {
    /// Body covers more than 70% of the high-low range.
    pub strong: bool,
    /// Close above open.
    pub bullish: bool,
}

/// Directional breakout flags. At most one side can be set, since the candle
/// direction test is exclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakoutCheck {
    pub bullish: bool,
    pub bearish: bool,
}

impl BreakoutCheck {
    pub fn any(self) -> bool {
        self.bullish || self.bearish
    }
}

/// Test whether `last_volume` qualifies as a surge against the trailing
/// volume window.
pub fn detect_volume_surge(volumes: &[f64], last_volume: f64, sensitivity: f64) -> bool {
    let window = &volumes[volumes.len().saturating_sub(VOLUME_LOOKBACK)..];
    let n = VOLUME_LOOKBACK as f64;

    let mean = window.iter().map(|&v| safe_num(v, 0.0)).sum::<f64>() / n;
    let std_dev = (window
        .iter()
        .map(|&v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n)
        .sqrt();

    // NaN volumes leave std_dev NaN; the comparison is then simply false and
    // the 2x-mean test still gets its chance.
    last_volume > mean + 1.5 * std_dev * sensitivity || last_volume > mean * 2.0 * sensitivity
}

/// Classify the body/direction of a candle.
pub fn candle_shape(candle: &Candlestick) -> CandleShape {
    let range = candle.high - candle.low;
    let body = (candle.close - candle.open).abs();
    CandleShape {
        strong: range > 0.0 && body > range * STRONG_BODY_RATIO,
        bullish: candle.close > candle.open,
    }
}

/// Evaluate the full breakout condition for the current price.
///
/// The level crossing accepts either the S/R extreme (pushed out by an
/// ATR-scaled buffer) or the Bollinger envelope; the surge and strength
/// confirmations are mandatory on both sides.
#[allow(clippy::too_many_arguments)]
pub fn detect_breakout(
    price: f64,
    levels: Levels,
    upper_band: f64,
    lower_band: f64,
    atr: f64,
    sensitivity: f64,
    surge: bool,
    shape: CandleShape,
) -> BreakoutCheck {
    let buffer = atr * 0.1 * sensitivity;

    let bullish = (price > levels.resistance + buffer || price > upper_band)
        && surge
        && shape.strong
        && shape.bullish;
    let bearish = (price < levels.support - buffer || price < lower_band)
        && surge
        && shape.strong
        && !shape.bullish;

    BreakoutCheck { bullish, bearish }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, high: f64, low: f64, close: f64) -> Candlestick {
        Candlestick {
            time: 0,
            open,
            high,
            low,
            close,
            volume: 100.0,
        }
    }

    // ---- detect_volume_surge ---------------------------------------------

    /// Alternating window: mean 100, population stddev 50.
    /// Thresholds at sensitivity 1.0: mean + 1.5σ = 175, 2×mean = 200.
    fn alternating_volumes() -> Vec<f64> {
        (0..20)
            .map(|i| if i % 2 == 0 { 50.0 } else { 150.0 })
            .collect()
    }

    #[test]
    fn surge_on_stddev_spike() {
        let volumes = alternating_volumes();
        assert!(detect_volume_surge(&volumes, 176.0, 1.0));
        assert!(!detect_volume_surge(&volumes, 174.0, 1.0));
    }

    #[test]
    fn surge_on_double_average_alone() {
        // Wide-spread window: mean 100, stddev 80, so the stddev threshold
        // (220) sits above the 2x-mean threshold (200).
        let mut volumes = vec![180.0; 10];
        volumes.extend(vec![20.0; 10]);
        assert!(detect_volume_surge(&volumes, 210.0, 1.0));
        assert!(!detect_volume_surge(&volumes, 195.0, 1.0));
    }

    #[test]
    fn surge_sensitivity_scales_thresholds() {
        let volumes = alternating_volumes();
        // Thresholds double at sensitivity 2.0: 250 and 400.
        assert!(detect_volume_surge(&volumes, 240.0, 1.0));
        assert!(!detect_volume_surge(&volumes, 240.0, 2.0));
        // Low sensitivity loosens the trigger: 2x-mean threshold drops to 100.
        assert!(detect_volume_surge(&volumes, 110.0, 0.5));
    }

    #[test]
    fn surge_uses_trailing_window_only() {
        // Old giant volumes outside the 20-candle window must not inflate
        // the mean.
        let mut volumes = vec![10_000.0; 10];
        volumes.extend(alternating_volumes());
        assert!(detect_volume_surge(&volumes, 210.0, 1.0));
    }

    #[test]
    fn no_surge_on_flat_window_at_mean() {
        // Flat window: stddev 0, so the statistical threshold collapses to
        // the mean; a volume equal to it must not surge.
        let volumes = vec![100.0; 20];
        assert!(!detect_volume_surge(&volumes, 100.0, 1.0));
        assert!(detect_volume_surge(&volumes, 100.1, 1.0));
    }

    // ---- candle_shape ----------------------------------------------------

    #[test]
    fn strong_bullish_candle() {
        let shape = candle_shape(&candle(100.0, 110.0, 99.0, 109.0));
        assert!(shape.strong); // body 9 > range 11 * 0.7
        assert!(shape.bullish);
    }

    #[test]
    fn weak_candle_with_long_wicks() {
        let shape = candle_shape(&candle(100.0, 110.0, 90.0, 101.0));
        assert!(!shape.strong); // body 1 vs range 20
        assert!(shape.bullish);
    }

    #[test]
    fn doji_is_neither_strong_nor_bullish() {
        let shape = candle_shape(&candle(100.0, 100.0, 100.0, 100.0));
        assert!(!shape.strong); // zero range never qualifies
        assert!(!shape.bullish);
    }

    #[test]
    fn body_exactly_at_ratio_is_not_strong() {
        // body = 7, range = 10: 7 > 7 is false.
        let shape = candle_shape(&candle(100.0, 110.0, 100.0, 107.0));
        assert!(!shape.strong);
    }

    // ---- detect_breakout -------------------------------------------------

    fn levels(support: f64, resistance: f64) -> Levels {
        Levels {
            support,
            resistance,
        }
    }

    #[test]
    fn bullish_breakout_requires_all_confirmations() {
        let shape = CandleShape {
            strong: true,
            bullish: true,
        };
        let lv = levels(95.0, 105.0);

        let full = detect_breakout(110.0, lv, 108.0, 92.0, 2.0, 1.0, true, shape);
        assert!(full.bullish);
        assert!(!full.bearish);

        // No surge: no breakout even with the level crossed.
        let no_surge = detect_breakout(110.0, lv, 108.0, 92.0, 2.0, 1.0, false, shape);
        assert!(!no_surge.any());

        // Weak candle: no breakout.
        let weak = detect_breakout(
            110.0,
            lv,
            108.0,
            92.0,
            2.0,
            1.0,
            true,
            CandleShape {
                strong: false,
                bullish: true,
            },
        );
        assert!(!weak.any());
    }

    #[test]
    fn bearish_breakout_mirrors_bullish() {
        let shape = CandleShape {
            strong: true,
            bullish: false,
        };
        let check = detect_breakout(90.0, levels(95.0, 105.0), 108.0, 92.0, 2.0, 1.0, true, shape);
        assert!(check.bearish);
        assert!(!check.bullish);
    }

    #[test]
    fn candle_direction_excludes_opposite_side() {
        // Price below support but candle closed up: no bearish breakout.
        let shape = CandleShape {
            strong: true,
            bullish: true,
        };
        let check = detect_breakout(90.0, levels(95.0, 105.0), 108.0, 92.0, 2.0, 1.0, true, shape);
        assert!(!check.bearish);
    }

    #[test]
    fn atr_buffer_blocks_marginal_crossing() {
        let shape = CandleShape {
            strong: true,
            bullish: true,
        };
        // Resistance 105, ATR 20 => buffer 2.0; price 106 is inside the
        // buffer and below the upper band, so no breakout.
        let check = detect_breakout(
            106.0,
            levels(95.0, 105.0),
            120.0,
            92.0,
            20.0,
            1.0,
            true,
            shape,
        );
        assert!(!check.any());
    }

    #[test]
    fn bollinger_crossing_alone_satisfies_level_test() {
        let shape = CandleShape {
            strong: true,
            bullish: true,
        };
        // Price under resistance+buffer but above the upper band.
        let check = detect_breakout(
            104.0,
            levels(95.0, 105.0),
            103.0,
            92.0,
            2.0,
            1.0,
            true,
            shape,
        );
        assert!(check.bullish);
    }
}
