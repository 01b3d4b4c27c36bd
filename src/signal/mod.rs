// =============================================================================
// Signal Engine — candle window in, classified recommendation out
// =============================================================================
//
// Pipeline (every call, in order):
//   1. Guard: fewer than 50 candles => neutral placeholder signal
//   2. Compute indicators (EMA stack, RSI, Bollinger, MACD, ATR, S/R)
//   3. Volume-surge / candle-strength / breakout tests
//   4. Trend classification (EMA50 vs EMA200)
//   5. Priority-ordered signal classification with confidence score
//   6. ATR-scaled stop/target levels, 5-decimal rounding
//
// The engine is a pure function of its inputs apart from the generated id
// and timestamp: no I/O, no shared state, never panics on finite input.

pub mod breakout;
pub mod risk;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::indicators::atr::calculate_atr;
use crate::indicators::bollinger::calculate_bollinger;
use crate::indicators::ema::calculate_ema;
use crate::indicators::levels::support_resistance;
use crate::indicators::macd::calculate_macd;
use crate::indicators::rsi::calculate_rsi;
use crate::types::{
    Candlestick, IndicatorSnapshot, MacdSnapshot, MarketTrend, SignalType, TradingSignal,
};

use breakout::{candle_shape, detect_breakout, detect_volume_surge};
use risk::{round5, trade_levels};

/// Minimum candle window the engine will classify.
pub const MIN_CANDLES: usize = 50;

/// Lookback for the support/resistance extrema.
const LEVEL_LOOKBACK: usize = 40;

/// Classify the most recent market state of `candles` into a trading signal.
///
/// `candles` is treated as an immutable, time-ordered snapshot; `pair` and
/// `timeframe` are echoed into the result uninterpreted.  `rr_ratio` places
/// the take-profit as a multiple of the risked stop distance, `scalping`
/// switches the fast EMA pair to 5/13 and tightens the stop, and
/// `breakout_sensitivity` scales the surge and buffer thresholds.
///
/// Fewer than [`MIN_CANDLES`] candles yields a well-formed neutral
/// placeholder — the engine's only "failure" path.  It never panics on any
/// finite numeric input.
pub fn generate_signal(
    pair: &str,
    timeframe: &str,
    candles: &[Candlestick],
    rr_ratio: f64,
    scalping: bool,
    breakout_sensitivity: f64,
) -> TradingSignal {
    if candles.len() < MIN_CANDLES {
        debug!(
            pair,
            timeframe,
            count = candles.len(),
            "insufficient candles, returning neutral placeholder"
        );
        return empty_signal(pair, timeframe);
    }

    // ── 1. Extract series and the current candle ─────────────────────────
    let prices: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let Some(last_candle) = candles.last() else {
        return empty_signal(pair, timeframe);
    };
    let last_price = last_candle.close;

    // ── 2. Indicators ────────────────────────────────────────────────────
    let (fast_period, slow_period) = if scalping { (5, 13) } else { (9, 21) };
    let ema_fast = calculate_ema(&prices, fast_period);
    let ema_slow = calculate_ema(&prices, slow_period);
    let ema_50 = calculate_ema(&prices, 50);
    let ema_200 = calculate_ema(&prices, 200);
    let rsi = calculate_rsi(&prices, 14);
    let bands = calculate_bollinger(&prices, 20, 2.0);
    let macd = calculate_macd(&prices);
    let atr = calculate_atr(candles, 14);
    let levels = support_resistance(candles, LEVEL_LOOKBACK);

    let last_rsi = rsi.last().copied().unwrap_or(50.0);
    let last_fast = ema_fast.last().copied().unwrap_or(last_price);
    let last_slow = ema_slow.last().copied().unwrap_or(last_price);
    let last_ema50 = ema_50.last().copied().unwrap_or(last_price);
    let last_ema200 = ema_200.last().copied().unwrap_or(last_price);
    let last_upper = bands.upper.last().copied().unwrap_or(last_price);
    let last_lower = bands.lower.last().copied().unwrap_or(last_price);

    // ── 3. Breakout tests ────────────────────────────────────────────────
    let surge = detect_volume_surge(&volumes, last_candle.volume, breakout_sensitivity);
    let shape = candle_shape(last_candle);
    let breakout = detect_breakout(
        last_price,
        levels,
        last_upper,
        last_lower,
        atr,
        breakout_sensitivity,
        surge,
        shape,
    );

    // ── 4. Trend classification ──────────────────────────────────────────
    let trend = if last_ema50 > last_ema200 && last_price > last_ema50 {
        MarketTrend::Bullish
    } else if last_ema50 < last_ema200 && last_price < last_ema50 {
        MarketTrend::Bearish
    } else {
        MarketTrend::Sideways
    };

    // ── 5. Signal classification (first matching rule wins) ──────────────
    let (signal, confidence): (SignalType, u8) = if breakout.bullish {
        let mut score: u8 = 85;
        if last_rsi > 60.0 {
            score += 10;
        }
        if trend == MarketTrend::Bullish {
            score += 5;
        }
        (SignalType::StrongBuy, score.min(98))
    } else if breakout.bearish {
        let mut score: u8 = 85;
        if last_rsi < 40.0 {
            score += 10;
        }
        if trend == MarketTrend::Bearish {
            score += 5;
        }
        (SignalType::StrongSell, score.min(98))
    } else if last_fast > last_slow
        && last_price > last_ema50
        && last_rsi > 55.0
        && trend == MarketTrend::Bullish
    {
        (SignalType::Buy, 75)
    } else if last_fast < last_slow
        && last_price < last_ema50
        && last_rsi < 45.0
        && trend == MarketTrend::Bearish
    {
        (SignalType::Sell, 75)
    } else {
        (SignalType::Neutral, 50)
    };

    // ── 6. Risk-managed levels ───────────────────────────────────────────
    let (stop_loss, take_profit) = trade_levels(signal, last_price, atr, rr_ratio, scalping);

    let last_macd = macd.macd.last().copied().unwrap_or(0.0);
    let last_macd_signal = macd.signal.last().copied().unwrap_or(0.0);

    debug!(
        pair,
        timeframe,
        signal = %signal,
        confidence,
        trend = %trend,
        breakout = breakout.any(),
        atr,
        "signal generated"
    );

    TradingSignal {
        id: Uuid::new_v4().to_string(),
        pair: pair.to_string(),
        timeframe: timeframe.to_string(),
        signal,
        confidence,
        entry: round5(last_price),
        stop_loss: round5(stop_loss),
        take_profit: round5(take_profit),
        trend,
        timestamp: Utc::now().timestamp_millis(),
        is_breakout: breakout.any(),
        levels: crate::types::Levels {
            support: round5(levels.support),
            resistance: round5(levels.resistance),
        },
        indicators: IndicatorSnapshot {
            rsi: last_rsi,
            ema9: last_fast,
            ema21: last_slow,
            ema50: last_ema50,
            ema200: last_ema200,
            macd: MacdSnapshot {
                macd: last_macd,
                signal: last_macd_signal,
                histogram: last_macd - last_macd_signal,
            },
        },
    }
}

/// The neutral placeholder returned when the candle window is too short.
fn empty_signal(pair: &str, timeframe: &str) -> TradingSignal {
    TradingSignal {
        id: Uuid::new_v4().to_string(),
        pair: pair.to_string(),
        timeframe: timeframe.to_string(),
        signal: SignalType::Neutral,
        confidence: 0,
        entry: 0.0,
        stop_loss: 0.0,
        take_profit: 0.0,
        trend: MarketTrend::Sideways,
        timestamp: Utc::now().timestamp_millis(),
        is_breakout: false,
        levels: crate::types::Levels::default(),
        indicators: IndicatorSnapshot::default(),
    }
}
