// =============================================================================
// Shared types for the MarketPulse analysis engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// A single OHLCV candlestick. `time` is epoch seconds.
///
/// Ordered series are expected to have strictly increasing `time`; enforcing
/// that ordering (and dropping out-of-order updates) is the feed layer's job,
/// not the engine's. The engine tolerates any finite-number input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candlestick {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Directional classification of the most recent market state.
///
/// The serialized labels match the dashboard's stored signal history exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalType {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl SignalType {
    /// True for the BUY family (`BUY` / `STRONG BUY`).
    ///
    /// Note: `NEUTRAL` is *not* buy-side. Level mirroring in the risk step
    /// keys off this, so a neutral signal inherits sell-side levels.
    pub fn is_buy_side(self) -> bool {
        matches!(self, Self::StrongBuy | Self::Buy)
    }

    /// True for the SELL family (`SELL` / `STRONG SELL`).
    pub fn is_sell_side(self) -> bool {
        matches!(self, Self::StrongSell | Self::Sell)
    }
}

impl Default for SignalType {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrongBuy => write!(f, "STRONG BUY"),
            Self::Buy => write!(f, "BUY"),
            Self::Neutral => write!(f, "NEUTRAL"),
            Self::Sell => write!(f, "SELL"),
            Self::StrongSell => write!(f, "STRONG SELL"),
        }
    }
}

/// Broad trend regime derived from the EMA50 / EMA200 relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketTrend {
    Bullish,
    Bearish,
    Sideways,
}

impl Default for MarketTrend {
    fn default() -> Self {
        Self::Sideways
    }
}

impl std::fmt::Display for MarketTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "Bullish"),
            Self::Bearish => write!(f, "Bearish"),
            Self::Sideways => write!(f, "Sideways"),
        }
    }
}

/// Support / resistance price levels (window extrema).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Levels {
    pub support: f64,
    pub resistance: f64,
}

/// Latest MACD values attached to a signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdSnapshot {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Snapshot of the indicator values a signal was derived from.
///
/// In scalping mode the `ema9` / `ema21` slots carry the faster 5 / 13 period
/// EMAs the engine actually used; the field names stay fixed for the
/// dashboard's benefit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub ema9: f64,
    pub ema21: f64,
    pub ema50: f64,
    pub ema200: f64,
    pub macd: MacdSnapshot,
}

impl Default for IndicatorSnapshot {
    fn default() -> Self {
        Self {
            rsi: 50.0,
            ema9: 0.0,
            ema21: 0.0,
            ema50: 0.0,
            ema200: 0.0,
            macd: MacdSnapshot::default(),
        }
    }
}

/// The engine's principal output: one classified recommendation per call.
///
/// Immutable once created; the engine holds no reference after returning it.
/// Field names serialize in camelCase to match the dashboard's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingSignal {
    /// Opaque call-unique token (UUID v4).
    pub id: String,
    pub pair: String,
    pub timeframe: String,
    pub signal: SignalType,
    /// Integer confidence score, 0–100 (98 cap on breakout signals).
    pub confidence: u8,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub trend: MarketTrend,
    /// Creation wall-clock time, milliseconds.
    pub timestamp: i64,
    pub is_breakout: bool,
    pub levels: Levels,
    pub indicators: IndicatorSnapshot,
}

/// Canned statistics for the dashboard's backtest view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestResult {
    pub total_trades: u32,
    pub win_rate: f64,
    pub profit_factor: f64,
    pub net_profit: f64,
    pub equity_curve: Vec<f64>,
}
