// =============================================================================
// MarketPulse — deterministic candle-window analysis engine
// =============================================================================
//
// Converts an OHLCV candle window into a classified trading recommendation
// (direction, confidence, entry/stop/target levels) plus a snapshot of the
// technical indicators it was derived from.  The engine is synchronous,
// side-effect-free and never panics on finite numeric input; data
// acquisition, persistence and presentation are the caller's business.

pub mod backtest;
pub mod indicators;
pub mod settings;
pub mod signal;
pub mod types;

pub use settings::EngineSettings;
pub use signal::{generate_signal, MIN_CANDLES};
pub use types::{
    BacktestResult, Candlestick, IndicatorSnapshot, Levels, MacdSnapshot, MarketTrend, SignalType,
    TradingSignal,
};
