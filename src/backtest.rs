// =============================================================================
// Backtest — placeholder statistics for the dashboard's backtest view
// =============================================================================
//
// This is intentionally a stub: it returns canned statistics with a jittered
// win rate so the view has plausible numbers to render.  It makes no claim of
// historical fidelity and ignores its inputs beyond the signature.

use rand::Rng;

use crate::types::{BacktestResult, Candlestick};

/// Produce placeholder backtest statistics for a candle window.
///
/// The win rate is randomized in `65 ± 5`; every other figure is fixed.
pub fn run_backtest(_candles: &[Candlestick], _rr_ratio: f64) -> BacktestResult {
    let win_rate = 65.0 + (rand::thread_rng().gen::<f64>() * 10.0 - 5.0);

    BacktestResult {
        total_trades: 30,
        win_rate,
        profit_factor: 2.2,
        net_profit: 1840.0,
        equity_curve: vec![10_000.0, 10_250.0, 10_180.0, 10_500.0, 10_950.0, 11_840.0],
    }
}
