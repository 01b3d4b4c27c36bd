// =============================================================================
// MarketPulse CLI — analyze a candle series from a JSON file
// =============================================================================
//
// Usage:
//   marketpulse <candles.json> [pair] [timeframe]
//
// Reads an OHLCV series (JSON array of candlesticks), normalizes its time
// ordering, runs the signal engine with the persisted settings and prints the
// resulting signal as pretty JSON.  The settings file path can be overridden
// with MARKETPULSE_SETTINGS.
// =============================================================================

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use marketpulse::settings::EngineSettings;
use marketpulse::signal::generate_signal;
use marketpulse::types::Candlestick;

fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let candles_path = args
        .next()
        .context("usage: marketpulse <candles.json> [pair] [timeframe]")?;
    let pair = args.next().unwrap_or_else(|| "BTCUSD".to_string());
    let timeframe = args.next().unwrap_or_else(|| "1H".to_string());

    let settings_path =
        std::env::var("MARKETPULSE_SETTINGS").unwrap_or_else(|_| "settings.json".to_string());
    let settings = EngineSettings::load(&settings_path).unwrap_or_else(|e| {
        warn!(error = %e, "failed to load settings, using defaults");
        EngineSettings::default()
    });

    let raw = std::fs::read_to_string(&candles_path)
        .with_context(|| format!("failed to read candle file {candles_path}"))?;
    let candles: Vec<Candlestick> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse candle file {candles_path}"))?;

    let series = normalize_series(candles);
    info!(
        pair = %pair,
        timeframe = %timeframe,
        candles = series.len(),
        "candle series loaded"
    );

    let signal = generate_signal(
        &pair,
        &timeframe,
        &series,
        settings.rr_ratio,
        settings.scalping_mode,
        settings.breakout_sensitivity,
    );

    info!(
        signal = %signal.signal,
        confidence = signal.confidence,
        trend = %signal.trend,
        breakout = signal.is_breakout,
        "analysis complete"
    );

    println!("{}", serde_json::to_string_pretty(&signal)?);
    Ok(())
}

/// Enforce the strictly-increasing time invariant the engine expects:
/// duplicate timestamps collapse to the latest value, out-of-order entries
/// are discarded.
fn normalize_series(candles: Vec<Candlestick>) -> Vec<Candlestick> {
    let mut series: Vec<Candlestick> = Vec::with_capacity(candles.len());
    let mut dropped = 0usize;

    for candle in candles {
        match series.last() {
            Some(last) if candle.time == last.time => {
                // Same timestamp: the newer record wins.
                series.pop();
                series.push(candle);
            }
            Some(last) if candle.time < last.time => {
                dropped += 1;
            }
            _ => series.push(candle),
        }
    }

    if dropped > 0 {
        warn!(dropped, "discarded out-of-order candles");
    }
    series
}
