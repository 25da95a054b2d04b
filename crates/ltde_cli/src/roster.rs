//! Opponent roster loading
//!
//! Rosters come either as a tagged JSON batch or as one CSV row per player.
//!
//! Valorant CSV columns (header required):
//! `id, rounds, first_deaths, first_kills, assists, clutches, pressure_rounds, util_kills, total_kills`
//!
//! League CSV columns (header required):
//! `id, duration, cs_0_10, cs_20_30, cs_25_plus, deaths_0_10, solo_kills, total_kills, tp_casts, vision`

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use ltde_core::models::{LolPlayerTelemetry, TelemetryBatch, ValorantPlayerTelemetry};
use ltde_core::Game;

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
}

#[derive(Debug, Deserialize)]
struct LeagueRow {
    id: Option<String>,
    duration: f32,
    cs_0_10: Option<f32>,
    cs_20_30: Option<f32>,
    cs_25_plus: Option<f32>,
    deaths_0_10: Option<f32>,
    #[serde(default)]
    solo_kills: u32,
    #[serde(default)]
    total_kills: u32,
    #[serde(default)]
    tp_casts: u32,
    #[serde(default)]
    vision: f32,
}

impl From<LeagueRow> for LolPlayerTelemetry {
    fn from(row: LeagueRow) -> Self {
        let buckets = |entries: &[(&str, Option<f32>)]| -> BTreeMap<String, f32> {
            entries
                .iter()
                .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
                .collect()
        };
        LolPlayerTelemetry {
            id: row.id,
            duration: row.duration,
            cs: buckets(&[("0-10", row.cs_0_10), ("20-30", row.cs_20_30), ("25+", row.cs_25_plus)]),
            deaths: buckets(&[("0-10", row.deaths_0_10)]),
            solo_kills: row.solo_kills,
            total_kills: row.total_kills,
            tp_casts: row.tp_casts,
            vision: row.vision,
        }
    }
}

/// Reads every row that parses; malformed rows are counted and skipped.
fn read_rows<T, R>(reader: R, source: &str) -> (Vec<T>, ParseStats)
where
    T: for<'de> Deserialize<'de>,
    R: std::io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    let mut stats = ParseStats::default();

    for result in reader.deserialize::<T>() {
        stats.total_rows += 1;
        match result {
            Ok(row) => {
                rows.push(row);
                stats.parsed += 1;
            }
            Err(err) => {
                stats.failed += 1;
                tracing::warn!(source, row = stats.total_rows, %err, "skipping roster row");
            }
        }
    }
    (rows, stats)
}

/// Parses a CSV roster for `game` from any reader.
pub fn parse_csv_roster<R: std::io::Read>(
    reader: R,
    game: Game,
    source: &str,
) -> (TelemetryBatch, ParseStats) {
    match game {
        Game::Valorant => {
            let (rows, stats) = read_rows::<ValorantPlayerTelemetry, _>(reader, source);
            (TelemetryBatch::Valorant(rows), stats)
        }
        Game::League => {
            let (rows, stats) = read_rows::<LeagueRow, _>(reader, source);
            (TelemetryBatch::League(rows.into_iter().map(Into::into).collect()), stats)
        }
    }
}

/// Loads a roster file. `.json` files carry their own game tag; `.csv` files
/// need `game`.
pub fn load_roster(path: &Path, game: Option<Game>) -> Result<TelemetryBatch> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
            let batch: TelemetryBatch = serde_json::from_str(&content)
                .with_context(|| format!("Invalid roster JSON: {}", path.display()))?;
            if let Some(game) = game {
                if batch.game() != game {
                    bail!(
                        "roster {} is tagged {} but {} was requested",
                        path.display(),
                        batch.game(),
                        game
                    );
                }
            }
            Ok(batch)
        }
        "csv" => {
            let Some(game) = game else {
                bail!("--game is required for CSV rosters");
            };
            let file = fs::File::open(path)
                .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
            let (batch, stats) = parse_csv_roster(file, game, &path.display().to_string());
            tracing::info!(
                path = %path.display(),
                parsed = stats.parsed,
                failed = stats.failed,
                "roster loaded"
            );
            if stats.parsed == 0 && stats.total_rows > 0 {
                bail!("no valid rows in {}", path.display());
            }
            Ok(batch)
        }
        other => bail!("unsupported roster format '{other}' (expected .json or .csv)"),
    }
}
