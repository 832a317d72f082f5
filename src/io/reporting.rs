// src/io/reporting.rs

use crate::model::recipe::{Ingredient, Product};
use crate::simulation::engine::DayRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// One CSV row per simulated day, with sales and stock spread into columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub day: u32,
    pub revenue: u64,
    #[serde(rename = "sales_Bread")]
    pub sales_bread: u32,
    #[serde(rename = "sales_Cake")]
    pub sales_cake: u32,
    #[serde(rename = "sales_Donut")]
    pub sales_donut: u32,
    #[serde(rename = "sales_Cookie")]
    pub sales_cookie: u32,
    // Empty cell when the ingredient is absent from the snapshot.
    pub inv_flour: Option<u32>,
    pub inv_yeast: Option<u32>,
    pub inv_water: Option<u32>,
    pub inv_sugar: Option<u32>,
    pub inv_eggs: Option<u32>,
    pub inv_oil: Option<u32>,
    pub inv_butter: Option<u32>,
    /// Restocked ingredient names joined with commas.
    pub restocked: String,
}

impl From<&DayRecord> for HistoryRow {
    fn from(record: &DayRecord) -> Self {
        let sold = |p: Product| record.sales.get(&p).copied().unwrap_or(0);
        let level = |i: Ingredient| record.inventory.get(&i).copied();
        let restocked = record
            .restocked
            .iter()
            .map(Ingredient::name)
            .collect::<Vec<_>>()
            .join(",");

        Self {
            day: record.day,
            revenue: record.revenue,
            sales_bread: sold(Product::Bread),
            sales_cake: sold(Product::Cake),
            sales_donut: sold(Product::Donut),
            sales_cookie: sold(Product::Cookie),
            inv_flour: level(Ingredient::Flour),
            inv_yeast: level(Ingredient::Yeast),
            inv_water: level(Ingredient::Water),
            inv_sugar: level(Ingredient::Sugar),
            inv_eggs: level(Ingredient::Eggs),
            inv_oil: level(Ingredient::Oil),
            inv_butter: level(Ingredient::Butter),
            restocked,
        }
    }
}

/// Flattens the history into tabular rows.
pub fn history_rows(history: &[DayRecord]) -> Vec<HistoryRow> {
    history.iter().map(HistoryRow::from).collect()
}

/// Serializes the history as CSV into any writer.
pub fn write_csv<W: Write>(writer: W, history: &[DayRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in history_rows(history) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the simulation history to a CSV file at `file_path`.
pub fn write_simulation_log(file_path: &Path, history: &[DayRecord]) -> Result<()> {
    let file = std::fs::File::create(file_path)
        .with_context(|| format!("creating {}", file_path.display()))?;
    write_csv(file, history).with_context(|| format!("writing {}", file_path.display()))?;

    info!(rows = history.len(), path = %file_path.display(), "history exported");
    Ok(())
}

pub fn history_csv_path(outdir: &Path, days: u32) -> PathBuf {
    outdir.join(format!("days.{days}.bakery_simulation_history.csv"))
}

pub fn inventory_chart_path(outdir: &Path, days: u32) -> PathBuf {
    outdir.join(format!("days.{days}.inventory_trends.svg"))
}
