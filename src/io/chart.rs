// src/io/chart.rs

use crate::model::recipe::Ingredient;
use crate::simulation::engine::DayRecord;
use anyhow::Result;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// (day, quantity) points per ingredient, in ingredient order.
pub fn inventory_series(history: &[DayRecord]) -> BTreeMap<Ingredient, Vec<(u32, u32)>> {
    let mut series: BTreeMap<Ingredient, Vec<(u32, u32)>> = BTreeMap::new();
    for record in history {
        for (ingredient, qty) in &record.inventory {
            series.entry(*ingredient).or_default().push((record.day, *qty));
        }
    }
    series
}

/// Draws stock levels over time as an SVG line chart.
///
/// Returns `None` without touching the filesystem when there is nothing to draw.
pub fn plot_inventory(path: &Path, history: &[DayRecord]) -> Result<Option<PathBuf>> {
    if history.is_empty() {
        warn!("No history to plot.");
        return Ok(None);
    }

    let series = inventory_series(history);
    let last_day = history.iter().map(|r| r.day).max().unwrap_or(1);
    let peak = series
        .values()
        .flatten()
        .map(|&(_, qty)| qty)
        .max()
        .unwrap_or(0);

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Inventory Levels Over Time", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            0u32..last_day.saturating_add(1),
            0u32..peak.saturating_add(peak / 10).saturating_add(1),
        )?;

    chart
        .configure_mesh()
        .x_desc("Day")
        .y_desc("Quantity")
        .draw()?;

    for (idx, (ingredient, points)) in series.into_iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(ingredient.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;

    info!(path = %path.display(), "inventory chart saved");
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inventory::Inventory;
    use crate::model::recipe::initial_stock;
    use crate::simulation::config::SimulationConfig;
    use crate::simulation::engine::BakerySimulation;

    fn history(days: u32) -> Vec<DayRecord> {
        let mut sim = BakerySimulation::new(SimulationConfig::default(), Inventory::new(&initial_stock()));
        sim.simulate(days, 8, 25).unwrap();
        sim.history().to_vec()
    }

    #[test]
    fn series_follow_days() {
        let h = history(3);
        let series = inventory_series(&h);
        assert_eq!(series.len(), Ingredient::ALL.len());
        let flour = &series[&Ingredient::Flour];
        assert_eq!(flour.iter().map(|p| p.0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(flour[2].1, h[2].inventory[&Ingredient::Flour]);
    }

    #[test]
    fn empty_history_draws_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        assert_eq!(plot_inventory(&path, &[]).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn stock_at_u32_max_still_plots() {
        let config = SimulationConfig {
            days: 2,
            restock_amount: u32::MAX,
            ..Default::default()
        };
        let mut sim = BakerySimulation::new(config, Inventory::new(&initial_stock()));
        sim.run().unwrap();
        assert!(sim.history()[0].inventory.values().any(|&q| q == u32::MAX));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.svg");
        let saved = plot_inventory(&path, sim.history()).unwrap();
        assert_eq!(saved.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trends.svg");
        let saved = plot_inventory(&path, &history(5)).unwrap();
        assert_eq!(saved.as_deref(), Some(path.as_path()));
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }
}
