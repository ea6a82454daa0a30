//! @ai:module:intent Best vs worst G-Mean chart across datasets
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator
//! @ai:module:stateless true

use crate::config::ChartConfig;
use crate::metrics::DatasetAnalysis;
use anyhow::{bail, Result};
use plotters::prelude::*;
use std::path::Path;

const CHART_TITLE: &str = "Melhores e piores resultados para cada conjunto de dados";
const BEST_SERIES: &str = "Melhores resultados";
const WORST_SERIES: &str = "Piores resultados";
const BAR_WIDTH: f64 = 0.2;
const BAR_OPACITY: f64 = 0.4;
/// 0.0 to 1.0 in steps of 0.05
const Y_TICKS: usize = 21;

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Draw the grouped best/worst bar chart
    fn generate(
        &self,
        analyses: &[DatasetAnalysis],
        config: &ChartConfig,
        output_path: &Path,
    ) -> Result<()>;
}

/// @ai:intent Generates charts from dataset analyses
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Dataset name for a group position, blank between groups
    /// @ai:effects pure
    fn group_label(names: &[&str], x: f64) -> String {
        let nearest = x.round();

        if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
            return String::new();
        }

        names
            .get(nearest as usize)
            .map(|name| name.to_string())
            .unwrap_or_default()
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:effects fs:write
    fn generate(
        &self,
        analyses: &[DatasetAnalysis],
        config: &ChartConfig,
        output_path: &Path,
    ) -> Result<()> {
        if analyses.is_empty() {
            bail!("No datasets to plot");
        }

        let root = BitMapBackend::new(output_path, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let names: Vec<&str> = analyses.iter().map(|a| a.dataset.as_str()).collect();
        let groups = names.len();

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..(groups as f64 - 0.5), 0f64..1f64)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(groups)
            .y_labels(Y_TICKS)
            .x_desc("Conjunto de dados")
            .y_desc("G-Mean")
            .x_label_formatter(&|x| Self::group_label(&names, *x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;

        let best_style = BLUE.mix(BAR_OPACITY).filled();
        let worst_style = RED.mix(BAR_OPACITY).filled();

        chart
            .draw_series(analyses.iter().enumerate().map(|(i, a)| {
                let x = i as f64;
                Rectangle::new([(x - BAR_WIDTH, 0.0), (x, a.best.score)], best_style)
            }))?
            .label(BEST_SERIES)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], best_style));

        chart
            .draw_series(analyses.iter().enumerate().map(|(i, a)| {
                let x = i as f64;
                Rectangle::new([(x, 0.0), (x + BAR_WIDTH, a.worst.score)], worst_style)
            }))?
            .label(WORST_SERIES)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], worst_style));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}
