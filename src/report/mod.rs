//! @ai:module:intent Report generation for dataset analyses
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, AnalysisCsvWriter, BestWorstReporter, JsonReporter, ChartGenerator

pub mod charts;
pub mod csv_report;
pub mod json_report;

pub use charts::{ChartGenerator, ChartGeneratorTrait};
pub use csv_report::{AnalysisCsvWriter, BestWorstReporter, BestWorstReporterTrait};
pub use json_report::{JsonReporter, JsonReporterTrait};

use crate::config::ReportConfig;
use crate::metrics::DatasetAnalysis;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const ANALYSIS_FILE: &str = "analysis.csv";
pub const BEST_WORST_FILE: &str = "bestworst.csv";
pub const CHART_FILE: &str = "results.png";
pub const JSON_FILE: &str = "summary.json";

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    best_worst: BestWorstReporter,
    json: JsonReporter,
    charts: ChartGenerator,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            best_worst: BestWorstReporter::new(),
            json: JsonReporter::new(),
            charts: ChartGenerator::new(),
        }
    }

    /// @ai:intent Open the analysis report for streaming rows
    /// @ai:effects fs:write
    pub fn start_analysis(&self, output_dir: &Path) -> Result<AnalysisCsvWriter> {
        std::fs::create_dir_all(output_dir)?;
        AnalysisCsvWriter::create(&output_dir.join(ANALYSIS_FILE))
    }

    /// @ai:intent Write the reports that need every dataset: best/worst, chart, JSON
    /// @ai:effects fs:write
    pub fn generate_summaries(
        &self,
        analyses: &[DatasetAnalysis],
        config: &ReportConfig,
    ) -> Result<Vec<PathBuf>> {
        let output_dir = &config.paths.output_dir;
        std::fs::create_dir_all(output_dir)?;

        let mut written = Vec::new();

        let best_worst_path = output_dir.join(BEST_WORST_FILE);
        self.best_worst.generate(analyses, &best_worst_path)?;
        written.push(best_worst_path);

        if config.chart.enabled {
            let chart_path = output_dir.join(CHART_FILE);
            self.charts.generate(analyses, &config.chart, &chart_path)?;
            written.push(chart_path);
        }

        if config.output.write_json {
            let json_path = output_dir.join(JSON_FILE);
            self.json.generate(analyses, &json_path)?;
            written.push(json_path);
        }

        for path in &written {
            tracing::info!("Wrote {}", path.display());
        }
        Ok(written)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
