//! @ai:module:intent End-to-end report run over a results directory
//! @ai:module:layer application
//! @ai:module:public_api ReportPipeline, RunSummary

use crate::config::ReportConfig;
use crate::dataset::{ResultsLoader, ResultsLoaderTrait};
use crate::metrics::{DatasetAnalysis, DatasetAnalyzer, DatasetAnalyzerTrait};
use crate::report::{ReportGenerator, ANALYSIS_FILE};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// @ai:intent What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub analyses: Vec<DatasetAnalysis>,
    pub outputs: Vec<PathBuf>,
}

/// @ai:intent Discovers, analyzes and reports every dataset in one pass
pub struct ReportPipeline {
    loader: ResultsLoader,
    analyzer: DatasetAnalyzer,
    reports: ReportGenerator,
}

impl ReportPipeline {
    pub fn new() -> Self {
        Self {
            loader: ResultsLoader::new(),
            analyzer: DatasetAnalyzer::new(),
            reports: ReportGenerator::new(),
        }
    }

    /// @ai:intent Run the full analysis and write all reports
    /// @ai:pre config.paths.results_dir holds at least one CSV file
    /// @ai:effects fs:read, fs:write
    ///
    /// Nothing is written when discovery fails. The analysis report is written
    /// row by row, so a failure on a later dataset leaves the rows before it.
    pub fn run(&self, config: &ReportConfig) -> Result<RunSummary> {
        let files = self.loader.discover(&config.paths.results_dir)?;

        let mut analysis_writer = self.reports.start_analysis(&config.paths.output_dir)?;
        let mut analyses = Vec::with_capacity(files.len());

        for file in &files {
            let table = self
                .loader
                .load(file)
                .with_context(|| format!("Failed to load dataset {}", file.dataset))?;

            let analysis = self.analyzer.analyze(table);
            analysis_writer.write(&analysis)?;
            analyses.push(analysis);
        }

        analysis_writer.finish()?;

        let mut outputs = vec![config.paths.output_dir.join(ANALYSIS_FILE)];
        outputs.extend(self.reports.generate_summaries(&analyses, config)?);

        tracing::info!("Analyzed {} datasets", analyses.len());
        Ok(RunSummary { analyses, outputs })
    }
}

impl Default for ReportPipeline {
    fn default() -> Self {
        Self::new()
    }
}
