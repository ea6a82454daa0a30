//! @ai:module:intent CSV report generation: per-dataset analysis and best/worst rows
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnalysisCsvWriter, BestWorstReporter, Field, format_real
//! @ai:module:stateless true

use crate::dataset::ResultRow;
use crate::metrics::DatasetAnalysis;
use crate::schema::Dimension;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

pub const BEST_LABEL: &str = "Melhor resultado";
pub const WORST_LABEL: &str = "Pior resultado";
/// Filler for comparison columns that only apply to the best row.
pub const NOT_COMPUTED: &str = "-";

/// @ai:intent One report cell, quoted by its type rather than its content
/// @ai:effects pure
///
/// Text is always quoted, even when it reads like a number (a dataset called
/// `2017`). Numbers are never quoted.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Number(String),
}

impl Field {
    pub fn text(value: impl Into<String>) -> Self {
        Field::Text(value.into())
    }

    pub fn real(value: f64) -> Self {
        Field::Number(format_real(value))
    }

    /// @ai:intent Cell holding a category value of the given dimension
    /// @ai:effects pure
    ///
    /// Feature counts are numbers whenever the cell parses as one.
    pub fn category(dimension: Dimension, value: &str) -> Self {
        match dimension {
            Dimension::FeatureCount if value.trim().parse::<f64>().is_ok() => {
                Field::Number(value.to_string())
            }
            _ => Field::text(value),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Field::Text(s) | Field::Number(s) => s,
        }
    }

    /// @ai:intent Bytes written for this cell, quotes doubled inside text
    /// @ai:effects pure
    fn encode(&self) -> String {
        match self {
            Field::Text(s) => format!("\"{}\"", s.replace('"', "\"\"")),
            Field::Number(s) => s.clone(),
        }
    }
}

/// @ai:intent Open a CSV writer that leaves quoting to `Field`
/// @ai:effects fs:write
fn open_writer(path: &Path) -> Result<csv::Writer<File>> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))
}

fn write_fields(
    writer: &mut csv::Writer<File>,
    fields: impl IntoIterator<Item = Field>,
) -> Result<()> {
    writer.write_record(fields.into_iter().map(|f| f.encode()))?;
    Ok(())
}

/// @ai:intent Format a real in shortest round-trip form, keeping a decimal point
/// @ai:effects pure
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else {
        format!("{:?}", value)
    }
}

/// @ai:intent Header of the analysis report
/// @ai:effects pure
pub fn analysis_header() -> Vec<String> {
    let mut header = vec!["Dataset".to_string()];

    for dimension in Dimension::ALL {
        let column = dimension.column();
        header.push(format!("Melhor {column}"));
        header.push(format!("Mediana {column}"));
        header.push(format!("Pior {column}"));
        header.push("Diff Melhor Mediana %".to_string());
        header.push("Diff Melhor Pior %".to_string());
    }

    header
}

/// @ai:intent One analysis row: dataset then max/med/min and diffs per dimension
/// @ai:effects pure
pub fn analysis_record(analysis: &DatasetAnalysis) -> Vec<Field> {
    let mut record = vec![Field::text(analysis.dataset.as_str())];

    for ranking in &analysis.rankings {
        for value in [ranking.max, ranking.med, ranking.min] {
            record.push(Field::category(ranking.dimension, value));
        }
        record.push(Field::real(ranking.diff_max_med));
        record.push(Field::real(ranking.diff_max_min));
    }

    record
}

/// @ai:intent Header of the best/worst report
/// @ai:effects pure
pub fn best_worst_header() -> Vec<String> {
    let mut header: Vec<String> = ["Dataset", "Tipo", "Resultado"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    header.extend(Dimension::ALL.iter().map(|d| d.column().to_string()));
    header.extend(
        [
            "Diferença % para pior",
            "Diferença % para 1º Quartil",
            "Diferença % para Mediana",
            "Diferença % para Média",
            "Diferença % para 3º Quartil",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    header
}

fn row_prefix(dataset: &str, label: &str, row: &ResultRow) -> Vec<Field> {
    let mut record = vec![Field::text(dataset), Field::text(label), Field::real(row.score)];
    record.extend(
        Dimension::ALL
            .iter()
            .map(|d| Field::category(*d, row.value(*d))),
    );
    record
}

/// @ai:intent Best and worst rows of one dataset
/// @ai:effects pure
pub fn best_worst_records(analysis: &DatasetAnalysis) -> [Vec<Field>; 2] {
    let cmp = analysis.best_comparison();

    let mut best = row_prefix(&analysis.dataset, BEST_LABEL, &analysis.best);
    best.extend(
        [
            cmp.vs_worst,
            cmp.vs_first_quartile,
            cmp.vs_median,
            cmp.vs_mean,
            cmp.vs_third_quartile,
        ]
        .into_iter()
        .map(Field::real),
    );

    let mut worst = row_prefix(&analysis.dataset, WORST_LABEL, &analysis.worst);
    worst.extend(std::iter::repeat(Field::text(NOT_COMPUTED)).take(5));

    [best, worst]
}

/// @ai:intent Streams analysis rows to disk as datasets are processed
pub struct AnalysisCsvWriter {
    writer: csv::Writer<File>,
}

impl AnalysisCsvWriter {
    /// @ai:intent Create the file and write its header
    /// @ai:effects fs:write
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = open_writer(path)?;
        write_fields(&mut writer, analysis_header().into_iter().map(Field::Text))?;
        Ok(Self { writer })
    }

    /// @ai:intent Append one dataset's analysis row
    /// @ai:effects fs:write
    pub fn write(&mut self, analysis: &DatasetAnalysis) -> Result<()> {
        write_fields(&mut self.writer, analysis_record(analysis))?;
        // keep rows already processed on disk if a later dataset fails
        self.writer.flush()?;
        Ok(())
    }

    /// @ai:intent Flush and close the file
    /// @ai:effects fs:write
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// @ai:intent Trait for best/worst report generation
pub trait BestWorstReporterTrait: Send + Sync {
    /// @ai:intent Write two rows per dataset
    fn generate(&self, analyses: &[DatasetAnalysis], output_path: &Path) -> Result<()>;
}

/// @ai:intent Writes the best/worst comparison report
pub struct BestWorstReporter;

impl BestWorstReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BestWorstReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BestWorstReporterTrait for BestWorstReporter {
    /// @ai:effects fs:write
    fn generate(&self, analyses: &[DatasetAnalysis], output_path: &Path) -> Result<()> {
        let mut writer = open_writer(output_path)?;
        write_fields(&mut writer, best_worst_header().into_iter().map(Field::Text))?;

        for analysis in analyses {
            for record in best_worst_records(analysis) {
                write_fields(&mut writer, record)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}
