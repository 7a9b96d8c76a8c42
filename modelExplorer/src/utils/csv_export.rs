use std::fs::{self, File};
use std::path::{Path, PathBuf};
use chrono::Local;
use serde::Serialize;
use tracing::info;

use crate::config::parameter_catalog::ParameterKey;
use crate::core::evaluation::Evaluation;
use crate::core::sweep::SweepPoint;
use crate::models::curves::CurveKind;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug)]
pub enum ExportError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvError(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::JsonError(err)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "IO error: {}", e),
            ExportError::CsvError(e) => write!(f, "CSV error: {}", e),
            ExportError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

#[derive(Serialize)]
struct CurveRow {
    #[serde(rename = "F")]
    franchise_ratio: f64,
    #[serde(rename = "P_base")]
    p_base: f64,
    #[serde(rename = "P_endh")]
    p_endh: f64,
    #[serde(rename = "P_dup")]
    p_dup: f64,
}

#[derive(Serialize)]
struct SweepRow {
    parameter: ParameterKey,
    value: f64,
    curve: CurveKind,
    at_zero: f64,
    at_one: f64,
    peak_value: f64,
    peak_ratio: f64,
    break_even_count: usize,
}

/// Writes evaluation results into a timestamped directory under `output_dir`.
pub struct CurveExporter {
    output_dir: PathBuf,
    timestamp: String,
    verbose_logging: bool,
}

impl CurveExporter {
    pub fn new(output_dir: impl AsRef<Path>, verbose_logging: bool) -> Result<Self, ExportError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let full_path = output_dir.as_ref().join(&timestamp);
        fs::create_dir_all(&full_path)?;

        Ok(Self {
            output_dir: full_path,
            timestamp,
            verbose_logging,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Curves, parameters and display bounds as CSV files.
    pub fn export_evaluation(&self, evaluation: &Evaluation) -> Result<(), ExportError> {
        let _timing = logging::start_timing("export_evaluation",
            OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

        self.export_curves(evaluation)?;
        self.export_parameters(evaluation)?;
        self.export_bounds(evaluation)?;

        if self.verbose_logging {
            info!(dir = %self.output_dir.display(), "CSV export completed");
        }
        Ok(())
    }

    pub fn export_json(&self, evaluation: &Evaluation) -> Result<PathBuf, ExportError> {
        let _timing = logging::start_timing("export_json",
            OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

        let path = self.output_dir.join("evaluation.json");
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, evaluation)?;

        if self.verbose_logging {
            info!(path = %path.display(), "JSON export completed");
        }
        Ok(path)
    }

    pub fn export_sweep(&self, points: &[SweepPoint]) -> Result<PathBuf, ExportError> {
        let _timing = logging::start_timing("export_sweep",
            OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

        let path = self.output_dir.join("sweep.csv");
        let mut writer = csv::Writer::from_path(&path)?;
        for point in points {
            for curve in &point.summary.curves {
                writer.serialize(SweepRow {
                    parameter: point.key,
                    value: point.value,
                    curve: curve.kind,
                    at_zero: curve.at_zero,
                    at_one: curve.at_one,
                    peak_value: curve.peak_value,
                    peak_ratio: curve.peak_ratio,
                    break_even_count: curve.break_even.len(),
                })?;
            }
        }
        writer.flush()?;

        if self.verbose_logging {
            info!(path = %path.display(), points = points.len(), "sweep export completed");
        }
        Ok(path)
    }

    fn export_curves(&self, evaluation: &Evaluation) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(self.output_dir.join("curves.csv"))?;
        let curves = &evaluation.curves;
        for (i, &f) in evaluation.grid.iter().enumerate() {
            writer.serialize(CurveRow {
                franchise_ratio: f,
                p_base: curves.p_base[i],
                p_endh: curves.p_endh[i],
                p_dup: curves.p_dup[i],
            })?;
        }
        writer.flush()?;
        Ok(())
    }

    fn export_parameters(&self, evaluation: &Evaluation) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(self.output_dir.join("parameters.csv"))?;
        writer.write_record(["parameter", "value"])?;
        for key in ParameterKey::ALL {
            writer.write_record([key.as_str().to_string(), evaluation.params.get(key).to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }

    fn export_bounds(&self, evaluation: &Evaluation) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(self.output_dir.join("bounds.csv"))?;
        writer.serialize(evaluation.bounds)?;
        writer.flush()?;
        Ok(())
    }
}
