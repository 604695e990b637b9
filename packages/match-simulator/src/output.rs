//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use referee::AppError;

use crate::metrics::{CsvSummaryRow, MatchMetrics};
use crate::types::OutputFormat;

pub struct OutputWriter {
    jsonl_writer: Option<Box<dyn Write + Send>>,
    csv_writer: csv::Writer<BufWriter<File>>,
    jsonl_path: Option<PathBuf>,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: &str, format: &OutputFormat, compress: bool) -> Result<Self, AppError> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let (jsonl_writer, jsonl_path) = match format {
            OutputFormat::Jsonl => {
                let filename = format!("simulation_{timestamp}.jsonl");
                if compress {
                    let gz_path = dir.join(format!("{filename}.gz"));
                    let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(GzEncoder::new(
                        File::create(&gz_path)?,
                        Compression::default(),
                    )));
                    (Some(writer), Some(gz_path))
                } else {
                    let path = dir.join(&filename);
                    let writer: Box<dyn Write + Send> =
                        Box::new(BufWriter::new(File::create(&path)?));
                    (Some(writer), Some(path))
                }
            }
            OutputFormat::Csv => (None, None),
        };

        // Always create CSV summary; the header comes from the first row
        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        let csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));

        Ok(Self {
            jsonl_writer,
            csv_writer,
            jsonl_path,
            csv_path,
        })
    }

    pub fn write_match(&mut self, metrics: &MatchMetrics) -> Result<(), AppError> {
        if let Some(ref mut writer) = self.jsonl_writer {
            let json = serde_json::to_string(metrics)?;
            writeln!(writer, "{json}")?;
        }

        let row: CsvSummaryRow = metrics.into();
        self.csv_writer
            .serialize(&row)
            .map_err(|e| AppError::internal(format!("csv write failed: {e}")))?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), AppError> {
        if let Some(ref mut writer) = self.jsonl_writer {
            writer.flush()?;
        }
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, &PathBuf) {
        (self.jsonl_path.as_ref(), &self.csv_path)
    }
}
