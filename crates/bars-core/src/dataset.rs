// File: crates/bars-core/src/dataset.rs
// Summary: Dataset model (category labels plus named series aligned to them) and loaders.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DatasetError, LayoutError, LayoutResult};

/// One named row of values, positionally aligned with `ChartDataset::labels`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    #[serde(default)]
    pub series: Vec<Series>,
}

impl ChartDataset {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Check the shape contract: every series has exactly one value per label,
    /// and every value is finite and non-negative.
    pub fn validate(&self) -> LayoutResult<()> {
        let expected = self.labels.len();
        for s in &self.series {
            if s.values.len() != expected {
                return Err(LayoutError::SeriesLengthMismatch {
                    series: s.name.clone(),
                    expected,
                    actual: s.values.len(),
                });
            }
            if let Some((index, &value)) = s
                .values
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite() || **v < 0.0)
            {
                return Err(LayoutError::InvalidValue {
                    series: s.name.clone(),
                    index,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Largest value across all series; 0.0 when there are no values at all.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let ds: Self = serde_json::from_str(json)?;
        ds.validate()?;
        Ok(ds)
    }

    /// Read CSV with a header row `label,<series>,<series>...`; one record per label.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.len() < 2 {
            return Err(DatasetError::MissingHeader);
        }
        let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        let mut labels = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            labels.push(rec.get(0).unwrap_or_default().to_string());
            for (col, name) in names.iter().enumerate() {
                let raw = rec.get(col + 1).unwrap_or_default();
                let v: f64 = raw.parse().map_err(|_| DatasetError::BadNumber {
                    row: row + 1,
                    column: name.clone(),
                    raw: raw.to_string(),
                })?;
                columns[col].push(v);
            }
        }

        let ds = Self {
            labels,
            series: names
                .into_iter()
                .zip(columns)
                .map(|(name, values)| Series { name, values })
                .collect(),
        };
        ds.validate()?;
        Ok(ds)
    }

    /// Load from a `.json` or `.csv` file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let ds = match ext.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            other => return Err(DatasetError::UnsupportedFormat(other.to_string())),
        };
        debug!(
            path = %path.display(),
            labels = ds.label_count(),
            series = ds.series_count(),
            "loaded dataset"
        );
        Ok(ds)
    }

    /// Four labels and three series; the chart drawn when no dataset is given.
    pub fn sample() -> Self {
        Self::new(["A", "B", "C", "D"])
            .with_series(Series::new("data", vec![123.0, 456.0, 789.0, 1111.0]))
            .with_series(Series::new("another data", vec![234.0, 567.0, 891.0, 1024.0]))
            .with_series(Series::new("and more", vec![567.0, 678.0, 789.0, 890.0]))
    }
}
