//! Parquet reading operations.

use std::fs::File;
use std::path::{Path, PathBuf};

use arrow_array::cast::AsArray;
use arrow_array::types::Float64Type;
use arrow_array::{ArrayRef, RecordBatch};
use arrow_schema::{DataType, SchemaRef};
use calhouse_core::error::{CalhouseError, Result};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

/// A parquet file read fully into memory
pub struct ParquetTable {
    path: PathBuf,
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl ParquetTable {
    /// Read every record batch of the file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CalhouseError::DatasetNotFound { path: path.to_path_buf() });
        }

        let read_error = |reason: String| CalhouseError::DatasetRead {
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path)?;
        let builder =
            ParquetRecordBatchReaderBuilder::try_new(file).map_err(|e| read_error(e.to_string()))?;

        let schema = builder.schema().clone();

        let reader = builder
            .with_batch_size(64 * 1024)
            .build()
            .map_err(|e| read_error(e.to_string()))?;
        let batches = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| read_error(e.to_string()))?;

        let table = Self::from_batches(path, schema, batches);
        tracing::debug!(path = %path.display(), rows = table.num_rows(), "Read parquet file");
        Ok(table)
    }

    /// Wrap batches that were already read from `path`
    pub fn from_batches(path: &Path, schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        Self {
            path: path.to_path_buf(),
            schema,
            batches,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.schema.index_of(name).is_ok()
    }

    /// Column `name` cast to `to_type`, one array per record batch
    fn cast_column(&self, name: &str, to_type: &DataType) -> Result<Vec<ArrayRef>> {
        if !self.has_column(name) {
            return Err(CalhouseError::MissingColumn {
                column: name.to_string(),
                path: self.path.clone(),
            });
        }

        self.batches
            .iter()
            .map(|batch| {
                let column = batch.column_by_name(name).ok_or_else(|| CalhouseError::MissingColumn {
                    column: name.to_string(),
                    path: self.path.clone(),
                })?;
                arrow_cast::cast::cast(column.as_ref(), to_type).map_err(|e| {
                    CalhouseError::DatasetRead {
                        path: self.path.clone(),
                        reason: format!("column '{}' cannot be read as {}: {}", name, to_type, e),
                    }
                })
            })
            .collect()
    }

    /// Numeric column, nulls kept
    pub fn f64_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let arrays = self.cast_column(name, &DataType::Float64)?;
        Ok(arrays.iter().flat_map(|a| a.as_primitive::<Float64Type>().iter()).collect())
    }

    /// Text column, nulls kept; numeric and dictionary columns are rendered as text
    pub fn string_column(&self, name: &str) -> Result<Vec<Option<String>>> {
        let arrays = self.cast_column(name, &DataType::Utf8)?;
        Ok(arrays
            .iter()
            .flat_map(|a| a.as_string::<i32>().iter().map(|v| v.map(str::to_string)))
            .collect())
    }

    /// Numeric column that must not contain nulls
    pub fn required_f64(&self, name: &str) -> Result<Vec<f64>> {
        require(name, self.f64_column(name)?)
    }

    /// Text column that must not contain nulls
    pub fn required_string(&self, name: &str) -> Result<Vec<String>> {
        require(name, self.string_column(name)?)
    }

    /// Numeric column that may be absent from the file
    pub fn optional_f64(&self, name: &str) -> Result<Vec<Option<f64>>> {
        if self.has_column(name) {
            self.f64_column(name)
        } else {
            Ok(vec![None; self.num_rows()])
        }
    }

    /// Text column that may be absent from the file
    pub fn optional_string(&self, name: &str) -> Result<Vec<Option<String>>> {
        if self.has_column(name) {
            self.string_column(name)
        } else {
            Ok(vec![None; self.num_rows()])
        }
    }
}

fn require<T>(column: &str, values: Vec<Option<T>>) -> Result<Vec<T>> {
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| CalhouseError::MissingValue {
                column: column.to_string(),
                row,
            })
        })
        .collect()
}
