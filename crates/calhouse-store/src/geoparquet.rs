//! GeoParquet reading operations.

use std::fs::File;
use std::path::Path;

use arrow_array::RecordBatch;
use calhouse_core::error::{CalhouseError, Result};
use geo::Geometry;
use geo_traits::to_geo::ToGeoGeometry;
use geoarrow_array::array::from_arrow_array;
use geoarrow_array::{downcast_geoarrow_array, GeoArrowArray, GeoArrowArrayAccessor};
use geoarrow_schema::error::GeoArrowResult;
use geoparquet::reader::{GeoParquetReaderBuilder, GeoParquetRecordBatchReader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::table::ParquetTable;

/// A GeoParquet file: attribute columns plus the decoded primary geometry column
pub struct GeoTable {
    pub table: ParquetTable,
    pub geometry_column: String,
    /// One entry per row, `None` where the geometry is null or empty
    pub geometries: Vec<Option<Geometry<f64>>>,
}

/// Read a GeoParquet file, parsing its primary geometry column to `geo` types.
///
/// Both WKB and native GeoArrow encodings are accepted. Plain parquet files
/// without `geo` metadata are rejected.
pub fn read_geoparquet(path: &Path) -> Result<GeoTable> {
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

    let geo_meta = builder
        .geoparquet_metadata()
        .ok_or_else(|| CalhouseError::NotGeoParquet { path: path.to_path_buf() })?
        .map_err(|e| read_error(format!("invalid 'geo' metadata: {}", e)))?;
    let geometry_column = geo_meta.primary_column.clone();

    let schema = builder
        .geoarrow_schema(&geo_meta, true, Default::default())
        .map_err(|e| read_error(e.to_string()))?;
    let index = schema.index_of(&geometry_column).map_err(|_| CalhouseError::MissingColumn {
        column: geometry_column.clone(),
        path: path.to_path_buf(),
    })?;

    let parquet_reader = builder
        .with_batch_size(64 * 1024)
        .build()
        .map_err(|e| read_error(e.to_string()))?;
    let batches = GeoParquetRecordBatchReader::try_new(parquet_reader, schema.clone())
        .map_err(|e| read_error(e.to_string()))?
        .collect::<std::result::Result<Vec<RecordBatch>, _>>()
        .map_err(|e| read_error(e.to_string()))?;

    let field = schema.field(index);
    let mut geometries = Vec::new();
    for batch in &batches {
        let column = from_arrow_array(batch.column(index).as_ref(), field)
            .map_err(|e| read_error(e.to_string()))?;
        let column = column.as_ref();
        let parsed = downcast_geoarrow_array!(column, to_geo_geometries)
            .map_err(|e| CalhouseError::InvalidGeometry { reason: e.to_string() })?;
        geometries.extend(parsed);
    }

    tracing::debug!(
        path = %path.display(),
        column = %geometry_column,
        geometry_type = ?field.data_type(),
        rows = geometries.len(),
        "Read GeoParquet file"
    );

    Ok(GeoTable {
        table: ParquetTable::from_batches(path, schema, batches),
        geometry_column,
        geometries,
    })
}

fn to_geo_geometries<'a>(
    array: &'a impl GeoArrowArrayAccessor<'a>,
) -> GeoArrowResult<Vec<Option<Geometry<f64>>>> {
    array
        .iter()
        .map(|item| Ok(item.transpose()?.and_then(|geometry| geometry.try_to_geometry())))
        .collect()
}
