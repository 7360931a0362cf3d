//! Descriptive statistics over a sample, computed by Polars.

use eda_model::Result;
use polars::prelude::{ChunkAgg, ChunkQuantile, ChunkVar, Float64Chunked, NamedFrom, QuantileMethod};
use serde::Serialize;

/// Count, moments and linear-interpolated quartiles of the present values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distribution {
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1); absent below two values.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

impl Distribution {
    /// Summarizes a sample; `None` entries are ignored.
    pub fn from_values(values: &[Option<f64>]) -> Result<Self> {
        Self::from_chunked(&Float64Chunked::new("values".into(), values))
    }

    pub fn from_chunked(values: &Float64Chunked) -> Result<Self> {
        let count = values.len() - values.null_count();
        Ok(Self {
            count,
            mean: values.mean(),
            std: values.std(1).filter(|v| count > 1 && v.is_finite()),
            min: values.min(),
            q1: values.quantile(0.25, QuantileMethod::Linear)?,
            median: values.median(),
            q3: values.quantile(0.75, QuantileMethod::Linear)?,
            max: values.max(),
        })
    }
}
