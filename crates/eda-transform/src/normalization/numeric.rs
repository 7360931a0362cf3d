//! Numeric column helpers.

use eda_model::Result;
use polars::prelude::{ChunkQuantile, Column, DataType, Float64Chunked};

/// Casts a column to Float64; NaN and non-numeric text become null.
pub fn float_values(column: &Column) -> Result<Float64Chunked> {
    let values = column.cast(&DataType::Float64)?;
    let present: Float64Chunked = values
        .f64()?
        .into_iter()
        .map(|value| value.filter(|v| !v.is_nan()))
        .collect();
    Ok(present.with_name(column.name().clone()))
}

/// Reads a column as `f64` values; nulls, NaN and non-numeric text become `None`.
pub fn column_f64_values(column: &Column) -> Result<Vec<Option<f64>>> {
    Ok(float_values(column)?.into_iter().collect())
}

/// Median over the present values of a column, `None` when there are none.
///
/// An even count averages the two middle values.
pub fn column_median_value(column: &Column) -> Result<Option<f64>> {
    Ok(float_values(column)?.median())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn column(values: &[Option<f64>]) -> Column {
        Column::from(Series::new("n".into(), values))
    }

    #[test]
    fn test_median_odd() {
        let values = column(&[Some(3.0), Some(1.0), Some(2.0)]);
        assert_eq!(column_median_value(&values).unwrap(), Some(2.0));
    }

    #[test]
    fn test_median_even() {
        let values = column(&[Some(4.0), Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(column_median_value(&values).unwrap(), Some(2.5));
    }

    #[test]
    fn test_median_skips_missing_and_nan() {
        let values = column(&[Some(1.0), Some(2.0), None, Some(f64::NAN), Some(3.0)]);
        assert_eq!(column_median_value(&values).unwrap(), Some(2.0));

        let empty = column(&[None, None]);
        assert_eq!(column_median_value(&empty).unwrap(), None);
    }

    #[test]
    fn test_float_values_keeps_name() {
        let values = column(&[Some(1.0)]);
        assert_eq!(float_values(&values).unwrap().name().as_str(), "n");
    }

    #[test]
    fn test_column_f64_values_from_integers() {
        let column = Column::from(Series::new("n".into(), vec![Some(1i64), None, Some(3)]));
        let values = column_f64_values(&column).unwrap();
        assert_eq!(values, vec![Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn test_column_f64_values_nan_is_missing() {
        let column = Column::from(Series::new("lat".into(), vec![36.1, f64::NAN]));
        let values = column_f64_values(&column).unwrap();
        assert_eq!(values, vec![Some(36.1), None]);
    }

    #[test]
    fn test_column_f64_values_from_text() {
        let column = Column::from(Series::new("n".into(), vec!["2", "two", ""]));
        let values = column_f64_values(&column).unwrap();
        assert_eq!(values, vec![Some(2.0), None, None]);
    }

    proptest::proptest! {
        #[test]
        fn median_lies_within_sample(values in proptest::collection::vec(-1.0e6f64..1.0e6, 1..64)) {
            let m = column_median_value(&Column::from(Series::new("n".into(), &values)))
                .unwrap()
                .unwrap();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            proptest::prop_assert!(min <= m && m <= max);
        }
    }
}
