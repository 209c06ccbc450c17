//! Positional column selection

use polars::prelude::*;

use super::error::ConvertError;

/// Number of leading columns copied into the output.
pub const REQUIRED_COLUMNS: usize = 3;

/// Keep the first `count` columns by position, with every row in its original order.
///
/// Columns are taken as they stand: empty or unnamed columns are not skipped.
/// A dataset narrower than `count` is `ConvertError::InsufficientColumns`.
pub fn select_leading_columns(df: &DataFrame, count: usize) -> Result<DataFrame, ConvertError> {
    if df.width() < count {
        return Err(ConvertError::InsufficientColumns {
            found: df.width(),
            required: count,
        });
    }

    // Column names in a DataFrame are unique, so dropping the trailing names
    // leaves exactly the leading positions.
    let trailing: Vec<String> = df
        .get_column_names()
        .iter()
        .skip(count)
        .map(|s| s.to_string())
        .collect();

    Ok(df.drop_many(trailing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_by_position_not_name() {
        let df = df! {
            "zeta" => [1i64, 2, 3],
            "alpha" => ["a", "b", "c"],
            "mid" => [1.5f64, 2.5, 3.5],
            "extra" => [true, false, true],
        }
        .unwrap();

        let selected = select_leading_columns(&df, REQUIRED_COLUMNS).unwrap();

        assert_eq!(selected.get_column_names(), &["zeta", "alpha", "mid"]);
        assert_eq!(selected.height(), 3);
        assert!(selected.equals(&df.select(["zeta", "alpha", "mid"]).unwrap()));
    }

    #[test]
    fn test_keeps_empty_columns_in_place() {
        let df = df! {
            "a" => [1i64, 2],
            "Unnamed: 1" => [None::<f64>, None],
            "c" => ["x", "y"],
        }
        .unwrap();

        let selected = select_leading_columns(&df, 3).unwrap();

        assert_eq!(selected.get_column_names(), &["a", "Unnamed: 1", "c"]);
        assert_eq!(selected.column("Unnamed: 1").unwrap().null_count(), 2);
    }

    #[test]
    fn test_exact_width_is_unchanged() {
        let df = df! {
            "a" => [1i64],
            "b" => [2i64],
            "c" => [3i64],
        }
        .unwrap();

        let selected = select_leading_columns(&df, 3).unwrap();

        assert!(selected.equals(&df));
    }

    #[test]
    fn test_too_few_columns_is_insufficient() {
        let df = df! {
            "a" => [1i64],
            "b" => [2i64],
        }
        .unwrap();

        let err = select_leading_columns(&df, 3).unwrap_err();

        assert!(matches!(
            err,
            ConvertError::InsufficientColumns {
                found: 2,
                required: 3
            }
        ));
    }
}
