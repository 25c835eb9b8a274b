//! Unit conversions
//!
//! Adds metric columns next to imperial source columns. Source columns are
//! never modified and tables without them pass through unchanged.

use log::{debug, warn};

use crate::constants::{INCHES_TO_METERS, POUNDS_TO_KILOGRAMS};
use crate::table::{Cell, RecordTable, Value};

/// A derived column computed as `source * factor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConversion {
    pub source: &'static str,
    pub target: &'static str,
    pub factor: f64,
}

/// Conversions applied by [`transform`], in order
pub const UNIT_CONVERSIONS: [UnitConversion; 2] = [
    UnitConversion {
        source: "height",
        target: "height_m",
        factor: INCHES_TO_METERS,
    },
    UnitConversion {
        source: "weight",
        target: "weight_kg",
        factor: POUNDS_TO_KILOGRAMS,
    },
];

impl UnitConversion {
    /// Computes the derived cells for every row, or `None` if the source column is absent
    ///
    /// Missing or non-numeric source cells give missing derived cells.
    pub fn derive(&self, table: &RecordTable) -> Option<Vec<Cell>> {
        let values = table.column(self.source)?;
        let mut skipped = 0usize;

        let derived: Vec<Cell> = values
            .map(|cell| match cell.as_ref().map(Value::as_f64) {
                Some(Some(number)) => Some(Value::Float(number * self.factor)),
                Some(None) => {
                    skipped += 1;
                    None
                }
                None => None,
            })
            .collect();

        if skipped > 0 {
            warn!(
                "{skipped} value(s) in column '{}' are not numeric; '{}' is missing for those rows",
                self.source, self.target
            );
        }

        Some(derived)
    }
}

/// Applies every unit conversion whose source column is present
///
/// A derived column that already exists is recomputed in place, so running
/// this twice gives the same table as running it once.
pub fn transform(mut table: RecordTable) -> RecordTable {
    for conversion in &UNIT_CONVERSIONS {
        match conversion.derive(&table) {
            Some(values) => {
                table.set_column(conversion.target, values);
                debug!(
                    "Derived '{}' from '{}' (x {})",
                    conversion.target, conversion.source, conversion.factor
                );
            }
            None => debug!(
                "Column '{}' not present, skipping '{}'",
                conversion.source, conversion.target
            ),
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float_at(table: &RecordTable, row: usize, column: &str) -> f64 {
        match table.value(row, column) {
            Some(Value::Float(value)) => *value,
            other => panic!("expected a float in {column}[{row}], got {other:?}"),
        }
    }

    #[test]
    fn test_height_and_weight_conversions() {
        let mut table = RecordTable::new();
        table.push_record([
            ("height", Some(Value::Integer(10))),
            ("weight", Some(Value::Integer(2))),
        ]);

        let transformed = transform(table);

        assert_eq!(
            transformed.columns(),
            ["height", "weight", "height_m", "weight_kg"]
        );
        assert!((float_at(&transformed, 0, "height_m") - 0.254).abs() < 1e-12);
        assert!((float_at(&transformed, 0, "weight_kg") - 0.907184).abs() < 1e-12);
        assert_eq!(transformed.value(0, "height"), Some(&Value::Integer(10)));
    }

    #[test]
    fn test_no_trigger_columns_is_a_no_op() {
        let mut table = RecordTable::new();
        table.push_record([("name", Some(Value::from("ann"))), ("age", Some(Value::Integer(30)))]);

        let transformed = transform(table.clone());
        assert_eq!(transformed, table);
    }

    #[test]
    fn test_only_present_columns_are_derived() {
        let mut table = RecordTable::new();
        table.push_record([("weight", Some(Value::Float(100.0)))]);

        let transformed = transform(table);
        assert_eq!(transformed.columns(), ["weight", "weight_kg"]);
    }

    #[test]
    fn test_missing_and_text_sources() {
        let mut table = RecordTable::new();
        table.push_record([("height", Some(Value::Text("20".into())))]);
        table.push_record([("height", None)]);
        table.push_record([("height", Some(Value::Text("tall".into())))]);

        let transformed = transform(table);

        assert!((float_at(&transformed, 0, "height_m") - 0.508).abs() < 1e-12);
        assert_eq!(transformed.value(1, "height_m"), None);
        assert_eq!(transformed.value(2, "height_m"), None);
    }

    #[test]
    fn test_transform_is_repeatable() {
        let mut table = RecordTable::new();
        table.push_record([("height", Some(Value::Integer(10)))]);

        let once = transform(table);
        let twice = transform(once.clone());
        assert_eq!(once, twice);
    }
}
