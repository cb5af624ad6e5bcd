// src/core/projections.rs — Pure transforms from a Summary to
// presentation-ready shapes. No state, no suspension; absent or malformed
// input yields an empty projection.

use std::cmp::Ordering;

use crate::api::{EquipmentRow, Summary};

/// Chart-ready series for the equipment-type distribution. Label order is
/// the insertion order of the server's mapping; no sorting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistributionSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

pub const AVERAGE_LABELS: [&str; 3] = ["Flowrate", "Pressure", "Temperature"];

/// Fixed 3-slot series for the parameter averages, always in
/// flowrate/pressure/temperature order. Slots are absent when the server
/// omitted the value.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragesSeries {
    pub values: [Option<f64>; 3],
}

pub fn distribution_series(summary: Option<&Summary>) -> DistributionSeries {
    let Some(summary) = summary else {
        return DistributionSeries::default();
    };
    let mut series = DistributionSeries::default();
    for (name, count) in summary.type_distribution.iter() {
        series.labels.push(name.to_string());
        series.values.push(count);
    }
    series
}

pub fn averages_series(summary: Option<&Summary>) -> AveragesSeries {
    match summary {
        Some(s) => AveragesSeries {
            values: [s.avg_flowrate, s.avg_pressure, s.avg_temperature],
        },
        None => AveragesSeries {
            values: [None, None, None],
        },
    }
}

/// The row data unchanged; sorting and filtering are the table's concern.
pub fn table_rows(summary: Option<&Summary>) -> &[EquipmentRow] {
    summary.map(|s| s.data.as_slice()).unwrap_or(&[])
}

/// Declarative per-column comparators: lexicographic for name/type, numeric
/// ascending for the parameter columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Type,
    Flowrate,
    Pressure,
    Temperature,
}

impl Column {
    pub fn compare(&self, a: &EquipmentRow, b: &EquipmentRow) -> Ordering {
        match self {
            Column::Name => a.name.cmp(&b.name),
            Column::Type => a.equipment_type.cmp(&b.equipment_type),
            Column::Flowrate => a
                .flowrate
                .partial_cmp(&b.flowrate)
                .unwrap_or(Ordering::Equal),
            Column::Pressure => a
                .pressure
                .partial_cmp(&b.pressure)
                .unwrap_or(Ordering::Equal),
            Column::Temperature => a
                .temperature
                .partial_cmp(&b.temperature)
                .unwrap_or(Ordering::Equal),
        }
    }
}

/// Type-column filter: prefix match, as the table defines it.
pub fn type_filter(row: &EquipmentRow, value: &str) -> bool {
    row.equipment_type.starts_with(value)
}

pub fn sorted_rows(rows: &[EquipmentRow], column: Column) -> Vec<EquipmentRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| column.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TypeDistribution;
    use pretty_assertions::assert_eq;

    fn row(name: &str, equipment_type: &str, flowrate: f64) -> EquipmentRow {
        EquipmentRow {
            name: name.into(),
            equipment_type: equipment_type.into(),
            flowrate,
            pressure: flowrate * 2.0,
            temperature: flowrate * 10.0,
        }
    }

    #[test]
    fn distribution_preserves_insertion_order() {
        let summary = Summary {
            type_distribution: TypeDistribution::from_pairs(vec![
                ("Pump".into(), 3),
                ("Valve".into(), 2),
            ]),
            ..Summary::default()
        };
        let series = distribution_series(Some(&summary));
        assert_eq!(series.labels, vec!["Pump", "Valve"]);
        assert_eq!(series.values, vec![3, 2]);
    }

    #[test]
    fn distribution_of_absent_summary_is_empty() {
        assert_eq!(distribution_series(None), DistributionSeries::default());
    }

    #[test]
    fn averages_are_three_slots_in_fixed_order() {
        let summary = Summary {
            avg_flowrate: Some(12.5),
            avg_pressure: None,
            avg_temperature: Some(80.0),
            ..Summary::default()
        };
        let series = averages_series(Some(&summary));
        assert_eq!(series.values.len(), 3);
        assert_eq!(series.values, [Some(12.5), None, Some(80.0)]);

        let empty = averages_series(None);
        assert_eq!(empty.values, [None, None, None]);
    }

    #[test]
    fn table_rows_pass_through_unchanged() {
        let rows = vec![row("P-101", "Pump", 10.0), row("V-201", "Valve", 2.0)];
        let summary = Summary {
            data: rows.clone(),
            ..Summary::default()
        };
        assert_eq!(table_rows(Some(&summary)), rows.as_slice());
        assert!(table_rows(None).is_empty());
    }

    #[test]
    fn name_and_type_sort_lexicographically() {
        let rows = vec![
            row("V-201", "Valve", 2.0),
            row("C-301", "Compressor", 5.0),
            row("P-101", "Pump", 10.0),
        ];
        let by_name = sorted_rows(&rows, Column::Name);
        let names: Vec<_> = by_name.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C-301", "P-101", "V-201"]);

        let by_type = sorted_rows(&rows, Column::Type);
        let types: Vec<_> = by_type.iter().map(|r| r.equipment_type.as_str()).collect();
        assert_eq!(types, vec!["Compressor", "Pump", "Valve"]);
    }

    #[test]
    fn numeric_columns_sort_ascending() {
        let rows = vec![
            row("P-101", "Pump", 10.0),
            row("V-201", "Valve", 2.0),
            row("C-301", "Compressor", 5.0),
        ];
        let by_flowrate = sorted_rows(&rows, Column::Flowrate);
        let flowrates: Vec<_> = by_flowrate.iter().map(|r| r.flowrate).collect();
        assert_eq!(flowrates, vec![2.0, 5.0, 10.0]);
    }

    #[test]
    fn type_filter_matches_prefix_only() {
        let pump = row("P-101", "Pump", 10.0);
        assert!(type_filter(&pump, "Pump"));
        assert!(type_filter(&pump, "Pu"));
        assert!(!type_filter(&pump, "ump"));
    }
}
