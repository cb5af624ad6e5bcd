// src/api/types.rs — Wire types for the Chemical Equipment Visualizer API

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Equipment-type -> count mapping that preserves the server's JSON key
/// order. Charts iterate it as-is; no sorting is applied anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeDistribution(Vec<(String, u64)>);

impl TypeDistribution {
    pub fn from_pairs(pairs: Vec<(String, u64)>) -> Self {
        Self(pairs)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts; equals the row count of the dataset it describes.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, count)| count).sum()
    }
}

impl<'de> Deserialize<'de> for TypeDistribution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor;

        impl<'de> Visitor<'de> for OrderedMapVisitor {
            type Value = TypeDistribution;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of equipment type to count")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, count)) = map.next_entry::<String, u64>()? {
                    pairs.push((name, count));
                }
                Ok(TypeDistribution(pairs))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor)
    }
}

impl Serialize for TypeDistribution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// One row of the uploaded CSV. Wire keys are the CSV headers themselves
/// (the backend serializes rows with Title Case keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRow {
    #[serde(rename = "Equipment Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub equipment_type: String,
    #[serde(rename = "Flowrate")]
    pub flowrate: f64,
    #[serde(rename = "Pressure")]
    pub pressure: f64,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// Server-computed statistics plus full row data for one uploaded dataset.
///
/// Every field is individually defaulted: history entries are Summary-shaped
/// but a degraded payload (or a light `{id, upload_date}` entry) must still
/// deserialize rather than fail the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub type_distribution: TypeDistribution,
    #[serde(default)]
    pub avg_flowrate: Option<f64>,
    #[serde(default)]
    pub avg_pressure: Option<f64>,
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    #[serde(default)]
    pub data: Vec<EquipmentRow>,
}

impl Summary {
    /// Deterministic local name for the downloaded report: the uploaded
    /// filename with its .csv extension stripped, falling back to the
    /// dataset id.
    pub fn report_filename(&self) -> String {
        let stem = match &self.filename {
            Some(name) => name
                .strip_suffix(".csv")
                .or_else(|| name.strip_suffix(".CSV"))
                .unwrap_or(name)
                .to_string(),
            None => match self.id {
                Some(id) => format!("dataset_{id}"),
                None => "dataset".to_string(),
            },
        };
        format!("report_{stem}.pdf")
    }
}

/// Response of a successful upload: `{message, id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    pub id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of a successful registration (the created user, password
/// write-only server-side).
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A file selected for upload, before the CSV gate.
#[derive(Debug, Clone)]
pub struct DatasetFile {
    pub filename: String,
    /// Declared MIME type, when known.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DatasetFile {
    /// Client-side file-type gate: accepted only when the filename ends in
    /// .csv (case-insensitive) or the declared type is text/csv. Rejected
    /// files never reach the network.
    pub fn is_csv(&self) -> bool {
        self.filename.to_ascii_lowercase().ends_with(".csv")
            || self.content_type.as_deref() == Some("text/csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_distribution_preserves_insertion_order() {
        let dist: TypeDistribution =
            serde_json::from_str(r#"{"Pump": 3, "Valve": 2, "Compressor": 1}"#).unwrap();
        let pairs: Vec<_> = dist.iter().collect();
        assert_eq!(
            pairs,
            vec![("Pump", 3), ("Valve", 2), ("Compressor", 1)]
        );
        assert_eq!(dist.total(), 6);
    }

    #[test]
    fn type_distribution_serializes_in_order() {
        let dist = TypeDistribution::from_pairs(vec![("Valve".into(), 2), ("Pump".into(), 3)]);
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"Valve":2,"Pump":3}"#);
    }

    #[test]
    fn equipment_row_uses_csv_header_keys() {
        let row: EquipmentRow = serde_json::from_str(
            r#"{"Equipment Name": "P-101", "Type": "Pump", "Flowrate": 12.5, "Pressure": 3.1, "Temperature": 80.0}"#,
        )
        .unwrap();
        assert_eq!(row.name, "P-101");
        assert_eq!(row.equipment_type, "Pump");
        assert_eq!(row.flowrate, 12.5);
    }

    #[test]
    fn light_history_entry_still_deserializes_as_summary() {
        let summary: Summary =
            serde_json::from_str(r#"{"id": 7, "upload_date": "2026-08-30T10:00:00Z"}"#).unwrap();
        assert_eq!(summary.id, Some(7));
        assert!(summary.filename.is_none());
        assert!(summary.data.is_empty());
        assert!(summary.type_distribution.is_empty());
    }

    #[test]
    fn full_summary_deserializes() {
        let summary: Summary = serde_json::from_str(
            r#"{
                "id": 3,
                "filename": "plant_a.csv",
                "upload_date": "2026-08-30T10:00:00.123456Z",
                "avg_flowrate": 10.0,
                "avg_pressure": 2.0,
                "avg_temperature": 75.5,
                "type_distribution": {"Pump": 1},
                "data": [{"Equipment Name": "P-101", "Type": "Pump", "Flowrate": 10.0, "Pressure": 2.0, "Temperature": 75.5}]
            }"#,
        )
        .unwrap();
        assert_eq!(summary.filename.as_deref(), Some("plant_a.csv"));
        assert_eq!(summary.data.len(), 1);
        assert_eq!(summary.type_distribution.total() as usize, summary.data.len());
    }

    #[test]
    fn report_filename_strips_csv_extension() {
        let summary = Summary {
            id: Some(3),
            filename: Some("plant_a.csv".into()),
            ..Summary::default()
        };
        assert_eq!(summary.report_filename(), "report_plant_a.pdf");
    }

    #[test]
    fn report_filename_falls_back_to_id() {
        let summary = Summary {
            id: Some(9),
            ..Summary::default()
        };
        assert_eq!(summary.report_filename(), "report_dataset_9.pdf");
    }

    #[test]
    fn csv_gate_accepts_by_extension_or_mime() {
        let by_ext = DatasetFile {
            filename: "DATA.CSV".into(),
            content_type: None,
            bytes: vec![],
        };
        assert!(by_ext.is_csv());

        let by_mime = DatasetFile {
            filename: "export".into(),
            content_type: Some("text/csv".into()),
            bytes: vec![],
        };
        assert!(by_mime.is_csv());

        let rejected = DatasetFile {
            filename: "report.txt".into(),
            content_type: Some("text/plain".into()),
            bytes: vec![],
        };
        assert!(!rejected.is_csv());
    }
}
