use super::lenient;
use serde::{Deserialize, Serialize};

/// A vending machine as returned by `GET /api/v1/VendingMachines`.
///
/// `next_maintenance` stays a raw string: the calendar engine parses it and
/// reports the record instead of failing the whole snapshot load. Descriptive
/// columns are read leniently; only a non-numeric `MachineID` rejects a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendingMachine {
    #[serde(rename = "MachineID", alias = "machineId", alias = "id", default)]
    pub id: Option<i64>,

    #[serde(rename = "Model", alias = "model", default, with = "lenient::text_option")]
    pub model: Option<String>,

    #[serde(rename = "Location", alias = "location", default, with = "lenient::text_option")]
    pub location: Option<String>,

    #[serde(
        rename = "DateOfNextFixing",
        alias = "dateOfNextFixing",
        alias = "nextFixingDate",
        default,
        with = "lenient::text_option"
    )]
    pub next_maintenance: Option<String>,

    #[serde(rename = "SerialNumber", default, with = "lenient::text_option")]
    pub serial_number: Option<String>,

    #[serde(rename = "InventoryNumber", default, with = "lenient::text_option")]
    pub inventory_number: Option<String>,

    #[serde(rename = "Manufacturer", default, with = "lenient::text_option")]
    pub manufacturer: Option<String>,

    #[serde(rename = "StatusName", default, with = "lenient::text_option")]
    pub status: Option<String>,

    #[serde(rename = "PaymentType", default, with = "lenient::text_option")]
    pub payment_type: Option<String>,

    #[serde(rename = "FullIncome", default, with = "lenient::number_option")]
    pub full_income: Option<f64>,

    #[serde(rename = "CountryName", default, with = "lenient::text_option")]
    pub country: Option<String>,
}

impl VendingMachine {
    pub fn new(id: i64, model: &str, location: &str, next_maintenance: Option<&str>) -> Self {
        Self {
            id: Some(id),
            model: Some(model.to_string()),
            location: Some(location.to_string()),
            next_maintenance: next_maintenance.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn display_name(&self) -> String {
        match (non_blank(&self.model), self.id) {
            (Some(m), _) => m.to_string(),
            (None, Some(id)) => placeholder_name(id),
            (None, None) => "Unknown machine".to_string(),
        }
    }

    pub fn location_str(&self) -> &str {
        non_blank(&self.location).unwrap_or("location not specified")
    }
}

/// Label used when a maintenance record points at a machine we do not know.
pub fn placeholder_name(id: i64) -> String {
    format!("Machine #{id}")
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
