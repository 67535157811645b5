//! Clinical encounter record.

use crate::Record;
use medrec_types::Money;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single clinical visit for a patient.
///
/// `patient_id` is taken as given; whether the patient exists is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub patient_id: i64,
    #[serde(default)]
    pub notes: String,
    #[schema(example = "N3W 3C3")]
    pub visit_code: String,
    pub provider: String,
    #[schema(example = "123.456.789-00")]
    pub billing_code: String,
    /// ICD-10 diagnosis code.
    #[schema(example = "Z99")]
    pub icd10: String,
    #[schema(value_type = String, example = "150.30")]
    pub total_cost: Money,
    #[schema(value_type = String, example = "10.10")]
    pub copay: Money,
    pub chief_complaint: String,
    #[serde(default)]
    pub pulse: i32,
    #[serde(default)]
    pub systolic: i32,
    #[serde(default)]
    pub diastolic: i32,
    #[schema(example = "2020-03-15")]
    pub date: String,
}

impl Record for Encounter {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
