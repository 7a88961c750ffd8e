use chrono::NaiveDate;

use super::data::MrzFormat;
use super::fields::{Field, NamesField, ValidatedField};

/// Intermediate parse product: every extracted field of one document plus
/// the trailing composite check digit. Built once per parse and discarded
/// after projection into the public [`MrzResult`](super::MrzResult).
#[derive(Debug, Clone)]
pub struct MrzCode {
    pub format: MrzFormat,
    pub document_type_field: Field,
    pub country_code_field: Field,
    pub document_number_field: ValidatedField<String>,
    pub birthdate_field: ValidatedField<Option<NaiveDate>>,
    pub sex_field: Field,
    pub expiry_date_field: ValidatedField<Option<NaiveDate>>,
    pub nationality_field: Field,
    pub optional_data_field: ValidatedField<String>,
    /// Present only on TD1.
    pub optional_data2_field: Option<ValidatedField<String>>,
    pub names_field: NamesField,
    /// Empty on visa variants, which carry no document-level check digit.
    pub final_check_digit: String,
}
