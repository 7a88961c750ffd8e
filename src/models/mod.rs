pub mod data;
pub mod fields;
pub mod mrz_code;

pub use data::{
    DocumentType, MrzFormat, MrzResult, MrzValidationResult, Sex, ValidationIssue,
    ValidationIssueType,
};
pub use fields::{CheckedField, Field, NamesField, ValidatedField};
pub use mrz_code::MrzCode;
