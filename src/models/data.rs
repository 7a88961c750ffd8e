use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Physical MRZ layouts defined by ICAO Doc 9303.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MrzFormat {
    Td1, // ID card, 3 lines of 30 characters
    Td2, // ID card, 2 lines of 36 characters
    Td3, // Passport, 2 lines of 44 characters
}

impl MrzFormat {
    pub fn lines_count(&self) -> usize {
        match self {
            MrzFormat::Td1 => 3,
            MrzFormat::Td2 | MrzFormat::Td3 => 2,
        }
    }

    pub fn line_length(&self) -> usize {
        match self {
            MrzFormat::Td1 => 30,
            MrzFormat::Td2 => 36,
            MrzFormat::Td3 => 44,
        }
    }

    /// The format whose lines have the given length, if any. Line lengths
    /// are unique across formats, so this is unambiguous.
    pub fn from_line_length(length: usize) -> Option<MrzFormat> {
        match length {
            30 => Some(MrzFormat::Td1),
            36 => Some(MrzFormat::Td2),
            44 => Some(MrzFormat::Td3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Visa,
    Passport,
    Id,
    ResidencePermit,
    Undefined,
}

impl DocumentType {
    /// Resolves the 1-2 letter document code from the MRZ. Two-letter
    /// variant spellings are matched before the single-letter classes.
    pub fn from_code(code: &str) -> DocumentType {
        match code {
            "PN" => DocumentType::Passport,
            "IR" => DocumentType::ResidencePermit,
            _ => match code.chars().next() {
                Some('V') => DocumentType::Visa,
                Some('P') => DocumentType::Passport,
                Some('I') => DocumentType::Id,
                _ => DocumentType::Undefined,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Unspecified,
}

impl Sex {
    /// `X`, `<`, a blank and any unrecognized code all resolve to
    /// [`Sex::Unspecified`]; this lookup never fails.
    pub fn from_code(code: &str) -> Sex {
        match code {
            "M" => Sex::Male,
            "F" => Sex::Female,
            _ => Sex::Unspecified,
        }
    }
}

/// The parsed and accepted MRZ of one travel document. Per-field check
/// digit outcomes are not exposed here; a document that fails any required
/// check is rejected outright instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzResult {
    pub format: MrzFormat,
    pub document_type: DocumentType,
    pub country_code: String,
    pub surnames: String,
    pub given_names: String,
    pub document_number: Option<String>,
    pub nationality_country_code: String,
    /// `None` when the six-character body was not a parseable date.
    pub birthdate: Option<NaiveDate>,
    pub sex: Sex,
    pub expiry_date: Option<NaiveDate>,
    pub optional_data: String,
    /// Second optional data block; present only on TD1 documents.
    pub optional_data2: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssueType {
    CheckDigit,
    Composite,
}

/// Outcome of document-level validation, with per-check flags kept for
/// diagnostics. The public parse contract only consumes `is_valid`.
#[derive(Debug)]
pub struct MrzValidationResult {
    pub is_valid: bool,
    pub document_number_check_valid: bool,
    pub birthdate_check_valid: bool,
    pub expiry_date_check_valid: bool,
    pub composite_check_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dimensions() {
        assert_eq!(MrzFormat::Td1.lines_count(), 3);
        assert_eq!(MrzFormat::Td1.line_length(), 30);
        assert_eq!(MrzFormat::Td2.lines_count(), 2);
        assert_eq!(MrzFormat::Td2.line_length(), 36);
        assert_eq!(MrzFormat::Td3.lines_count(), 2);
        assert_eq!(MrzFormat::Td3.line_length(), 44);
    }

    #[test]
    fn test_format_from_line_length() {
        assert_eq!(MrzFormat::from_line_length(30), Some(MrzFormat::Td1));
        assert_eq!(MrzFormat::from_line_length(36), Some(MrzFormat::Td2));
        assert_eq!(MrzFormat::from_line_length(44), Some(MrzFormat::Td3));
        assert_eq!(MrzFormat::from_line_length(31), None);
    }

    #[test]
    fn test_document_type_resolution() {
        assert_eq!(DocumentType::from_code("P"), DocumentType::Passport);
        assert_eq!(DocumentType::from_code("PN"), DocumentType::Passport);
        assert_eq!(DocumentType::from_code("V"), DocumentType::Visa);
        assert_eq!(DocumentType::from_code("I"), DocumentType::Id);
        assert_eq!(DocumentType::from_code("IR"), DocumentType::ResidencePermit);
        assert_eq!(DocumentType::from_code("ID"), DocumentType::Id);
        assert_eq!(DocumentType::from_code("X"), DocumentType::Undefined);
        assert_eq!(DocumentType::from_code(""), DocumentType::Undefined);
    }

    #[test]
    fn test_sex_resolution() {
        assert_eq!(Sex::from_code("M"), Sex::Male);
        assert_eq!(Sex::from_code("F"), Sex::Female);
        assert_eq!(Sex::from_code("X"), Sex::Unspecified);
        assert_eq!(Sex::from_code("<"), Sex::Unspecified);
        assert_eq!(Sex::from_code(" "), Sex::Unspecified);
        assert_eq!(Sex::from_code(""), Sex::Unspecified);
    }
}
