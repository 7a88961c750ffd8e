use log::debug;

use crate::models::{
    CheckedField, MrzCode, MrzFormat, MrzValidationResult, ValidationIssue, ValidationIssueType,
};
use crate::validation::checksum;

/// Document-level validator: the individually-checksummed fields must each
/// hold, and where the format carries a trailing composite check digit it
/// must cover the concatenated fields, per ICAO Doc 9303.
pub struct MrzValidator;

impl MrzValidator {
    pub fn validate(code: &MrzCode) -> MrzValidationResult {
        let mut issues = Vec::new();

        let document_number_check_valid = code.document_number_field.is_valid();
        if !document_number_check_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::CheckDigit,
                message: "Document number check digit mismatch".to_string(),
            });
        }

        let birthdate_check_valid = code.birthdate_field.is_valid();
        if !birthdate_check_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::CheckDigit,
                message: "Date of birth check digit mismatch".to_string(),
            });
        }

        let expiry_date_check_valid = code.expiry_date_field.is_valid();
        if !expiry_date_check_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::CheckDigit,
                message: "Date of expiry check digit mismatch".to_string(),
            });
        }

        // Visa variants carry no document-level check digit; the composite
        // check is vacuously satisfied for them.
        let composite_check_valid = if code.final_check_digit.is_empty() {
            true
        } else {
            let composited = Self::composited_value(code);
            let valid = checksum::is_value_valid(&composited, &code.final_check_digit);
            if !valid {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::Composite,
                    message: "Composite check digit mismatch".to_string(),
                });
            }
            valid
        };

        let is_valid = document_number_check_valid
            && birthdate_check_valid
            && expiry_date_check_valid
            && composite_check_valid;

        for issue in &issues {
            debug!("{:?}: {}", issue.issue_type, issue.message);
        }

        MrzValidationResult {
            is_valid,
            document_number_check_valid,
            birthdate_check_valid,
            expiry_date_check_valid,
            composite_check_valid,
            issues,
        }
    }

    /// Concatenation of each participating field's raw value and check
    /// digit, in the fixed order the standard assigns to the format: TD1
    /// interleaves its optional data blocks around the dates, all other
    /// formats append optional data after the dates.
    fn composited_value(code: &MrzCode) -> String {
        let mut fields: Vec<&dyn CheckedField> = vec![&code.document_number_field];

        match (code.format, &code.optional_data2_field) {
            (MrzFormat::Td1, Some(optional_data2_field)) => {
                fields.push(&code.optional_data_field);
                fields.push(&code.birthdate_field);
                fields.push(&code.expiry_date_field);
                fields.push(optional_data2_field);
            }
            _ => {
                fields.push(&code.birthdate_field);
                fields.push(&code.expiry_date_field);
                fields.push(&code.optional_data_field);
            }
        }

        fields.iter().fold(String::new(), |mut composited, field| {
            composited.push_str(field.raw_value());
            composited.push_str(field.check_digit());
            composited
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MrzFormat;
    use crate::processing::{FieldFormatter, MrzCodeFactory};

    fn code_for(lines: &[&str], format: MrzFormat) -> MrzCode {
        let formatter = FieldFormatter::with_current_year(false, 2024);
        MrzCodeFactory::create(lines, format, &formatter)
    }

    #[test]
    fn test_td3_document_accepted() {
        let code = code_for(
            &[
                "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
                "L898902C36UTO7408122F1204159ZE184226B<<<<<10",
            ],
            MrzFormat::Td3,
        );
        let result = MrzValidator::validate(&code);
        assert!(result.is_valid);
        assert!(result.composite_check_valid);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_td1_composite_interleaves_optional_data() {
        let code = code_for(
            &[
                "I<UTOD231458907<<<<<<<<<<<<<<<",
                "7408122F1204159UTO<<<<<<<<<<<6",
                "ERIKSSON<<ANNA<MARIA<<<<<<<<<<",
            ],
            MrzFormat::Td1,
        );
        assert_eq!(
            MrzValidator::composited_value(&code),
            "D231458907<<<<<<<<<<<<<<<74081221204159<<<<<<<<<<<"
        );
        assert!(MrzValidator::validate(&code).is_valid);
    }

    #[test]
    fn test_corrupted_document_number_rejected() {
        let code = code_for(
            &[
                "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
                "L898902C46UTO7408122F1204159ZE184226B<<<<<10",
            ],
            MrzFormat::Td3,
        );
        let result = MrzValidator::validate(&code);
        assert!(!result.is_valid);
        assert!(!result.document_number_check_valid);
        assert!(result.birthdate_check_valid);
        assert!(result.expiry_date_check_valid);
    }

    #[test]
    fn test_corrupted_final_check_digit_rejected() {
        let code = code_for(
            &[
                "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
                "L898902C36UTO7408122F1204159ZE184226B<<<<<11",
            ],
            MrzFormat::Td3,
        );
        let result = MrzValidator::validate(&code);
        assert!(!result.is_valid);
        assert!(result.document_number_check_valid);
        assert!(!result.composite_check_valid);
    }

    #[test]
    fn test_visa_without_final_digit_accepted() {
        let code = code_for(
            &[
                "V<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
                "L8988901C4XXX4009078F96121096ZE184226B<<<<<<",
            ],
            MrzFormat::Td3,
        );
        let result = MrzValidator::validate(&code);
        assert!(result.is_valid);
        assert!(result.composite_check_valid);
    }
}
