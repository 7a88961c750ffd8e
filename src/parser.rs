use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::{DocumentType, MrzFormat, MrzResult, Sex};
use crate::processing::{FieldFormatter, MrzCodeFactory};
use crate::validation::MrzValidator;

lazy_static! {
    /// The character repertoire permitted inside an MRZ line.
    static ref MRZ_LINE: Regex = Regex::new("^[A-Z0-9<]+$").unwrap();
}

/// Parses the Machine Readable Zone of travel documents (TD1, TD2, TD3 and
/// the MRV-A/MRV-B visa variants) into a validated [`MrzResult`].
///
/// Every rejection cause collapses into a `None` return; the individual
/// causes are traced on the `log` facade at debug level. The parser holds
/// no per-call state and is safe to share across threads.
#[derive(Debug, Clone)]
pub struct MrzParser {
    formatter: FieldFormatter,
}

impl MrzParser {
    /// OCR correction is applied to raw field text before interpretation
    /// and checksum validation when enabled.
    pub fn new(ocr_correction_enabled: bool) -> Self {
        MrzParser {
            formatter: FieldFormatter::new(ocr_correction_enabled),
        }
    }

    /// Pins the year used for two-digit-year century resolution instead of
    /// reading the system clock at construction.
    pub fn with_current_year(ocr_correction_enabled: bool, current_year: i32) -> Self {
        MrzParser {
            formatter: FieldFormatter::with_current_year(ocr_correction_enabled, current_year),
        }
    }

    pub fn parse_lines<S: AsRef<str>>(&self, mrz_lines: &[S]) -> Option<MrzResult> {
        let lines: Vec<&str> = mrz_lines.iter().map(|line| line.as_ref()).collect();
        let format = Self::detect_format(&lines)?;
        let code = MrzCodeFactory::create(&lines, format, &self.formatter);

        let validation = MrzValidator::validate(&code);
        if !validation.is_valid {
            debug!("MRZ rejected with {} issue(s)", validation.issues.len());
            return None;
        }

        Some(MrzResult {
            format,
            document_type: DocumentType::from_code(&code.document_type_field.value),
            country_code: code.country_code_field.value,
            surnames: code.names_field.surnames,
            given_names: code.names_field.given_names,
            document_number: Some(code.document_number_field.value),
            nationality_country_code: code.nationality_field.value,
            birthdate: code.birthdate_field.value,
            sex: Sex::from_code(&code.sex_field.value),
            expiry_date: code.expiry_date_field.value,
            optional_data: code.optional_data_field.value,
            optional_data2: code.optional_data2_field.map(|field| field.value),
        })
    }

    /// Splits on newlines and delegates to [`MrzParser::parse_lines`].
    pub fn parse(&self, mrz_string: &str) -> Option<MrzResult> {
        let lines: Vec<&str> = mrz_string.split('\n').collect();
        self.parse_lines(&lines)
    }

    /// Per-line probe for scanner pipelines: the line has the length of
    /// some known format and contains only MRZ characters. Check digits
    /// are not consulted.
    pub fn is_line_valid(&self, line: &str) -> bool {
        MrzFormat::from_line_length(line.chars().count()).is_some() && MRZ_LINE.is_match(line)
    }

    /// Formats are keyed by (line count, uniform line length): 3x30 is
    /// TD1, 2x36 is TD2, 2x44 is TD3. No other combination is accepted.
    fn detect_format(lines: &[&str]) -> Option<MrzFormat> {
        let line_length = Self::uniform_line_length(lines)?;
        let format = match (lines.len(), line_length) {
            (3, 30) => Some(MrzFormat::Td1),
            (2, 36) => Some(MrzFormat::Td2),
            (2, 44) => Some(MrzFormat::Td3),
            _ => None,
        };
        if format.is_none() {
            debug!(
                "no MRZ format matches {} line(s) of length {}",
                lines.len(),
                line_length
            );
        }
        format
    }

    fn uniform_line_length(lines: &[&str]) -> Option<usize> {
        let first = lines.first()?.chars().count();
        if lines.iter().any(|line| line.chars().count() != first) {
            debug!("MRZ lines are not of uniform length");
            return None;
        }
        Some(first)
    }
}

impl Default for MrzParser {
    fn default() -> Self {
        MrzParser::new(false)
    }
}
