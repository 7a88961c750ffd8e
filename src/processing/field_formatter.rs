use chrono::{Datelike, NaiveDate, Utc};

use crate::models::{Field, NamesField, ValidatedField};
use crate::processing::ocr_correction::{FieldType, OcrCorrector};
use crate::utils::TrimFillers;

/// Distinguishes the two date fields, whose century resolution rules
/// differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFieldType {
    Birthdate,
    ExpiryDate,
}

impl DateFieldType {
    fn field_type(self) -> FieldType {
        match self {
            DateFieldType::Birthdate => FieldType::Birthdate,
            DateFieldType::ExpiryDate => FieldType::ExpiryDate,
        }
    }
}

/// Extracts fixed-offset substrings from MRZ lines and shapes them into
/// typed fields.
///
/// Century resolution for two-digit years depends on the current year,
/// captured once at construction; `with_current_year` injects it so
/// parsing is deterministic under test and century rollover can be
/// exercised.
#[derive(Debug, Clone)]
pub struct FieldFormatter {
    ocr_correction_enabled: bool,
    current_year: i32,
}

impl FieldFormatter {
    pub fn new(ocr_correction_enabled: bool) -> Self {
        Self::with_current_year(ocr_correction_enabled, Utc::now().year())
    }

    pub fn with_current_year(ocr_correction_enabled: bool, current_year: i32) -> Self {
        FieldFormatter {
            ocr_correction_enabled,
            current_year,
        }
    }

    pub fn create_field(&self, line: &str, start: usize, length: usize, field_type: FieldType) -> Field {
        let raw_value = self.raw_value(line, start, length, field_type);
        Field {
            value: Self::text(&raw_value),
            raw_value,
        }
    }

    pub fn create_names_field(&self, line: &str, start: usize, length: usize) -> NamesField {
        let raw_value = self.raw_value(line, start, length, FieldType::Names);
        Self::names(&raw_value)
    }

    pub fn create_string_validated_field(
        &self,
        line: &str,
        start: usize,
        length: usize,
        field_type: FieldType,
        check_digit_follows: bool,
    ) -> ValidatedField<String> {
        let raw_value = self.raw_value(line, start, length, field_type);
        let check_digit = if check_digit_follows {
            self.check_digit(line, start + length, field_type)
        } else {
            String::new()
        };

        ValidatedField {
            value: Self::text(&raw_value),
            raw_value,
            check_digit,
        }
    }

    pub fn create_date_validated_field(
        &self,
        line: &str,
        start: usize,
        length: usize,
        date_type: DateFieldType,
    ) -> ValidatedField<Option<NaiveDate>> {
        let field_type = date_type.field_type();
        let raw_value = self.raw_value(line, start, length, field_type);
        let check_digit = self.check_digit(line, start + length, field_type);

        let value = match date_type {
            DateFieldType::Birthdate => self.birthdate(&raw_value),
            DateFieldType::ExpiryDate => self.expiry_date(&raw_value),
        };

        ValidatedField {
            value,
            raw_value,
            check_digit,
        }
    }

    /// Extraction counts characters, not bytes; a stray non-ASCII glyph
    /// lands in a field body and surfaces as a checksum failure.
    fn raw_value(&self, line: &str, start: usize, length: usize, field_type: FieldType) -> String {
        let value: String = line.chars().skip(start).take(length).collect();
        if self.ocr_correction_enabled {
            OcrCorrector::correct(&value, field_type)
        } else {
            value
        }
    }

    fn check_digit(&self, line: &str, index: usize, field_type: FieldType) -> String {
        self.raw_value(line, index, 1, field_type)
    }

    /// Splits the name block on the `<<` separator: the first segment is
    /// the surnames, the second the given names. Single fillers inside a
    /// segment read as spaces.
    fn names(raw_value: &str) -> NamesField {
        let identifiers: Vec<&str> = raw_value.trim_fillers().split("<<").collect();
        NamesField {
            surnames: identifiers.first().copied().unwrap_or("").replace('<', " "),
            given_names: identifiers.get(1).copied().unwrap_or("").replace('<', " "),
        }
    }

    /// A birth year "in the future" can only belong to the previous
    /// century; the bearer cannot be born in a future year.
    fn birthdate(&self, raw_value: &str) -> Option<NaiveDate> {
        let yy = Self::parsed_year(raw_value)?;
        let century = if yy > self.current_year.rem_euclid(100) {
            self.current_century() - 100
        } else {
            self.current_century()
        };
        Self::date(century + yy, raw_value)
    }

    /// Documents are assumed valid for at most ~50 years from issuance, so
    /// a year that far "ahead" modulo 100 is actually past.
    fn expiry_date(&self, raw_value: &str) -> Option<NaiveDate> {
        let yy = Self::parsed_year(raw_value)?;
        let century = if yy >= self.current_year.rem_euclid(100) + 50 {
            self.current_century() - 100
        } else {
            self.current_century()
        };
        Self::date(century + yy, raw_value)
    }

    fn current_century(&self) -> i32 {
        (self.current_year / 100) * 100
    }

    /// The two-digit year of a `YYMMDD` body, or `None` unless all six
    /// characters are decimal digits. Fillers and letters are not
    /// permitted in a date body, even after OCR correction.
    fn parsed_year(raw_value: &str) -> Option<i32> {
        if raw_value.chars().count() != 6 || !raw_value.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        raw_value[0..2].parse().ok()
    }

    fn date(year: i32, raw_value: &str) -> Option<NaiveDate> {
        let month: u32 = raw_value[2..4].parse().ok()?;
        let day: u32 = raw_value[4..6].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn text(raw_value: &str) -> String {
        raw_value.trim_fillers().replace('<', " ")
    }
}
