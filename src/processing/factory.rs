use chrono::NaiveDate;

use crate::models::{Field, MrzCode, MrzFormat, ValidatedField};
use crate::processing::field_formatter::{DateFieldType, FieldFormatter};
use crate::processing::layout::{FieldPos, FormatLayout};
use crate::processing::ocr_correction::FieldType;

/// Assembles the intermediate [`MrzCode`] for a detected format by walking
/// that format's layout table. Lines are expected to match the format's
/// declared count and length; the caller verifies both.
pub struct MrzCodeFactory;

impl MrzCodeFactory {
    pub fn create(lines: &[&str], format: MrzFormat, formatter: &FieldFormatter) -> MrzCode {
        // MRV-A/MRV-B selection keys on the uncorrected first character.
        let is_visa = format != MrzFormat::Td1 && lines[0].starts_with('V');
        let layout = FormatLayout::for_format(format, is_visa);

        let final_check_digit = layout
            .final_check_digit
            .map(|pos| plain(formatter, lines, pos, FieldType::Hash).raw_value)
            .unwrap_or_default();

        MrzCode {
            format,
            document_type_field: plain(formatter, lines, layout.document_type, FieldType::DocumentType),
            country_code_field: plain(formatter, lines, layout.country_code, FieldType::CountryCode),
            document_number_field: validated(
                formatter,
                lines,
                layout.document_number,
                FieldType::DocumentNumber,
                true,
            ),
            birthdate_field: dated(formatter, lines, layout.birthdate, DateFieldType::Birthdate),
            sex_field: plain(formatter, lines, layout.sex, FieldType::Sex),
            expiry_date_field: dated(formatter, lines, layout.expiry_date, DateFieldType::ExpiryDate),
            nationality_field: plain(formatter, lines, layout.nationality, FieldType::Nationality),
            optional_data_field: validated(
                formatter,
                lines,
                layout.optional_data,
                FieldType::OptionalData,
                layout.optional_data_has_check_digit,
            ),
            optional_data2_field: layout
                .optional_data2
                .map(|pos| validated(formatter, lines, pos, FieldType::OptionalData, false)),
            names_field: formatter.create_names_field(
                lines[layout.names.line],
                layout.names.start,
                layout.names.length,
            ),
            final_check_digit,
        }
    }
}

fn plain(formatter: &FieldFormatter, lines: &[&str], pos: FieldPos, field_type: FieldType) -> Field {
    formatter.create_field(lines[pos.line], pos.start, pos.length, field_type)
}

fn validated(
    formatter: &FieldFormatter,
    lines: &[&str],
    pos: FieldPos,
    field_type: FieldType,
    check_digit_follows: bool,
) -> ValidatedField<String> {
    formatter.create_string_validated_field(
        lines[pos.line],
        pos.start,
        pos.length,
        field_type,
        check_digit_follows,
    )
}

fn dated(
    formatter: &FieldFormatter,
    lines: &[&str],
    pos: FieldPos,
    date_type: DateFieldType,
) -> ValidatedField<Option<NaiveDate>> {
    formatter.create_date_validated_field(lines[pos.line], pos.start, pos.length, date_type)
}
