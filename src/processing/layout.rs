use crate::models::MrzFormat;

/// Position of one field inside the fixed-width MRZ block. Offsets are
/// 0-indexed character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPos {
    pub line: usize,
    pub start: usize,
    pub length: usize,
}

const fn pos(line: usize, start: usize, length: usize) -> FieldPos {
    FieldPos { line, start, length }
}

/// Field positions for one MRZ format, straight from ICAO Doc 9303 parts
/// 5, 6 and 7. Document number, birthdate and expiry date are always
/// followed by their own check digit.
#[derive(Debug, Clone)]
pub struct FormatLayout {
    pub document_type: FieldPos,
    pub country_code: FieldPos,
    pub names: FieldPos,
    pub document_number: FieldPos,
    pub nationality: FieldPos,
    pub birthdate: FieldPos,
    pub sex: FieldPos,
    pub expiry_date: FieldPos,
    pub optional_data: FieldPos,
    pub optional_data_has_check_digit: bool,
    pub optional_data2: Option<FieldPos>,
    pub final_check_digit: Option<FieldPos>,
}

impl FormatLayout {
    pub fn for_format(format: MrzFormat, is_visa: bool) -> FormatLayout {
        match format {
            MrzFormat::Td1 => TD1,
            MrzFormat::Td2 => td2(is_visa),
            MrzFormat::Td3 => td3(is_visa),
        }
    }
}

const TD1: FormatLayout = FormatLayout {
    document_type: pos(0, 0, 2),
    country_code: pos(0, 2, 3),
    document_number: pos(0, 5, 9),
    optional_data: pos(0, 15, 15),
    birthdate: pos(1, 0, 6),
    sex: pos(1, 7, 1),
    expiry_date: pos(1, 8, 6),
    nationality: pos(1, 15, 3),
    optional_data2: Some(pos(1, 18, 11)),
    final_check_digit: Some(pos(1, 29, 1)),
    names: pos(2, 0, 29),
    optional_data_has_check_digit: false,
};

fn td2(is_visa: bool) -> FormatLayout {
    FormatLayout {
        document_type: pos(0, 0, 2),
        country_code: pos(0, 2, 3),
        names: pos(0, 5, 31),
        document_number: pos(1, 0, 9),
        nationality: pos(1, 10, 3),
        birthdate: pos(1, 13, 6),
        sex: pos(1, 20, 1),
        expiry_date: pos(1, 21, 6),
        // MRV-B widens the block into the space of the omitted final digit.
        optional_data: pos(1, 28, if is_visa { 8 } else { 7 }),
        optional_data_has_check_digit: false,
        optional_data2: None,
        final_check_digit: if is_visa { None } else { Some(pos(1, 35, 1)) },
    }
}

fn td3(is_visa: bool) -> FormatLayout {
    FormatLayout {
        document_type: pos(0, 0, 2),
        country_code: pos(0, 2, 3),
        names: pos(0, 5, 39),
        document_number: pos(1, 0, 9),
        nationality: pos(1, 10, 3),
        birthdate: pos(1, 13, 6),
        sex: pos(1, 20, 1),
        expiry_date: pos(1, 21, 6),
        optional_data: pos(1, 28, if is_visa { 16 } else { 14 }),
        optional_data_has_check_digit: !is_visa,
        optional_data2: None,
        final_check_digit: if is_visa { None } else { Some(pos(1, 43, 1)) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_extents(layout: &FormatLayout) -> Vec<(FieldPos, bool)> {
        let mut extents = vec![
            (layout.document_type, false),
            (layout.country_code, false),
            (layout.names, false),
            (layout.document_number, true),
            (layout.nationality, false),
            (layout.birthdate, true),
            (layout.sex, false),
            (layout.expiry_date, true),
            (layout.optional_data, layout.optional_data_has_check_digit),
        ];
        if let Some(optional_data2) = layout.optional_data2 {
            extents.push((optional_data2, false));
        }
        if let Some(final_check_digit) = layout.final_check_digit {
            extents.push((final_check_digit, false));
        }
        extents
    }

    #[test]
    fn test_layouts_fit_declared_line_dimensions() {
        let variants = [
            (MrzFormat::Td1, false),
            (MrzFormat::Td2, false),
            (MrzFormat::Td2, true),
            (MrzFormat::Td3, false),
            (MrzFormat::Td3, true),
        ];

        for (format, is_visa) in variants {
            let layout = FormatLayout::for_format(format, is_visa);
            for (pos, check_digit_follows) in field_extents(&layout) {
                assert!(pos.line < format.lines_count());
                let end = pos.start + pos.length + usize::from(check_digit_follows);
                assert!(
                    end <= format.line_length(),
                    "{:?} (visa: {}) field at line {} exceeds length {}",
                    format,
                    is_visa,
                    pos.line,
                    format.line_length()
                );
            }
        }
    }

    #[test]
    fn test_visa_variants_have_no_final_check_digit() {
        assert!(FormatLayout::for_format(MrzFormat::Td2, true).final_check_digit.is_none());
        assert!(FormatLayout::for_format(MrzFormat::Td3, true).final_check_digit.is_none());
        assert!(FormatLayout::for_format(MrzFormat::Td2, false).final_check_digit.is_some());
        assert!(FormatLayout::for_format(MrzFormat::Td3, false).final_check_digit.is_some());
    }

    #[test]
    fn test_visa_variants_widen_optional_data() {
        assert_eq!(FormatLayout::for_format(MrzFormat::Td2, true).optional_data.length, 8);
        assert_eq!(FormatLayout::for_format(MrzFormat::Td2, false).optional_data.length, 7);
        assert_eq!(FormatLayout::for_format(MrzFormat::Td3, true).optional_data.length, 16);
        assert_eq!(FormatLayout::for_format(MrzFormat::Td3, false).optional_data.length, 14);
    }
}
