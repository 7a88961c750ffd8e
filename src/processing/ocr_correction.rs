/// Semantic role of an MRZ field, used to pick the applicable confusion
/// set during OCR correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    DocumentType,
    CountryCode,
    Names,
    DocumentNumber,
    Nationality,
    Birthdate,
    Sex,
    ExpiryDate,
    PersonalNumber,
    OptionalData,
    Hash,
}

/// Best-effort correction of digit/letter glyph confusions common in
/// passport OCR, applied to raw field text before it is interpreted or
/// checksummed. A successful correction can flip a field from invalid to
/// valid.
pub struct OcrCorrector;

impl OcrCorrector {
    pub fn correct(text: &str, field_type: FieldType) -> String {
        let text = text.to_uppercase();
        match field_type {
            // Numeric fields: a letter here is always a misread digit.
            FieldType::Birthdate | FieldType::ExpiryDate | FieldType::Hash => {
                Self::replace_letters(&text)
            }
            // Alphabetic fields get the inverse substitutions.
            FieldType::Names
            | FieldType::DocumentType
            | FieldType::CountryCode
            | FieldType::Nationality => Self::replace_digits(&text),
            FieldType::Sex => text.replace('P', "F"),
            // Alphanumeric fields are ambiguous without context; left as is.
            FieldType::DocumentNumber | FieldType::PersonalNumber | FieldType::OptionalData => text,
        }
    }

    fn replace_digits(text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '0' => 'O',
                '1' => 'I',
                '2' => 'Z',
                '8' => 'B',
                other => other,
            })
            .collect()
    }

    fn replace_letters(text: &str) -> String {
        text.chars()
            .map(|c| match c {
                'O' | 'Q' | 'U' | 'D' => '0',
                'I' => '1',
                'Z' => '2',
                'B' => '8',
                other => other,
            })
            .collect()
    }
}
