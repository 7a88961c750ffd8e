pub mod factory;
pub mod field_formatter;
pub mod layout;
pub mod ocr_correction;

pub use factory::MrzCodeFactory;
pub use field_formatter::{DateFieldType, FieldFormatter};
pub use layout::{FieldPos, FormatLayout};
pub use ocr_correction::{FieldType, OcrCorrector};
