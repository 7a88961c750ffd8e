use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use mrzkit::models::MrzResult;
use mrzkit::utils::MrzError;
use mrzkit::MrzParser;

/// Parse and validate the Machine Readable Zone of a travel document.
#[derive(Parser)]
#[command(name = "mrz_demo")]
struct Args {
    /// File containing the MRZ lines; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Apply OCR confusion correction before validation.
    #[arg(long)]
    ocr_correction: bool,

    /// Print the parsed result as JSON instead of a report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), MrzError> {
    env_logger::init();

    let args = Args::parse();
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    info!("parsing {} MRZ line(s)", lines.len());

    let parser = MrzParser::new(args.ocr_correction);
    match parser.parse_lines(&lines) {
        Some(result) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
            Ok(())
        }
        None => Err(MrzError::FormatError(
            "MRZ rejected: malformed structure or check digit mismatch".to_string(),
        )),
    }
}

fn print_report(result: &MrzResult) {
    println!("MRZ PARSE RESULT");
    println!("----------------");
    println!("  Format: {:?}", result.format);
    println!("  Document Type: {:?}", result.document_type);
    println!("  Issuing Country: {}", result.country_code);
    println!(
        "  Document Number: {}",
        result.document_number.as_deref().unwrap_or("-")
    );
    println!("  Surnames: {}", result.surnames);
    println!("  Given Names: {}", result.given_names);
    println!("  Nationality: {}", result.nationality_country_code);
    println!("  Date of Birth: {}", format_date(result.birthdate));
    println!("  Sex: {:?}", result.sex);
    println!("  Date of Expiry: {}", format_date(result.expiry_date));
    println!("  Optional Data: {}", result.optional_data);
    if let Some(optional_data2) = &result.optional_data2 {
        println!("  Optional Data 2: {}", optional_data2);
    }
    println!("\nAll check digits valid.");
}

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|date| date.to_string()).unwrap_or_else(|| "-".to_string())
}
