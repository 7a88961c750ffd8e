pub mod checksum;
pub mod mrz;

pub use mrz::MrzValidator;
