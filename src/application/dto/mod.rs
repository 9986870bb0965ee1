pub mod conversion;

pub use conversion::{ConversionOutcome, ConversionProgress, ConversionReport, RunPhase};
