use thiserror::Error;

/// Errors raised by the hero section model.
///
/// None of these ever reach the visitor: hosts log them and fall back to the
/// default configuration or the visible end state.
#[derive(Error, Debug)]
pub enum HeroError {
    #[error("Failed to load hero configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid range for {field}: {min}..{max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("Invalid count for {field}: {count} (at most {max})")]
    InvalidCount {
        field: &'static str,
        count: usize,
        max: usize,
    },
    #[error("Mount choreography started before the initial render was committed")]
    NotCommitted,
}
