use thiserror::Error;

/// Highest autorange index a meter reports.
pub const MAX_RANGE: u8 = 2;

#[derive(Error, Debug, PartialEq)]
pub enum SampleError {
    #[error("Empty line")]
    Empty,
    #[error("Invalid value: '{0}'")]
    InvalidValue(String),
    #[error("Invalid range: '{0}' (expected 0-2)")]
    InvalidRange(String),
    #[error("Expected at most 2 fields, got {0}")]
    TooManyFields(usize),
}

/// One reading, as sent by the meter: `1234.56, 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub range: Option<u8>,
}

impl Sample {
    pub fn parse(line: &str) -> Result<Self, SampleError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(SampleError::Empty);
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() > 2 {
            return Err(SampleError::TooManyFields(parts.len()));
        }

        let value = parts[0]
            .parse::<f64>()
            .map_err(|_| SampleError::InvalidValue(parts[0].to_string()))?;

        let range = match parts.get(1) {
            None => None,
            Some(field) => match field.parse::<u8>() {
                Ok(range) if range <= MAX_RANGE => Some(range),
                _ => return Err(SampleError::InvalidRange(field.to_string())),
            },
        };

        Ok(Sample { value, range })
    }
}
