use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ParseFailure,
    SchemaViolation,
    WriteFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("File {} not found.", .0.display())]
    NotFound(PathBuf),
    #[error("Error reading file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Error reading file: {0}")]
    Decode(#[from] std::str::Utf8Error),
    #[error("Error reading file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Error reading file: {0}")]
    InvalidShape(String),
    #[error("Invalid data format: missing key '{key}' in record {position}")]
    MissingField { key: &'static str, position: String },
    #[error("Invalid data format: key '{key}' in record {position} is not a string")]
    InvalidField { key: &'static str, position: String },
    #[error("Error writing to file: {0}")]
    Write(#[source] std::io::Error),
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::NotFound(_) => ErrorKind::NotFound,
            ConvertError::Read(_)
            | ConvertError::Decode(_)
            | ConvertError::Parse(_)
            | ConvertError::InvalidShape(_) => ErrorKind::ParseFailure,
            ConvertError::MissingField { .. } | ConvertError::InvalidField { .. } => {
                ErrorKind::SchemaViolation
            }
            ConvertError::Write(_) => ErrorKind::WriteFailure,
        }
    }

    /// The required key a schema violation is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConvertError::MissingField { key, .. } | ConvertError::InvalidField { key, .. } => {
                Some(key)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_names_key() {
        let err = ConvertError::MissingField {
            key: "input",
            position: "#0".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
        assert_eq!(err.field(), Some("input"));
        assert!(err.to_string().contains("'input'"));
    }

    #[test]
    fn not_found_message_names_path() {
        let err = ConvertError::NotFound(PathBuf::from("data/raw/missing.json"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "File data/raw/missing.json not found.");
    }

    #[test]
    fn io_errors_split_by_direction() {
        let read = ConvertError::Read(std::io::Error::other("boom"));
        let write = ConvertError::Write(std::io::Error::other("boom"));
        assert_eq!(read.kind(), ErrorKind::ParseFailure);
        assert_eq!(write.kind(), ErrorKind::WriteFailure);
    }
}
