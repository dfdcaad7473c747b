use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One instruction-tuning example. Field order here is the key order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub instruction: String,
    pub input: String,
    pub output: String,
}

impl Record {
    pub const FIELDS: [&'static str; 3] = ["instruction", "input", "output"];
}

/// How the top-level array of a source file is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `[record, record, ...]`
    Flat,
    /// `[[record, ...], [record, ...], ...]`
    Nested,
}

impl Layout {
    pub fn from_grouped(grouped: bool) -> Self {
        if grouped {
            Layout::Nested
        } else {
            Layout::Flat
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub groups: usize,
    pub records: usize,
    pub destination: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_flag_selects_layout() {
        assert_eq!(Layout::from_grouped(true), Layout::Nested);
        assert_eq!(Layout::from_grouped(false), Layout::Flat);
    }

    #[test]
    fn record_serializes_in_field_order() {
        let record = Record {
            instruction: "q".to_string(),
            input: String::new(),
            output: "a".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"instruction":"q","input":"","output":"a"}"#);
    }
}
