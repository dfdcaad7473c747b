use crate::error::ConvertError;
use crate::models::{ConversionReport, Layout, Record};
use crate::utils::ensure_parent_exists;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, error, info};

pub struct FormatConverter;

impl FormatConverter {
    /// Converts `source` into a flat, key-normalised record list at `destination`.
    ///
    /// Every failure is logged here and reported as `false`; nothing is written
    /// unless all records decode.
    pub fn convert(source: &Path, destination: &Path, layout: Layout) -> bool {
        match Self::try_convert(source, destination, layout) {
            Ok(report) => {
                info!(
                    records = report.records,
                    groups = report.groups,
                    "Format conversion completed. Data saved to {}.",
                    report.destination.display()
                );
                true
            }
            Err(e) => {
                error!(kind = ?e.kind(), field = e.field(), "{}", e);
                false
            }
        }
    }

    pub fn try_convert(
        source: &Path,
        destination: &Path,
        layout: Layout,
    ) -> Result<ConversionReport, ConvertError> {
        if !source.exists() {
            return Err(ConvertError::NotFound(source.to_path_buf()));
        }

        let document = Self::read_document(source)?;
        let (records, groups) = Self::flatten(&document, layout)?;

        ensure_parent_exists(destination).map_err(ConvertError::Write)?;
        let json =
            serde_json::to_string_pretty(&records).map_err(|e| ConvertError::Write(e.into()))?;
        std::fs::write(destination, json).map_err(ConvertError::Write)?;

        Ok(ConversionReport {
            groups,
            records: records.len(),
            destination: destination.to_path_buf(),
        })
    }

    fn read_document(source: &Path) -> Result<Vec<Value>, ConvertError> {
        let bytes = std::fs::read(source).map_err(ConvertError::Read)?;
        let text = std::str::from_utf8(&bytes)?;
        debug!("Read {} bytes from {}", bytes.len(), source.display());

        match serde_json::from_str::<Value>(text)? {
            Value::Array(elements) => Ok(elements),
            other => Err(ConvertError::InvalidShape(format!(
                "expected a top-level JSON array, found {}",
                type_name(&other)
            ))),
        }
    }

    /// Returns the records in encounter order plus the number of item groups seen.
    fn flatten(document: &[Value], layout: Layout) -> Result<(Vec<Record>, usize), ConvertError> {
        let mut records = Vec::new();
        let mut groups = 0;

        for (group_idx, element) in document.iter().enumerate() {
            let items = Self::item_group(element, group_idx, layout)?;
            for (item_idx, item) in items.iter().enumerate() {
                let position = match layout {
                    Layout::Flat => format!("#{}", group_idx),
                    Layout::Nested => format!("#{} in group {}", item_idx, group_idx),
                };
                records.push(Self::decode_record(item, position)?);
            }
            groups += 1;
        }

        Ok((records, groups))
    }

    fn item_group(element: &Value, index: usize, layout: Layout) -> Result<&[Value], ConvertError> {
        match layout {
            Layout::Flat => Ok(std::slice::from_ref(element)),
            Layout::Nested => element.as_array().map(Vec::as_slice).ok_or_else(|| {
                ConvertError::InvalidShape(format!(
                    "group {} is {}, expected an array of records",
                    index,
                    type_name(element)
                ))
            }),
        }
    }

    fn decode_record(item: &Value, position: String) -> Result<Record, ConvertError> {
        let fields = item.as_object().ok_or_else(|| {
            ConvertError::InvalidShape(format!(
                "record {} is {}, expected an object",
                position,
                type_name(item)
            ))
        })?;

        let [instruction, input, output] = Record::FIELDS;
        Ok(Record {
            instruction: required_text(fields, instruction, &position)?,
            input: required_text(fields, input, &position)?,
            output: required_text(fields, output, &position)?,
        })
    }
}

fn required_text(
    fields: &Map<String, Value>,
    key: &'static str,
    position: &str,
) -> Result<String, ConvertError> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ConvertError::InvalidField {
            key,
            position: position.to_string(),
        }),
        None => Err(ConvertError::MissingField {
            key,
            position: position.to_string(),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
