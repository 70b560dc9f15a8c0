use super::types::{ArchiveRecord, ColumnLayout};

pub struct RecordValidator;

impl RecordValidator {
    /// Parse one non-blank record line. The error string names the offending
    /// field and is wrapped with file and line context by the caller.
    pub fn parse_line(line: &str, layout: &ColumnLayout) -> Result<ArchiveRecord, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < layout.min_fields {
            return Err(format!(
                "expected at least {} fields, found {}",
                layout.min_fields,
                fields.len()
            ));
        }

        Ok(ArchiveRecord {
            x: Self::parse_field(&fields, layout.x, "x")?,
            y: Self::parse_field(&fields, layout.y, "y")?,
            color: Self::parse_field(&fields, layout.color, "color")?,
        })
    }

    /// Whether the line carries no record at all
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }

    fn parse_field(fields: &[&str], index: usize, name: &str) -> Result<f64, String> {
        let raw = fields
            .get(index)
            .ok_or_else(|| format!("missing {} field at column {}", name, index))?;
        let value = raw
            .parse::<f64>()
            .map_err(|_| format!("{} field '{}' at column {} is not a number", name, raw, index))?;
        if !value.is_finite() {
            return Err(format!(
                "{} field '{}' at column {} is not finite",
                name, raw, index
            ));
        }
        Ok(value)
    }
}
