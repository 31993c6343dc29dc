//! Reader for nominal ARFF files.
//!
//! Supports the subset of the Attribute-Relation File Format needed for
//! categorical learning:
//!
//! ```text
//! % comment
//! @relation weather
//! @attribute Weather {Sunny, Rainy}
//! @attribute 'Wind speed' {calm, 'strong wind'}
//! @attribute Class {Play, Stay}
//! @data
//! Sunny, calm, Play
//! ?, 'strong wind', Stay
//! ```
//!
//! Numeric, string and date attributes are rejected.

use super::{Attribute, Dataset};
use crate::error::{ArbolError, Result};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

/// Number of examples between two progress events.
const PROGRESS_INTERVAL: usize = 1000;

static ATTRIBUTE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^@attribute\s+(?:'([^']+)'|(\S+))\s+(.+?)\s*$")
        .expect("attribute pattern is valid")
});

/// Parses ARFF text into a [`Dataset`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArffReader;

impl ArffReader {
    /// Reads ARFF data, designating `class_attribute` as the class.
    ///
    /// # Errors
    ///
    /// Returns a format error (with line number) for malformed lines or
    /// values outside a declared domain, a validation error if the class
    /// attribute is not declared, and an I/O error if reading fails.
    pub fn read<R: BufRead>(reader: R, class_attribute: &str) -> Result<Dataset> {
        let mut attributes = Vec::new();
        let mut data: Option<Dataset> = None;
        let mut line_no = 0;

        for line in reader.lines() {
            line_no += 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }

            match data.as_mut() {
                None if trimmed.eq_ignore_ascii_case("@data") => {
                    if attributes.is_empty() {
                        return Err(ArbolError::format(
                            line_no,
                            "no attributes declared before @data",
                        ));
                    }
                    data = Some(Dataset::new(std::mem::take(&mut attributes), class_attribute)?);
                }
                None => {
                    if let Some(attribute) = parse_attribute_line(trimmed, line_no)? {
                        debug!(
                            attribute = attribute.name(),
                            values = attribute.cardinality(),
                            "declared attribute"
                        );
                        attributes.push(attribute);
                    }
                }
                Some(dataset) => {
                    dataset
                        .add_example(split_values(trimmed))
                        .map_err(|e| match e {
                            ArbolError::Validation { message } => {
                                ArbolError::format(line_no, message)
                            }
                            other => other,
                        })?;
                    if dataset.len() % PROGRESS_INTERVAL == 0 {
                        info!(target: "arbol::progress", examples = dataset.len(), "loading examples");
                    }
                }
            }
        }

        let dataset = data.ok_or_else(|| ArbolError::format(line_no, "missing @data section"))?;
        info!(
            attributes = dataset.attributes().len(),
            examples = dataset.len(),
            class = class_attribute,
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Reads an ARFF file from disk.
    ///
    /// # Errors
    ///
    /// See [`ArffReader::read`].
    pub fn read_path<P: AsRef<Path>>(path: P, class_attribute: &str) -> Result<Dataset> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "reading ARFF file");
        Self::read(BufReader::new(file), class_attribute)
    }

    /// Parses ARFF text held in memory.
    ///
    /// # Errors
    ///
    /// See [`ArffReader::read`].
    pub fn parse_str(text: &str, class_attribute: &str) -> Result<Dataset> {
        Self::read(text.as_bytes(), class_attribute)
    }
}

/// Parses a header line. Returns `None` for header lines other than
/// attribute declarations (`@relation`, ...).
fn parse_attribute_line(line: &str, line_no: usize) -> Result<Option<Attribute>> {
    let Some(captures) = ATTRIBUTE_LINE.captures(line) else {
        if line
            .get(..10)
            .is_some_and(|keyword| keyword.eq_ignore_ascii_case("@attribute"))
        {
            return Err(ArbolError::format(line_no, "malformed attribute declaration"));
        }
        return Ok(None);
    };

    let name = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map_or("", |m| m.as_str());
    let kind = captures.get(3).map_or("", |m| m.as_str());

    let Some(domain) = kind
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return Err(ArbolError::format(
            line_no,
            format!("attribute '{name}' has type '{kind}'; only nominal attributes are supported"),
        ));
    };

    let values = split_values(domain);
    if values.iter().any(String::is_empty) {
        return Err(ArbolError::format(
            line_no,
            format!("attribute '{name}' declares an empty value"),
        ));
    }

    Attribute::new(name, values)
        .map(Some)
        .map_err(|e| ArbolError::format(line_no, e.to_string()))
}

/// Splits a comma-separated value list, honouring single or double quotes.
fn split_values(list: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in list.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => quote = Some(ch),
            (None, ',') => values.push(std::mem::take(&mut current).trim().to_string()),
            (None, c) => current.push(c),
        }
    }
    values.push(current.trim().to_string());
    values
}
