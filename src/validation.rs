//! Validation of YAML manifests before they are applied to a cluster

use serde::Deserialize;
use serde_yaml::{Deserializer, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons why a YAML file is unusable
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("file not accessible: {}: {source}", .path.display())]
    FileNotAccessible { path: PathBuf, source: io::Error },

    #[error("file is empty: {}", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("invalid YAML syntax in {}: {message}", .path.display())]
    InvalidYamlSyntax { path: PathBuf, message: String },

    #[error("YAML file contains no data: {}", .path.display())]
    NoDataInFile { path: PathBuf },
}

/// Category of a [`ValidationError`] without its payload
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationErrorKind {
    FileNotAccessible,
    EmptyFile,
    InvalidYamlSyntax,
    NoDataInFile,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::FileNotAccessible { .. } => ValidationErrorKind::FileNotAccessible,
            ValidationError::EmptyFile { .. } => ValidationErrorKind::EmptyFile,
            ValidationError::InvalidYamlSyntax { .. } => ValidationErrorKind::InvalidYamlSyntax,
            ValidationError::NoDataInFile { .. } => ValidationErrorKind::NoDataInFile,
        }
    }

    /// Returns the path of the offending file.
    pub fn path(&self) -> &Path {
        match self {
            ValidationError::FileNotAccessible { path, .. }
            | ValidationError::EmptyFile { path }
            | ValidationError::InvalidYamlSyntax { path, .. }
            | ValidationError::NoDataInFile { path } => path,
        }
    }
}

/// Checks that the given file is a readable, syntactically valid YAML file
/// with at least one document containing data.
///
/// Multiple documents separated by `---` are supported.
///
/// Only a zero-length file is [`ValidationError::EmptyFile`]. Content made
/// of whitespace alone (spaces, tabs, line breaks) is not a YAML document
/// and is reported as [`ValidationError::InvalidYamlSyntax`], as is content
/// which is not valid UTF-8.
pub fn validate_yaml_file<P: AsRef<Path>>(path: P) -> Result<(), ValidationError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| ValidationError::FileNotAccessible {
        path: path.to_owned(),
        source,
    })?;

    if bytes.is_empty() {
        return Err(ValidationError::EmptyFile {
            path: path.to_owned(),
        });
    }

    let invalid_syntax = |message: String| ValidationError::InvalidYamlSyntax {
        path: path.to_owned(),
        message,
    };

    let content = String::from_utf8(bytes)
        .map_err(|error| invalid_syntax(format!("content is not valid UTF-8: {}", error)))?;

    if content.trim().is_empty() {
        return Err(invalid_syntax(String::from(
            "content consists only of whitespace",
        )));
    }

    if content.lines().all(is_blank_or_comment) {
        return Err(ValidationError::NoDataInFile {
            path: path.to_owned(),
        });
    }

    let mut documents_with_data = 0;
    for document in Deserializer::from_str(&content) {
        let value = Value::deserialize(document).map_err(|error| invalid_syntax(error.to_string()))?;
        if !value.is_null() {
            documents_with_data += 1;
        }
    }

    if documents_with_data == 0 {
        return Err(ValidationError::NoDataInFile {
            path: path.to_owned(),
        });
    }

    Ok(())
}

fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}
