use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::path::Path;

pub const DEFAULT_PROJECT: &str = "MonadicParser";
pub const DEFAULT_AUTHOR: &str = "Artem Bobrov";

/// Metadata stamped at the top of a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub file: String,
    pub project: String,
    pub author: String,
    pub date: NaiveDate,
    pub script: String,
}

impl Header {
    /// Takes the file name from the base name of `path`.
    pub fn for_path(
        path: &Path,
        project: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDate,
        script: impl Into<String>,
    ) -> Result<Self> {
        let file = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or(Error::MissingField("file"))?;
        Ok(Self {
            file: file.to_owned(),
            project: project.into(),
            author: author.into(),
            date,
            script: script.into(),
        })
    }

    /// `arity` is the alphabet size the document was generated with.
    pub fn render(&self, arity: usize) -> String {
        let Self {
            file,
            project,
            author,
            date,
            script,
        } = self;
        format!(
            "//
//  {file}
//  {project}
//
//  Created by {author} on {date}.
//
// Autogenerated by {script}

// swiftlint:disable all

/// Generated curry functions up to {arity} parameters.
",
            date = date.format("%d.%m.%Y"),
        )
    }
}
