//! Bulk import of projects from uploaded CSV/JSON files and from the
//! bundled seed asset.

pub mod csv;
pub mod json;
pub mod record;

use thiserror::Error;

use crate::api::{Project, ProjectDraft, Repository, StoreError};

pub use record::{ImportRecord, PLACEHOLDER_TITLE};

/// Path of the seed asset served next to the site.
pub const MIGRATION_ASSET: &str = "/projects.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Unsupported file type: {0}. Please upload a .csv or .json file")]
    UnsupportedFormat(String),
    #[error("Could not parse file: {0}")]
    Malformed(String),
    #[error("No valid data found in file")]
    NoValidData,
    #[error("Could not read file: {0}")]
    Read(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ImportError {
    /// True when the import stopped before anything was written.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, ImportError::Store(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    pub fn from_file_name(name: &str) -> Result<Self, ImportError> {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(ImportFormat::Csv),
            "json" => Ok(ImportFormat::Json),
            _ => Err(ImportError::UnsupportedFormat(name.to_string())),
        }
    }
}

/// Parses file text into drafts ready for a batch insert.
pub fn parse(format: ImportFormat, text: &str) -> Result<Vec<ProjectDraft>, ImportError> {
    let records = match format {
        ImportFormat::Csv => csv::parse_csv(text),
        ImportFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(text)
                .map_err(|err| ImportError::Malformed(err.to_string()))?;
            json::records_from_value(&value).ok_or_else(|| {
                ImportError::Malformed("expected an object or an array of objects".into())
            })?
        }
    };
    if records.is_empty() {
        return Err(ImportError::NoValidData);
    }
    Ok(records.into_iter().map(ImportRecord::into_draft).collect())
}

/// Writes all drafts with one insert call and returns how many were sent.
pub async fn write_batch(
    repo: &Repository<Project>,
    drafts: &[ProjectDraft],
) -> Result<usize, ImportError> {
    if drafts.is_empty() {
        return Err(ImportError::NoValidData);
    }
    repo.create_many(drafts).await?;
    Ok(drafts.len())
}

/// Full upload path: format check, parse, then a single batch insert.
pub async fn import_file(
    repo: &Repository<Project>,
    file_name: &str,
    text: &str,
) -> Result<usize, ImportError> {
    let format = ImportFormat::from_file_name(file_name)?;
    let drafts = parse(format, text)?;
    log::info!("Importing {} projects from {}", drafts.len(), file_name);
    write_batch(repo, &drafts).await
}

/// Fetches and maps the seed asset served at `origin`.
pub async fn load_migration_drafts(origin: &str) -> Result<Vec<ProjectDraft>, ImportError> {
    let url = format!("{}{}", origin.trim_end_matches('/'), MIGRATION_ASSET);
    let response = reqwest::get(&url)
        .await
        .map_err(|err| ImportError::Read(err.to_string()))?;
    if !response.status().is_success() {
        return Err(ImportError::Read(format!(
            "{} returned status {}",
            MIGRATION_ASSET,
            response.status().as_u16()
        )));
    }
    let text = response
        .text()
        .await
        .map_err(|err| ImportError::Read(err.to_string()))?;
    parse(ImportFormat::Json, &text)
}
