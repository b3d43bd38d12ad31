//! Shared helpers for command handlers.

use uuid::Uuid;

use crate::error::CliError;

/// Parse a UUID argument, reporting the offending field on failure.
pub fn parse_uuid(value: &str, field: &str) -> Result<Uuid, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("expected a UUID, got '{value}'"),
    })
}

/// Split a comma-separated server list, dropping empty entries.
pub fn split_servers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// The file name component of an upload path, for the multipart part.
pub fn upload_filename(path: &std::path::Path) -> String {
    path.file_name()
        .map_or_else(|| "upload".into(), |n| n.to_string_lossy().into_owned())
}
