//! Licence resources (`/license`).

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncRead;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::multipart::Form;
use crate::resources::InstallResponse;

/// The installed licence, read back as its full text payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub content: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl InventoryClient {
    /// Read the currently installed licence file.
    pub async fn get_license(&self) -> Result<License, Error> {
        self.get(&["license", "get_license_file"]).await
    }

    /// Install a licence: a multipart POST with the licence text as a
    /// single `file` part.
    pub async fn install_license(
        &self,
        filename: &str,
        contents: impl Into<Bytes>,
    ) -> Result<InstallResponse, Error> {
        let contents = contents.into();
        let filename = filename.to_owned();
        self.post_multipart(&["license", "license_install"], move || {
            Form::new().file("file", &filename, contents.clone())
        })
        .await
    }

    /// Install a licence from a reader, streaming the file part instead
    /// of buffering it. The opener is called per attempt so a retried
    /// request gets a fresh stream (and a fresh boundary).
    pub async fn install_license_from<R, F>(
        &self,
        filename: &str,
        open: F,
    ) -> Result<InstallResponse, Error>
    where
        R: AsyncRead + Send + Sync + Unpin + 'static,
        F: Fn() -> R,
    {
        let filename = filename.to_owned();
        self.post_multipart(&["license", "license_install"], move || {
            Form::new().file_reader("file", &filename, open())
        })
        .await
    }
}
