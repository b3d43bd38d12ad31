//! System certificate resources (`/certificate`).

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::multipart::Form;
use crate::page::{Collection, Page};
use crate::query::ListQuery;
use crate::resources::InstallResponse;

/// An installed system certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub uuid: Uuid,
    /// Install mode the certificate was added under, e.g. `ssl` or
    /// `ssl_ca`.
    pub certtype: String,
    pub signature: String,
    pub start_date: Option<String>,
    pub expiry_date: Option<String>,
    pub issuer: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CertificateList {
    pub certificates: Vec<Certificate>,
}

impl Collection for CertificateList {
    type Item = Certificate;

    fn into_items(self) -> Vec<Certificate> {
        self.certificates
    }
}

impl InventoryClient {
    pub async fn list_certificates(&self, query: &ListQuery) -> Result<Page<Certificate>, Error> {
        self.list::<CertificateList>(&["certificate"], query).await
    }

    pub async fn get_certificate(&self, id: &Uuid) -> Result<Certificate, Error> {
        self.get(&["certificate", &id.to_string()]).await
    }

    /// Install a certificate: a multipart POST with a `mode` form field
    /// and the PEM payload as a `file` part. The full result envelope is
    /// returned for the caller to inspect.
    pub async fn install_certificate(
        &self,
        mode: &str,
        filename: &str,
        contents: impl Into<Bytes>,
    ) -> Result<InstallResponse, Error> {
        let contents = contents.into();
        self.post_multipart(&["certificate", "certificate_install"], || {
            Form::new()
                .text("mode", mode)
                .file("file", filename, contents.clone())
        })
        .await
    }
}
