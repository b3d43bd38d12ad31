//! `multipart/form-data` request bodies for the install endpoints.
//!
//! The certificate and licence install endpoints take form uploads with a
//! boundary of exactly 60 characters from `[a-z0-9]`, regenerated for
//! every request. `reqwest`'s multipart support keeps its boundary
//! private, so the body is framed here instead; file parts handed over as
//! readers are streamed rather than buffered.

use bytes::Bytes;
use futures_util::StreamExt;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;
use uuid::Uuid;

/// Boundary length required by the platform's upload endpoints.
const BOUNDARY_LEN: usize = 60;

enum PartBody {
    Bytes(Bytes),
    Reader(Box<dyn AsyncRead + Send + Sync + Unpin + 'static>),
}

struct Part {
    header: String,
    body: PartBody,
}

/// A `multipart/form-data` body under construction.
///
/// Parts are emitted in insertion order with CRLF framing per RFC 2046.
pub struct Form {
    boundary: String,
    parts: Vec<Part>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Start a form with a fresh random boundary.
    pub fn new() -> Self {
        Self {
            boundary: random_boundary(),
            parts: Vec::new(),
        }
    }

    /// The boundary token for this form.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The `Content-Type` header value for this form.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Append a plain form field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(Part {
            header: format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"),
            body: PartBody::Bytes(Bytes::from(value.to_owned())),
        });
        self
    }

    /// Append a file part with an in-memory body.
    pub fn file(mut self, name: &str, filename: &str, contents: impl Into<Bytes>) -> Self {
        self.parts.push(Part {
            header: file_part_header(name, filename),
            body: PartBody::Bytes(contents.into()),
        });
        self
    }

    /// Append a file part backed by a reader; the body is streamed to the
    /// server instead of being buffered.
    pub fn file_reader(
        mut self,
        name: &str,
        filename: &str,
        reader: impl AsyncRead + Send + Sync + Unpin + 'static,
    ) -> Self {
        self.parts.push(Part {
            header: file_part_header(name, filename),
            body: PartBody::Reader(Box::new(reader)),
        });
        self
    }

    /// Finish the form into a request body.
    pub fn into_body(self) -> reqwest::Body {
        let streaming = self
            .parts
            .iter()
            .any(|p| matches!(p.body, PartBody::Reader(_)));

        let boundary = self.boundary;
        let mut chunks: Vec<BodyChunk> = Vec::new();
        for part in self.parts {
            chunks.push(BodyChunk::Bytes(Bytes::from(format!(
                "--{boundary}\r\n{}",
                part.header
            ))));
            match part.body {
                PartBody::Bytes(b) => chunks.push(BodyChunk::Bytes(b)),
                PartBody::Reader(r) => chunks.push(BodyChunk::Reader(r)),
            }
            chunks.push(BodyChunk::Bytes(Bytes::from_static(b"\r\n")));
        }
        chunks.push(BodyChunk::Bytes(Bytes::from(format!("--{boundary}--\r\n"))));

        if streaming {
            let stream = futures_util::stream::iter(chunks)
                .flat_map(|chunk| match chunk {
                    BodyChunk::Bytes(b) => futures_util::stream::once(async move {
                        Ok::<Bytes, std::io::Error>(b)
                    })
                    .boxed(),
                    BodyChunk::Reader(r) => ReaderStream::new(r).boxed(),
                })
                .boxed();
            reqwest::Body::wrap_stream(stream)
        } else {
            // All chunks are in-memory bytes on this path.
            let mut buf = Vec::new();
            for chunk in chunks {
                if let BodyChunk::Bytes(b) = chunk {
                    buf.extend_from_slice(&b);
                }
            }
            reqwest::Body::from(buf)
        }
    }
}

enum BodyChunk {
    Bytes(Bytes),
    Reader(Box<dyn AsyncRead + Send + Sync + Unpin + 'static>),
}

fn file_part_header(name: &str, filename: &str) -> String {
    format!(
        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n"
    )
}

/// A fresh 60-character `[a-z0-9]` boundary. Two v4 UUIDs give 64 hex
/// characters of entropy, truncated to the required length.
fn random_boundary() -> String {
    let mut token = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    token.truncate(BOUNDARY_LEN);
    token
}
