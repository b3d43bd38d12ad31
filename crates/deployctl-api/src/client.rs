// Inventory service HTTP client.
//
// Wraps `reqwest::Client` with endpoint-relative URL construction, the
// X-Auth-Token header, response decoding, and the single-retry token
// refresh on 401/403. Resource endpoints (addresses, dns, etc.) are
// implemented as inherent methods via separate files under `resources/`
// to keep this module focused on transport mechanics.

use std::sync::Arc;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::multipart::Form;
use crate::page::{Collection, Page};
use crate::query::ListQuery;
use crate::transport::TransportConfig;

/// Callback used to obtain a fresh auth token after the service rejects
/// the current one. Registered with
/// [`InventoryClient::with_token_refresher`]; at most one refresh is
/// attempted per operation.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self) -> Result<SecretString, Error>;
}

/// Async client for the StarlingX system inventory API.
///
/// Holds the shared HTTP transport, the service endpoint URL, and the
/// current auth token. The token is read on every call via an atomic
/// snapshot and replaced only by the refresh path, so the client is safe
/// to share across tasks.
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: Url,
    token: ArcSwap<SecretString>,
    refresher: Option<Arc<dyn TokenRefresher>>,
    refresh_gate: tokio::sync::Mutex<()>,
    cancel: Option<CancellationToken>,
}

impl InventoryClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for the inventory endpoint with a fresh transport.
    pub fn new(
        endpoint: &str,
        token: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(endpoint, token, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(
        endpoint: &str,
        token: SecretString,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_endpoint(endpoint)?;
        Ok(Self {
            http,
            base_url,
            token: ArcSwap::from_pointee(token),
            refresher: None,
            refresh_gate: tokio::sync::Mutex::new(()),
            cancel: None,
        })
    }

    /// Register a token-refresh callback, enabling the single
    /// refresh-and-retry on 401/403.
    pub fn with_token_refresher(mut self, refresher: Arc<dyn TokenRefresher>) -> Self {
        self.refresher = Some(refresher);
        self
    }

    /// Attach a cancellation token; tripping it aborts in-flight requests
    /// with [`Error::Cancelled`].
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Ensure the endpoint parses and ends with a trailing slash so
    /// segment joining is uniform.
    fn normalize_endpoint(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithoutBase));
        }
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Ok(url)
    }

    /// The inventory service endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join slash-separated, URL-escaped segments onto the endpoint.
    pub fn service_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("endpoint URL is a valid base")
            .pop_if_empty()
            .extend(segments);
        url
    }

    // ── Request plumbing ─────────────────────────────────────────────

    fn request(&self, method: Method, url: &Url, token: &str) -> RequestBuilder {
        self.http
            .request(method, url.clone())
            .header("X-Auth-Token", token)
            .header(ACCEPT, "application/json")
    }

    /// Send one request, honouring the cancellation token.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, Error> {
        match &self.cancel {
            Some(cancel) => tokio::select! {
                () = cancel.cancelled() => Err(Error::Cancelled),
                resp = builder.send() => Ok(resp?),
            },
            None => Ok(builder.send().await?),
        }
    }

    /// Send a request, refreshing the token and retrying once if the
    /// service answers 401/403 and a refresher is registered.
    ///
    /// The refresh step is serialized; callers racing on the same stale
    /// token all retry with the token published by whoever refreshed
    /// first.
    async fn execute<F>(&self, build: F) -> Result<Response, Error>
    where
        F: Fn(&str) -> RequestBuilder,
    {
        let token = self.token.load_full();
        let resp = self.dispatch(build(token.expose_secret())).await?;
        let status = resp.status();
        if status != StatusCode::UNAUTHORIZED && status != StatusCode::FORBIDDEN {
            return Ok(resp);
        }

        // Drain the rejected response so the connection can be reused.
        resp.bytes().await.ok();

        let Some(refresher) = &self.refresher else {
            return Err(Error::AuthFailed {
                status: status.as_u16(),
            });
        };

        {
            let _gate = self.refresh_gate.lock().await;
            let current = self.token.load_full();
            if Arc::ptr_eq(&current, &token) {
                debug!("auth token rejected (HTTP {status}), refreshing");
                let fresh = refresher.refresh().await?;
                self.token.store(Arc::new(fresh));
            }
        }

        let token = self.token.load_full();
        let retry = self.dispatch(build(token.expose_secret())).await?;
        let status = retry.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            retry.bytes().await.ok();
            return Err(Error::AuthFailed {
                status: status.as_u16(),
            });
        }
        Ok(retry)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.service_url(segments);
        debug!("GET {url}");

        let resp = self.execute(|tok| self.request(Method::GET, &url, tok)).await?;
        Self::handle_response(Method::GET, &url, resp).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &ListQuery,
    ) -> Result<T, Error> {
        let url = self.service_url(segments);
        let params = query.params();
        debug!("GET {url} params={params:?}");

        let resp = self
            .execute(|tok| self.request(Method::GET, &url, tok).query(&params))
            .await?;
        Self::handle_response(Method::GET, &url, resp).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.service_url(segments);
        debug!("POST {url}");

        let resp = self
            .execute(|tok| self.request(Method::POST, &url, tok).json(body))
            .await?;
        Self::handle_response(Method::POST, &url, resp).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.service_url(segments);
        debug!("PATCH {url}");

        let resp = self
            .execute(|tok| self.request(Method::PATCH, &url, tok).json(body))
            .await?;
        Self::handle_response(Method::PATCH, &url, resp).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.service_url(segments);
        debug!("PUT {url}");

        let resp = self
            .execute(|tok| self.request(Method::PUT, &url, tok).json(body))
            .await?;
        Self::handle_response(Method::PUT, &url, resp).await
    }

    /// PUT where the caller has no use for the response body (the
    /// filesystem batch update answers with an entity echo).
    pub async fn put_no_response<B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<(), Error> {
        let url = self.service_url(segments);
        debug!("PUT {url}");

        let resp = self
            .execute(|tok| self.request(Method::PUT, &url, tok).json(body))
            .await?;
        Self::handle_empty(Method::PUT, &url, resp).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<(), Error> {
        let url = self.service_url(segments);
        debug!("DELETE {url}");

        let resp = self
            .execute(|tok| self.request(Method::DELETE, &url, tok))
            .await?;
        Self::handle_empty(Method::DELETE, &url, resp).await
    }

    /// POST a `multipart/form-data` body. The form is rebuilt per attempt
    /// so every request on the wire carries a fresh boundary.
    pub async fn post_multipart<T: DeserializeOwned, F>(
        &self,
        segments: &[&str],
        form_fn: F,
    ) -> Result<T, Error>
    where
        F: Fn() -> Form,
    {
        let url = self.service_url(segments);
        debug!("POST {url} (multipart)");

        let resp = self
            .execute(|tok| {
                let form = form_fn();
                self.request(Method::POST, &url, tok)
                    .header(CONTENT_TYPE, form.content_type())
                    .body(form.into_body())
            })
            .await?;
        Self::handle_response(Method::POST, &url, resp).await
    }

    /// Fetch a collection endpoint and unwrap its envelope into a page.
    pub async fn list<C: Collection>(
        &self,
        segments: &[&str],
        query: &ListQuery,
    ) -> Result<Page<C::Item>, Error> {
        let envelope: C = self.get_with_query(segments, query).await?;
        Ok(Page {
            items: envelope.into_items(),
        })
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        method: Method,
        url: &Url,
        resp: Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!("{e} (from {method} {url})"),
                body,
            })
        } else {
            Err(Self::status_error(method, url, status, resp).await)
        }
    }

    async fn handle_empty(method: Method, url: &Url, resp: Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            // Drain so the connection returns to the pool.
            resp.bytes().await.ok();
            Ok(())
        } else {
            Err(Self::status_error(method, url, status, resp).await)
        }
    }

    async fn status_error(method: Method, url: &Url, status: StatusCode, resp: Response) -> Error {
        let body = resp.text().await.unwrap_or_default();

        if status == StatusCode::NOT_FOUND {
            return Error::NotFound {
                url: url.to_string(),
            };
        }

        Error::Api {
            status: status.as_u16(),
            method: method.to_string(),
            url: url.to_string(),
            message: Error::truncate_body(&body),
        }
    }
}
