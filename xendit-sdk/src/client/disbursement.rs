//! Disbursement API client.
//!
//! Requests authenticate with HTTP Basic auth: the secret API key is the
//! username and the password is empty.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use url::Url;

use super::{ClientError, FOR_USER_ID_HEADER, map_error_response, parse_response};
use crate::config::{ClientConfig, normalize_base_url};
use crate::errors::DisbursementError;
use crate::objects::bank::AvailableBank;
use crate::objects::disbursement::{CreateDisbursement, Disbursement, RequestHeaders};

/// Typed HTTP client for the **Disbursement API**.
///
/// Every method issues exactly one request and returns the first failure it
/// sees; nothing is retried.
#[derive(Clone)]
pub struct DisbursementClient {
    http: Client,
    base_url: Url,
    secret_key: String,
}

impl DisbursementClient {
    /// Create a new `DisbursementClient` from a [`ClientConfig`].
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: normalize_base_url(config.base_url),
            secret_key: config.secret_key,
        })
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `path` is relative to the base URL and must not start with `/`.
    fn request(
        &self,
        method: Method,
        path: &str,
        headers: &RequestHeaders,
    ) -> Result<RequestBuilder, ClientError> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, path, for_user_id = ?headers.for_user_id, "sending request");

        let mut req = self
            .http
            .request(method, url)
            .basic_auth(&self.secret_key, Some(""));
        if let Some(user_id) = &headers.for_user_id {
            req = req.header(FOR_USER_ID_HEADER, user_id);
        }
        Ok(req)
    }

    /// `POST /disbursements` – create a new disbursement.
    pub async fn create(
        &self,
        params: &CreateDisbursement,
        headers: &RequestHeaders,
    ) -> Result<Disbursement, ClientError> {
        let resp = self
            .request(Method::POST, "disbursements", headers)?
            .json(params)
            .send()
            .await?;

        parse_response(resp).await
    }

    /// `GET /disbursements?external_id={external_id}` – the most recent
    /// disbursement with this external id.
    ///
    /// When the API returns several records the last one wins.
    pub async fn find_by_external_id(
        &self,
        external_id: &str,
        headers: &RequestHeaders,
    ) -> Result<Disbursement, ClientError> {
        let mut disbursements = self.where_by_external_id(external_id, headers).await?;
        disbursements
            .pop()
            .ok_or_else(|| DisbursementError::not_found().into())
    }

    /// `GET /disbursements?external_id={external_id}` – every disbursement
    /// with this external id, in the order the API returned them.
    ///
    /// An empty result, or a 404 without an error body, is reported as
    /// [`DirectDisbursementNotFound`](crate::DisbursementErrorKind::DirectDisbursementNotFound).
    pub async fn where_by_external_id(
        &self,
        external_id: &str,
        headers: &RequestHeaders,
    ) -> Result<Vec<Disbursement>, ClientError> {
        let resp = self
            .request(Method::GET, "disbursements", headers)?
            .query(&[("external_id", external_id)])
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            let body = resp.text().await.unwrap_or_default();
            return Err(match map_error_response(StatusCode::NOT_FOUND, body) {
                ClientError::UnexpectedResponse { .. } => DisbursementError::not_found().into(),
                mapped => mapped,
            });
        }

        let disbursements: Vec<Disbursement> = parse_response(resp).await?;
        if disbursements.is_empty() {
            return Err(DisbursementError::not_found().into());
        }
        Ok(disbursements)
    }

    /// `GET /disbursements/{id}` – a disbursement by its API-assigned id.
    pub async fn find_by_id(
        &self,
        id: &str,
        headers: &RequestHeaders,
    ) -> Result<Disbursement, ClientError> {
        let path = format!("disbursements/{}", urlencoding::encode(id));
        let resp = self.request(Method::GET, &path, headers)?.send().await?;

        parse_response(resp).await
    }

    /// `GET /available_disbursements_banks` – banks this account can pay out
    /// to.
    pub async fn available_banks(&self) -> Result<Vec<AvailableBank>, ClientError> {
        let resp = self
            .request(
                Method::GET,
                "available_disbursements_banks",
                &RequestHeaders::default(),
            )?
            .send()
            .await?;

        parse_response(resp).await
    }
}

impl std::fmt::Debug for DisbursementClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisbursementClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
