//! The public client surface.

use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::Method;
use log::debug;
use serde_json::Value;

use crate::constants::HEADER_TIMESTAMP;
use crate::constants::PARAM_CONTENT;
use crate::constants::PARAM_EXP;
use crate::constants::PARAM_SCOPE;
use crate::constants::PARAM_SN;
use crate::constants::PARAM_TEMPLATE;
use crate::constants::PARAM_TOKEN;
use crate::constants::PATH_ACCESS_TOKEN;
use crate::constants::PATH_PRINT;
use crate::credential::Credential;
use crate::error::Error;
use crate::error::Result;
use crate::http::HttpSend;
use crate::sign;

/// Client for the Sonma cloud printing API.
///
/// Every call is independent and stateless: the client holds no session and
/// no mutable state, so it is cheap to clone and safe to share across tasks.
///
/// Requests authenticate in one of two modes:
///
/// - **signed mode**: the request carries `Authorization` and `Timestamp`
///   headers computed from the secret key;
/// - **token mode**: the request carries a pre-issued bearer token as the
///   `token` parameter instead, and no signing headers.
#[derive(Clone, Debug)]
pub struct Client {
    credential: Credential,
    http: Arc<dyn HttpSend>,
}

impl Client {
    /// Create a client using the default reqwest transport.
    #[cfg(feature = "reqwest")]
    pub fn new(credential: Credential) -> Self {
        Self::with_http_send(credential, crate::ReqwestHttpSend::default())
    }

    /// Create a client on top of a custom transport.
    pub fn with_http_send(credential: Credential, http: impl HttpSend) -> Self {
        if !credential.is_valid() {
            log::warn!("credential has an empty access key or secret key, signed requests will be rejected: {credential:?}");
        }

        Self {
            credential,
            http: Arc::new(http),
        }
    }

    /// Submit `content` to the printer identified by `sn`.
    ///
    /// `template` selects a server-side template id, template content or
    /// template URL; without it the service parses `content` directly.
    ///
    /// With `token` set the request authenticates through the bearer token
    /// and no signing headers are attached; otherwise it is signed with the
    /// secret key.
    ///
    /// Returns the service's JSON response.
    pub async fn print(
        &self,
        sn: u64,
        content: &str,
        template: Option<u64>,
        token: Option<&str>,
    ) -> Result<Value> {
        let mut params = BTreeMap::new();
        params.insert(PARAM_SN.to_string(), sn.to_string());
        params.insert(PARAM_CONTENT.to_string(), content.to_string());
        if let Some(template) = template {
            params.insert(PARAM_TEMPLATE.to_string(), template.to_string());
        }

        let sign = token.is_none();
        if let Some(token) = token {
            params.insert(PARAM_TOKEN.to_string(), token.to_string());
        }

        self.call(Method::POST, PATH_PRINT, params, sign).await
    }

    /// Mint a bearer token scoped to `scope`, valid for `seconds` seconds.
    ///
    /// `scope` is `"*"` for all printers, or an explicit printer group id.
    /// Token issuance always signs with the secret key; a token cannot be
    /// used to mint another token. Call this on a host that holds the secret
    /// key and hand the returned token to clients that do not.
    pub async fn create_token(&self, scope: &str, seconds: u64) -> Result<String> {
        let mut params = BTreeMap::new();
        params.insert(PARAM_SCOPE.to_string(), scope.to_string());

        let exp = Utc::now().timestamp() + seconds as i64;
        params.insert(PARAM_EXP.to_string(), exp.to_string());

        let resp = self
            .call(Method::GET, PATH_ACCESS_TOKEN, params, true)
            .await?;
        resp.get(PARAM_TOKEN)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| Error::response_invalid("response carries no token field"))
    }

    /// Build, optionally sign, and send one request.
    ///
    /// The canonical query string is computed once and used verbatim for both
    /// signing and transmission: as the query string for GET, as the
    /// urlencoded body for POST. Only GET and POST exist in this API.
    async fn call(
        &self,
        method: Method,
        path: &str,
        params: BTreeMap<String, String>,
        sign: bool,
    ) -> Result<Value> {
        let query_string = sign::canonical_query_string(&params);

        let mut builder = http::Request::builder();
        if sign {
            let timestamp = Utc::now().timestamp();
            let authorization = sign::authorization(timestamp, &query_string, &self.credential);
            builder = builder
                .header(AUTHORIZATION, authorization)
                .header(HEADER_TIMESTAMP, timestamp.to_string());
        }

        let req = if method == Method::GET {
            builder
                .method(Method::GET)
                .uri(format!(
                    "{}{}?{}",
                    self.credential.host, path, query_string
                ))
                .body(Bytes::new())?
        } else if method == Method::POST {
            builder
                .method(Method::POST)
                .uri(format!("{}{}", self.credential.host, path))
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Bytes::from(query_string))?
        } else {
            return Err(Error::request_invalid(format!(
                "{method} is not implemented"
            )));
        };

        let resp = self
            .http
            .http_send(req)
            .await
            .map_err(|err| Error::transport_failed(err.to_string()).with_source(err))?;

        let (parts, body) = resp.into_parts();
        debug!("response status: {}", parts.status);

        if !parts.status.is_success() {
            return Err(Error::response_rejected(
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }
        if body.is_empty() {
            return Err(Error::response_invalid("empty response body"));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
