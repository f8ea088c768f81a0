use std::fmt::Debug;

use bytes::Bytes;

/// HttpSend is used to deliver the requests the client builds.
///
/// The client only decides method, url, headers and body; actually completing
/// the exchange, along with pooling, timeouts and retries, is entirely the
/// transport's concern. Implement this trait to plug in any HTTP stack, or
/// a mock for testing.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>>;
}

#[cfg(feature = "reqwest")]
mod send_reqwest {
    use bytes::Bytes;
    use http_body_util::BodyExt;
    use reqwest::Client;
    use reqwest::Request;

    use super::HttpSend;

    /// HttpSend implementation backed by a [`reqwest::Client`].
    #[derive(Debug, Default)]
    pub struct ReqwestHttpSend {
        client: Client,
    }

    impl ReqwestHttpSend {
        /// Create a new ReqwestHttpSend with a preconfigured reqwest::Client.
        pub fn new(client: Client) -> Self {
            Self { client }
        }
    }

    #[async_trait::async_trait]
    impl HttpSend for ReqwestHttpSend {
        async fn http_send(
            &self,
            req: http::Request<Bytes>,
        ) -> anyhow::Result<http::Response<Bytes>> {
            let req = Request::try_from(req)?;
            let resp: http::Response<_> = self.client.execute(req).await?.into();

            let (parts, body) = resp.into_parts();
            let bs = BodyExt::collect(body).await.map(|buf| buf.to_bytes())?;
            Ok(http::Response::from_parts(parts, bs))
        }
    }
}

#[cfg(feature = "reqwest")]
pub use send_reqwest::ReqwestHttpSend;
