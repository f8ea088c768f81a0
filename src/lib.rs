//! Signed client for the Sonma cloud printing API.
//!
//! The Sonma service authenticates requests without a prior handshake: every
//! call either carries an HMAC-SHA1 signature over a canonical query string
//! (signed mode), or a short-lived bearer token minted through a signed call
//! (token mode). This crate implements the canonicalization, RFC 3986
//! percent-encoding and signing protocol, and exposes the two API
//! operations, [`Client::print`] and [`Client::create_token`].
//!
//! ## Example
//!
//! ```no_run
//! use sonma_print::{Client, Credential};
//!
//! # async fn example() -> sonma_print::Result<()> {
//! let client = Client::new(Credential::new("access-key", "secret-key"));
//!
//! // Signed with the secret key.
//! let result = client.print(123456789, "hello", None, None).await?;
//! println!("{}", result["message"]);
//!
//! // Mint a token for callers that must not hold the secret key...
//! let token = client.create_token("*", 3600).await?;
//!
//! // ...which then authenticates without any signing headers.
//! client.print(123456789, "hello", None, Some(&token)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Transport
//!
//! The client builds method, url, headers and body, and hands the request to
//! a [`HttpSend`] implementation. The `reqwest` feature (on by default)
//! provides [`ReqwestHttpSend`]; disable it and implement [`HttpSend`] to
//! bring your own HTTP stack.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod sign;

mod constants;
mod utils;

mod encode;
pub use encode::percent_encode;

mod credential;
pub use credential::Credential;

mod error;
pub use error::{Error, ErrorKind, Result};

mod http;
pub use http::HttpSend;
#[cfg(feature = "reqwest")]
pub use http::ReqwestHttpSend;

mod client;
pub use client::Client;
