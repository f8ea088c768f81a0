//! Canonical query string construction and HMAC-SHA1 authorization.

use std::collections::BTreeMap;

use log::debug;

use crate::credential::Credential;
use crate::encode::percent_encode;
use crate::hash::base64_encode;
use crate::hash::hex_hmac_sha1;
use crate::hash::hex_sha1;

/// Build the canonical query string of `params`.
///
/// Keys are iterated in byte-wise lexicographic order, keys and values are
/// percent-encoded, and pairs are joined as `key=value` with `&`. An empty
/// map yields an empty string.
///
/// The exact same string is both signed and transmitted on the wire, as the
/// query string for GET and as the body for POST. Any transformation applied
/// after this point would break signature verification.
pub fn canonical_query_string(params: &BTreeMap<String, String>) -> String {
    let mut s = String::with_capacity(
        params
            .iter()
            .map(|(k, v)| k.len() + v.len() + 2)
            .sum::<usize>(),
    );

    for (idx, (k, v)) in params.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }

        s.push_str(&percent_encode(k));
        s.push('=');
        s.push_str(&percent_encode(v));
    }

    s
}

/// Build the `Authorization` header value for a signed request.
///
/// The value is the base64 of `HMAC-SHA1 {access_key}:{signature}` where the
/// signature is the hex HMAC-SHA1, under the secret key, of
/// `{timestamp}\n{sha1(canonical_query_string)}`.
///
/// `timestamp` is epoch seconds and must be the same value sent in the
/// `Timestamp` header, otherwise the server rejects the signature.
pub fn authorization(timestamp: i64, canonical_query_string: &str, cred: &Credential) -> String {
    debug!("canonical query string: {canonical_query_string}");
    let hashed_query_string = hex_sha1(canonical_query_string.as_bytes());
    debug!("hashed canonical query string: {hashed_query_string}");

    let string_to_sign = format!("{timestamp}\n{hashed_query_string}");
    debug!("string to sign: {string_to_sign}");

    let signature = hex_hmac_sha1(cred.secret_key.as_bytes(), string_to_sign.as_bytes());
    debug!("signature: {signature}");

    base64_encode(format!("HMAC-SHA1 {}:{}", cred.access_key, signature).as_bytes())
}
