use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Default API endpoint.
pub(crate) const DEFAULT_HOST: &str = "https://api.sonma.net";

// Operation paths.
pub(crate) const PATH_PRINT: &str = "/v1/print";
pub(crate) const PATH_ACCESS_TOKEN: &str = "/v1/auth/access_token";

// Parameter keys understood by the service.
pub(crate) const PARAM_SN: &str = "sn";
pub(crate) const PARAM_CONTENT: &str = "content";
pub(crate) const PARAM_TEMPLATE: &str = "template";
pub(crate) const PARAM_TOKEN: &str = "token";
pub(crate) const PARAM_SCOPE: &str = "scope";
pub(crate) const PARAM_EXP: &str = "exp";

// Header attached alongside `Authorization` in signed mode.
pub(crate) const HEADER_TIMESTAMP: &str = "Timestamp";

/// AsciiSet for RFC 3986 percent-encoding.
///
/// Encode every byte except the unreserved characters:
/// 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub(crate) static RFC3986_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
