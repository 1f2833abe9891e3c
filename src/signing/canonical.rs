//! Canonical request building for AWS Signature V4.
//!
//! Canonical requests are the normalized form of an HTTP request that the
//! signature is computed over.

use http::HeaderMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// Characters left unencoded in URI paths (RFC 3986 unreserved plus `/`).
const URI_PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Characters left unencoded in query components and single path segments.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// URI-encode a string the way AWS signatures expect.
///
/// Spaces become `%20`; the forward slash is encoded only when
/// `encode_slash` is true.
///
/// ```
/// use integrations_aws_pinpoint::signing::uri_encode;
///
/// assert_eq!(uri_encode("/v1/apps/my app", false), "/v1/apps/my%20app");
/// assert_eq!(uri_encode("a/b", true), "a%2Fb");
/// ```
pub fn uri_encode(input: &str, encode_slash: bool) -> String {
    if encode_slash {
        utf8_percent_encode(input, QUERY_SET).to_string()
    } else {
        utf8_percent_encode(input, URI_PATH_SET).to_string()
    }
}

/// Normalize a URI path: collapse duplicate slashes and resolve `.` / `..`.
///
/// ```
/// use integrations_aws_pinpoint::signing::normalize_uri_path;
///
/// assert_eq!(normalize_uri_path("/v1//apps/./x/../y"), "/v1/apps/y");
/// assert_eq!(normalize_uri_path(""), "/");
/// ```
pub fn normalize_uri_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let has_trailing_slash = path.ends_with('/');

    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut result = String::from("/");
    result.push_str(&segments.join("/"));

    if has_trailing_slash && !result.ends_with('/') {
        result.push('/');
    }

    result
}

/// Build the canonical query string: encode, sort by name then value, join with `&`.
///
/// ```
/// use integrations_aws_pinpoint::signing::canonical_query_string;
///
/// let params = vec![
///     ("tagKeys".to_string(), "team".to_string()),
///     ("tagKeys".to_string(), "env".to_string()),
/// ];
/// assert_eq!(canonical_query_string(&params), "tagKeys=env&tagKeys=team");
/// ```
pub fn canonical_query_string(query_params: &[(String, String)]) -> String {
    let mut encoded_params: Vec<(String, String)> = query_params
        .iter()
        .map(|(key, value)| (uri_encode(key, true), uri_encode(value, true)))
        .collect();

    encoded_params.sort();

    encoded_params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the canonical headers block and the signed headers list.
///
/// Returns `(canonical_headers, signed_headers)`.
pub fn canonical_headers(headers: &HeaderMap) -> (String, String) {
    let mut header_map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (name, value) in headers {
        let name_lower = name.as_str().to_lowercase();
        if !should_sign_header(&name_lower) {
            continue;
        }

        let trimmed = value
            .to_str()
            .unwrap_or("")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        header_map.entry(name_lower).or_default().push(trimmed);
    }

    let canonical = header_map
        .iter()
        .map(|(name, values)| format!("{}:{}\n", name, values.join(",")))
        .collect::<String>();

    let signed = header_map
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(";");

    (canonical, signed)
}

/// Whether a header participates in the signature.
///
/// `host`, `x-amz-*`, `content-type`, `content-md5` and `content-length`
/// are signed. Everything else (notably `user-agent`) is not.
pub fn should_sign_header(header_name: &str) -> bool {
    let name = header_name.to_lowercase();
    name == "host"
        || name.starts_with("x-amz-")
        || name == "content-type"
        || name == "content-md5"
        || name == "content-length"
}
