//! AWS Signature Version 4 signing for Pinpoint requests.
//!
//! - **canonical** - canonical URI, query string and header construction
//! - **v4** - key derivation and the `Authorization` header
//! - **error** - signing error types

pub mod canonical;
pub mod error;
pub mod v4;

pub use canonical::{canonical_headers, canonical_query_string, normalize_uri_path, should_sign_header, uri_encode};
pub use error::SigningError;
pub use v4::{
    build_credential_scope, derive_signing_key, format_date_stamp, format_datetime, sha256_hex,
    sign_request, SigningParams, AWS_ALGORITHM, PINPOINT_SERVICE,
};
