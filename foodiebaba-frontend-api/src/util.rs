use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// A token that would produce a broken `Authorization` header counts as missing.
pub fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(|c| c.is_whitespace() || c.is_control())
}

pub fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            let encoded = utf8_percent_encode(value, NON_ALPHANUMERIC);
            format!("{key}={encoded}")
        })
        .collect::<Vec<_>>()
        .join("&")
}
