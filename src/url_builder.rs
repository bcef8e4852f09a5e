use crate::params::{Endpoint, API_HOST};
use crate::query::Query;

/// Build `https://api.datamuse.com/<endpoint>?<query>`.
///
/// Pairs keep the query's insertion order. An empty query yields no `?`.
pub fn build_url(endpoint: Endpoint, query: &Query) -> String {
    let mut url = format!("https://{}/{}", API_HOST, endpoint.as_str());
    let encoded = encode_query(query);
    if !encoded.is_empty() {
        url.push('?');
        url.push_str(&encoded);
    }
    url
}

pub fn encode_query(query: &Query) -> String {
    query
        .iter()
        .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encode for `application/x-www-form-urlencoded`.
///
/// Only `A-Z a-z 0-9 - _ . ~` pass through; a space becomes `+`.
pub fn encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            }
            b' ' => result.push('+'),
            _ => {
                result.push('%');
                result.push_str(&format!("{byte:02X}"));
            }
        }
    }
    result
}
