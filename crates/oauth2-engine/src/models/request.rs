use std::collections::HashMap;
use url::form_urlencoded;

/// Owned snapshot of one inbound HTTP request, handed to the engine.
///
/// Header names are stored lower-cased. The body is raw bytes; token
/// requests are normally `application/x-www-form-urlencoded` and can be
/// decoded with [`EngineRequest::form_params`].
#[derive(Debug, Clone, Default)]
pub struct EngineRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl EngineRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(|v| v.as_str())
    }

    /// Extract the bearer token from the `Authorization` header, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        let value = self.header("authorization")?;
        let (scheme, token) = value.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    /// Decode the query string. Later duplicates overwrite earlier ones;
    /// engines that must reject duplicates should parse the raw string.
    pub fn query_params(&self) -> HashMap<String, String> {
        form_urlencoded::parse(self.query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Decode a form-encoded body (token grant requests).
    pub fn form_params(&self) -> HashMap<String, String> {
        form_urlencoded::parse(&self.body).into_owned().collect()
    }
}
