//! Passage text from the ESV API.

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use versemark_engine::PassageSource;

#[derive(Debug, thiserror::Error)]
pub enum EsvError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response format: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no passage found for {0}")]
    NoPassage(String),
}

#[derive(Debug, Deserialize)]
struct PassageResponse {
    #[serde(default)]
    passages: Vec<String>,
}

pub struct EsvClient {
    client: Client,
    url: String,
    token: String,
}

impl EsvClient {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Result<Self, EsvError> {
        let client = Client::builder()
            .user_agent(concat!("versemark/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
            token: token.into(),
        })
    }
}

impl PassageSource for EsvClient {
    type Error = EsvError;

    fn fetch_passage(&self, query: &str) -> Result<String, EsvError> {
        log::debug!("GET {} q={query:?}", self.url);
        let resp = self
            .client
            .get(&self.url)
            .query(&[("q", query)])
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(EsvError::Status {
                status: status.as_u16(),
                body,
            });
        }

        first_passage(&resp.text()?, query)
    }
}

/// The first passage of a `{"passages": [...]}` response body.
fn first_passage(body: &str, query: &str) -> Result<String, EsvError> {
    let response: PassageResponse = serde_json::from_str(body)?;
    response
        .passages
        .into_iter()
        .next()
        .ok_or_else(|| EsvError::NoPassage(query.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn takes_first_passage() {
        let body = r#"{"query": "John 11:35", "passages": ["John 11:35\n\n  [35] Jesus wept.", "other"]}"#;

        let passage = first_passage(body, "John 11:35").unwrap();

        assert_eq!(passage, "John 11:35\n\n  [35] Jesus wept.");
    }

    #[test]
    fn empty_passages_is_an_error() {
        let err = first_passage(r#"{"passages": []}"#, "Hezekiah 1").unwrap_err();

        assert_eq!(err.to_string(), "no passage found for Hezekiah 1");
    }

    #[test]
    fn missing_passages_field_is_an_error() {
        let err = first_passage(r#"{"detail": "Invalid token."}"#, "John 1").unwrap_err();

        assert!(matches!(err, EsvError::NoPassage(_)));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = first_passage("<html>", "John 1").unwrap_err();

        assert!(matches!(err, EsvError::Decode(_)));
    }
}
