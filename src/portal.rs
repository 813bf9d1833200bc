//! Blocking HTTP client for the live tracking portal.

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::blocking::Client;
use reqwest::header::{CONNECTION, COOKIE, ORIGIN, REFERER, SET_COOKIE};
use serde_json::Value;

use crate::challenge::{cookie_from_set_cookie, Answer, Challenge, Portal, Session, Verdict};
use crate::config::PortalConfig;
use crate::error::PortalError;

/// [`Portal`] backed by a blocking `reqwest` client.
pub struct HttpPortal {
    client: Client,
    config: PortalConfig,
}

impl HttpPortal {
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(http_error)?;
        Ok(HttpPortal { client, config })
    }
}

fn http_error(e: reqwest::Error) -> PortalError {
    PortalError::Http(e.to_string())
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

impl Portal for HttpPortal {
    fn open_session(&self) -> Result<Session, PortalError> {
        let response = self
            .client
            .get(self.config.page_url())
            .header(CONNECTION, "keep-alive")
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(http_error)?;

        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(cookie_from_set_cookie)
            .ok_or(PortalError::MissingCookie)?;
        Ok(Session { cookie })
    }

    fn fetch_challenge(&self, session: &Session) -> Result<Challenge, PortalError> {
        let body = self
            .client
            .get(self.config.challenge_url())
            .query(&[("t", unix_millis().to_string())])
            .header(CONNECTION, "keep-alive")
            .header(COOKIE, session.cookie.as_str())
            .header(REFERER, self.config.page_url())
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(http_error)?;
        Challenge::from_json(&body)
    }

    fn submit(&self, session: &Session, answer: &Answer) -> Result<Verdict, PortalError> {
        let body = self
            .client
            .post(self.config.answer_url())
            .header(CONNECTION, "keep-alive")
            .header(COOKIE, session.cookie.as_str())
            .header(REFERER, self.config.page_url())
            .header(ORIGIN, self.config.server_url.as_str())
            .form(&answer.form())
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(http_error)?;
        let value: Value = serde_json::from_str(&body).map_err(|e| PortalError::Payload(e.to_string()))?;
        Ok(Verdict::from_response(value))
    }
}
