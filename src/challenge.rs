//! Captcha challenge payloads, answers, verdicts and the portal seam.
//!
//! The network side is abstracted behind [`Portal`] so the attempt flow
//! can run against a live server or an in-memory fake.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::offset::Displacement;

/// Captcha JSON as served by the challenge endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Challenge {
    /// Base64 PNG of the cut-out puzzle piece.
    #[serde(rename = "CutPng_base64")]
    pub patch_base64: String,
    /// Base64 PNG of the background with the notch.
    #[serde(rename = "YYPng_base64")]
    pub background_base64: String,
    pub uuid: String,
}

impl Challenge {
    pub fn from_json(body: &str) -> Result<Self, PortalError> {
        serde_json::from_str(body).map_err(|e| PortalError::Payload(e.to_string()))
    }

    /// Raw encoded bytes of (patch, background).
    pub fn images(&self) -> Result<(Vec<u8>, Vec<u8>), PortalError> {
        Ok((STANDARD.decode(&self.patch_base64)?, STANDARD.decode(&self.background_base64)?))
    }
}

/// Session state carried between portal requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// `name=value` cookie pair, sent back verbatim.
    pub cookie: String,
}

/// Extract the `name=value` pair from a `Set-Cookie` header value.
pub fn cookie_from_set_cookie(header: &str) -> Option<String> {
    let pair = header.split(';').next()?.trim();
    if pair.is_empty() {
        None
    } else {
        Some(pair.to_string())
    }
}

/// The slide answer for one challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub uuid: String,
    pub move_x: i32,
    pub select_type: String,
    pub text: String,
}

impl Answer {
    pub fn new(challenge: &Challenge, displacement: Displacement, config: &PortalConfig) -> Self {
        Answer {
            uuid: challenge.uuid.clone(),
            move_x: displacement.horizontal(),
            select_type: config.select_type.clone(),
            text: config.text.clone(),
        }
    }

    /// Form fields in the order the portal expects them.
    pub fn form(&self) -> [(&'static str, String); 4] {
        [
            ("uuid", self.uuid.clone()),
            ("moveEnd_X", self.move_x.to_string()),
            ("text[]", self.text.clone()),
            ("selectType", self.select_type.clone()),
        ]
    }
}

/// Outcome reported by the answer endpoint's `YZ` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The answer was accepted; carries the full response body.
    Accepted(Value),
    /// Wrong slide distance.
    Rejected,
    /// The captcha session timed out.
    Expired,
    /// Items whose tracking number starts with 70 or 71 cannot be queried.
    Unsupported,
    /// Server busy.
    Busy,
}

impl Verdict {
    pub fn from_response(body: Value) -> Self {
        match body.get("YZ").and_then(Value::as_str) {
            Some("no") => Verdict::Rejected,
            Some("noSession") => Verdict::Expired,
            Some("noAccess") => Verdict::Unsupported,
            Some("unnormal") => Verdict::Busy,
            _ => Verdict::Accepted(body),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted(body) => write!(f, "accepted: {}", body),
            Verdict::Rejected => f.write_str("verification failed"),
            Verdict::Expired => f.write_str("captcha image has expired"),
            Verdict::Unsupported => f.write_str("items numbered 70/71 are not supported"),
            Verdict::Busy => f.write_str("server busy, refresh and retry"),
        }
    }
}

/// Request/response surface of the tracking portal.
pub trait Portal {
    /// Load the query page and capture its session cookie.
    fn open_session(&self) -> Result<Session, PortalError>;
    /// Fetch a fresh captcha for the session.
    fn fetch_challenge(&self, session: &Session) -> Result<Challenge, PortalError>;
    /// Post an answer and return the parsed verdict.
    fn submit(&self, session: &Session, answer: &Answer) -> Result<Verdict, PortalError>;
}

/// One full round: session, challenge, solve, submit. No retries.
pub fn attempt<P: Portal + ?Sized>(portal: &P, config: &PortalConfig) -> Result<Verdict, PortalError> {
    let session = portal.open_session()?;
    debug!("session cookie {}", session.cookie);

    let challenge = portal.fetch_challenge(&session)?;
    debug!("challenge {}", challenge.uuid);

    let (patch, background) = challenge.images()?;
    let solved = crate::solve_with(&patch, &background, &config.solve)?;
    let answer = Answer::new(&challenge, solved.displacement, config);

    let verdict = portal.submit(&session, &answer)?;
    if verdict.is_accepted() {
        info!("challenge {} answered with moveEnd_X={}", answer.uuid, answer.move_x);
    } else {
        warn!("challenge {} moveEnd_X={}: {}", answer.uuid, answer.move_x, verdict);
    }
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_challenge_json() {
        let body = r#"{"CutPng_base64":"AAEC","YYPng_base64":"AwQF","uuid":"u-1","extra":3}"#;
        let challenge = Challenge::from_json(body).unwrap();
        assert_eq!(challenge.uuid, "u-1");
        let (patch, background) = challenge.images().unwrap();
        assert_eq!(patch, vec![0, 1, 2]);
        assert_eq!(background, vec![3, 4, 5]);
    }

    #[test]
    fn missing_field_is_payload_error() {
        let err = Challenge::from_json(r#"{"uuid":"u-1"}"#).unwrap_err();
        assert!(matches!(err, PortalError::Payload(_)));
    }

    #[test]
    fn bad_base64_is_reported() {
        let challenge = Challenge {
            patch_base64: "!!!".to_string(),
            background_base64: "AAAA".to_string(),
            uuid: "u".to_string(),
        };
        assert!(matches!(challenge.images(), Err(PortalError::Base64(_))));
    }

    #[test]
    fn cookie_pair_is_first_segment() {
        assert_eq!(
            cookie_from_set_cookie("JSESSIONID=abc123; Path=/qps; HttpOnly"),
            Some("JSESSIONID=abc123".to_string())
        );
        assert_eq!(cookie_from_set_cookie(" ; Path=/"), None);
    }

    #[test]
    fn answer_form_fields() {
        let challenge = Challenge {
            patch_base64: String::new(),
            background_base64: String::new(),
            uuid: "abc".to_string(),
        };
        let answer = Answer::new(&challenge, Displacement { dx: 42, dy: -3 }, &PortalConfig::default());
        assert_eq!(
            answer.form(),
            [
                ("uuid", "abc".to_string()),
                ("moveEnd_X", "42".to_string()),
                ("text[]", "1234567890".to_string()),
                ("selectType", "1".to_string()),
            ]
        );
    }

    #[test]
    fn verdict_codes() {
        assert_eq!(Verdict::from_response(json!({"YZ": "no"})), Verdict::Rejected);
        assert_eq!(Verdict::from_response(json!({"YZ": "noSession"})), Verdict::Expired);
        assert_eq!(Verdict::from_response(json!({"YZ": "noAccess"})), Verdict::Unsupported);
        assert_eq!(Verdict::from_response(json!({"YZ": "unnormal"})), Verdict::Busy);

        let ok = json!({"YZ": "yes", "trace": []});
        assert_eq!(Verdict::from_response(ok.clone()), Verdict::Accepted(ok));
    }
}
