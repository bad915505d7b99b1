#![deny(missing_docs)]

//! # Simulated Exchange
//!
//! Canned request/response cycles for the explorer's "Send Request" demo.
//! No network traffic happens: the response is chosen by substring matching
//! on the path, after an optional artificial delay. This is demo plumbing
//! and carries no correctness guarantees.

use chrono::Utc;
use rand::distr::{Alphanumeric, SampleString};
use serde_json::{json, Value as JsonValue};
use std::time::{Duration, Instant};

/// An ephemeral request/response pair. Held only by the caller; nothing is
/// persisted and no real exchange takes place.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedExchange {
    /// Uppercased HTTP method of the simulated request.
    pub method: String,
    /// Path of the simulated request.
    pub path: String,
    /// Simulated HTTP status code.
    pub status: u16,
    /// Simulated response headers.
    pub headers: Vec<(String, String)>,
    /// Simulated response body.
    pub body: JsonValue,
    /// Wall-clock time the simulation took (includes the delay).
    pub elapsed: Duration,
}

impl SimulatedExchange {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Generator for simulated exchanges.
#[derive(Debug, Clone)]
pub struct Sandbox {
    delay: Duration,
}

impl Sandbox {
    /// Creates a sandbox that sleeps `delay` before answering.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Runs one simulated request/response cycle.
    pub fn simulate(&self, path: &str, method: &str) -> SimulatedExchange {
        let start = Instant::now();

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let (status, body) = canned_response(path);
        let headers = vec![
            ("content-type".to_string(), "application/json".to_string()),
            ("x-request-id".to_string(), request_id()),
            (
                "date".to_string(),
                Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
            ),
        ];

        SimulatedExchange {
            method: method.to_uppercase(),
            path: path.to_string(),
            status,
            headers,
            body,
            elapsed: start.elapsed(),
        }
    }
}

impl Default for Sandbox {
    /// Matches the delay the explorer page uses.
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

/// Picks the canned payload for a path. Unknown endpoints are themselves a
/// canned answer (501), so there is no error path.
fn canned_response(path: &str) -> (u16, JsonValue) {
    if path.contains("passwordless/init") {
        let body = json!({
            "state": "abc123xyz456",
            "tries": 1,
            "retriesLeft": 4,
            "resends": 1,
            "resendsLeft": 4,
            "resendAfter": 30,
            "isNewUser": true,
        });
        return (200, body);
    }

    if path.contains("signin") || path.contains("signup") || path.contains("auth") {
        let body = json!({
            "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
            "refreshToken": "rt.abc123xyz456",
            "idToken": "id.abc123xyz456",
            "tokenType": "Bearer",
            "expiresIn": 3600,
        });
        return (200, body);
    }

    if path.contains("logout") {
        return (204, json!({}));
    }

    let body = json!({
        "error": {
            "code": "not_implemented",
            "message": "This endpoint is not implemented in the demo.",
        }
    });
    (501, body)
}

fn request_id() -> String {
    let suffix = Alphanumeric
        .sample_string(&mut rand::rng(), 13)
        .to_lowercase();
    format!("req_{}", suffix)
}
