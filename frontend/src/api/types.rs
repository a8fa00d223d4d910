use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body the authentication service may attach to a rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RejectionBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl RejectionBody {
    /// Message to surface verbatim, if the body carried a usable one.
    pub fn from_body(raw: &str) -> Option<String> {
        serde_json::from_str::<RejectionBody>(raw)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("sign-in rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("request failed: {0}")]
    Transport(String),
}

impl SignInError {
    pub fn rejected(status: u16, message: Option<&str>) -> Self {
        Self::Rejected {
            status,
            message: message.map(str::to_string),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
