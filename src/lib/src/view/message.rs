use serde::{Deserialize, Serialize};

/// Error payload of a non-2xx response. The API uses `message`, some
/// middleware answers with `error` instead.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ErrorMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorMessage {
    pub fn message_or_error(&self) -> Option<String> {
        self.message
            .to_owned()
            .or_else(|| self.error.to_owned())
            .filter(|msg| !msg.trim().is_empty())
    }
}
