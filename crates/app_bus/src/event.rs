use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Current envelope schema version stamped on every published event.
pub const APP_EVENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Typed envelope delivered to bus subscribers.
pub struct AppEvent {
    /// Envelope schema version.
    pub schema_version: u32,
    /// Topic identifier (`app.<app_id>.<channel>.v1`).
    pub topic: String,
    /// JSON payload for the event.
    pub payload: Value,
    /// Bus-wide publish counter, strictly increasing per bus instance.
    pub sequence: u64,
}

impl AppEvent {
    /// Creates a current-version event.
    pub fn new(topic: impl Into<String>, payload: Value, sequence: u64) -> Self {
        Self {
            schema_version: APP_EVENT_SCHEMA_VERSION,
            topic: topic.into(),
            payload,
            sequence,
        }
    }

    /// Deserializes the payload into a typed request.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.payload)
    }
}
