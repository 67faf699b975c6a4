use serde::{Deserialize, Serialize};

/// Uniform success wrapper: `{ "success": true, "message": ..., "data": ... }`.
///
/// Only successes are ever wrapped. Failures travel as the original error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ResultEnvelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResultEnvelope<U> {
        ResultEnvelope {
            success: self.success,
            message: self.message,
            data: f(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_exact_shape() {
        let envelope = ResultEnvelope::ok("Completion created successfully", json!({"id": "cmpl-1"}));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "success": true,
                "message": "Completion created successfully",
                "data": {"id": "cmpl-1"}
            })
        );
    }

    #[test]
    fn map_keeps_message() {
        let envelope = ResultEnvelope::ok("done", 2).map(|n| n * 10);
        assert!(envelope.success);
        assert_eq!(envelope.message, "done");
        assert_eq!(envelope.into_data(), 20);
    }
}
