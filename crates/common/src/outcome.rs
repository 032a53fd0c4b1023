//! The success/failure envelope every operation in the system returns.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

const DEFAULT_SUCCESS_MESSAGE: &str = "Operation succeeded";
const DEFAULT_FAILURE_MESSAGE: &str = "Operation failed";

/// Status code vocabulary carried by an [`Outcome`].
///
/// Rendered on the wire and in messages as the code strings
/// `"200"`, `"400"`, `"404"` and `"500"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The operation succeeded.
    #[serde(rename = "200")]
    Ok,

    /// Input validation rejected the request.
    #[serde(rename = "400")]
    BadRequest,

    /// A referenced entity does not exist.
    #[serde(rename = "404")]
    NotFound,

    /// An unexpected lower-layer failure.
    #[serde(rename = "500")]
    Internal,
}

impl Status {
    /// Returns the status as its code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "200",
            Status::BadRequest => "400",
            Status::NotFound => "404",
            Status::Internal => "500",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Two-shape outcome returned instead of an error type for expected failures.
///
/// A success carries the payload; a failure carries only the message and
/// status, so a consumer can never observe partial or stale data on the
/// failure path. The value is immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The operation completed and produced `data`.
    Success {
        data: T,
        message: String,
        status: Status,
    },

    /// The operation failed; no payload is carried.
    Failure { message: String, status: Status },
}

impl<T> Outcome<T> {
    /// Success carrying `data`, with the default message and [`Status::Ok`].
    pub fn success(data: T) -> Self {
        Self::Success {
            data,
            message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            status: Status::Ok,
        }
    }

    /// Success carrying `data` with a caller-supplied message.
    pub fn success_with(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data,
            message: message.into(),
            status: Status::Ok,
        }
    }

    /// Failure with the default message and [`Status::BadRequest`].
    pub fn failure() -> Self {
        Self::Failure {
            message: DEFAULT_FAILURE_MESSAGE.to_string(),
            status: Status::BadRequest,
        }
    }

    /// Failure with a caller-supplied message and status.
    pub fn failure_with(message: impl Into<String>, status: Status) -> Self {
        Self::Failure {
            message: message.into(),
            status,
        }
    }

    /// Returns true on the success shape.
    pub fn succeeded(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The human-readable message, present on both shapes.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { message, .. } => message,
            Outcome::Failure { message, .. } => message,
        }
    }

    /// The status code, present on both shapes.
    pub fn status(&self) -> Status {
        match self {
            Outcome::Success { status, .. } => *status,
            Outcome::Failure { status, .. } => *status,
        }
    }

    /// The payload, present only on success.
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success { data, .. } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    /// Consumes the outcome and returns the payload, if any.
    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success { data, .. } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    /// Transforms the payload type, preserving message and status on both
    /// shapes. A failure passes through unchanged, which is how one layer
    /// propagates another layer's failure when their payload types differ.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success {
                data,
                message,
                status,
            } => Outcome::Success {
                data: f(data),
                message,
                status,
            },
            Outcome::Failure { message, status } => Outcome::Failure { message, status },
        }
    }
}

/// Serializes the flat transport envelope: `succeeded`, `message`, `status`
/// and, only on the success shape, `data`.
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Success {
                data,
                message,
                status,
            } => {
                let mut s = serializer.serialize_struct("Outcome", 4)?;
                s.serialize_field("succeeded", &true)?;
                s.serialize_field("message", message)?;
                s.serialize_field("status", status)?;
                s.serialize_field("data", data)?;
                s.end()
            }
            Outcome::Failure { message, status } => {
                let mut s = serializer.serialize_struct("Outcome", 3)?;
                s.serialize_field("succeeded", &false)?;
                s.serialize_field("message", message)?;
                s.serialize_field("status", status)?;
                s.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_defaults() {
        let outcome = Outcome::success(7);
        assert!(outcome.succeeded());
        assert_eq!(outcome.message(), "Operation succeeded");
        assert_eq!(outcome.status(), Status::Ok);
        assert_eq!(outcome.data(), Some(&7));
    }

    #[test]
    fn failure_defaults_are_stable() {
        // Pure-function guarantee: no hidden state across call sites.
        for _ in 0..3 {
            let outcome = Outcome::<()>::failure();
            assert!(!outcome.succeeded());
            assert_eq!(outcome.message(), "Operation failed");
            assert_eq!(outcome.status(), Status::BadRequest);
            assert_eq!(outcome.data(), None);
        }
    }

    #[test]
    fn failure_with_custom_message_and_status() {
        let outcome = Outcome::<u32>::failure_with("Order 42 not found", Status::NotFound);
        assert!(!outcome.succeeded());
        assert_eq!(outcome.message(), "Order 42 not found");
        assert_eq!(outcome.status(), Status::NotFound);
        assert!(outcome.into_data().is_none());
    }

    #[test]
    fn map_transforms_success_payload() {
        let outcome = Outcome::success_with(21, "halved").map(|n| n * 2);
        assert_eq!(outcome.data(), Some(&42));
        assert_eq!(outcome.message(), "halved");
        assert_eq!(outcome.status(), Status::Ok);
    }

    #[test]
    fn map_preserves_failure_unchanged() {
        let outcome = Outcome::<u32>::failure_with("backend down", Status::Internal);
        let mapped: Outcome<String> = outcome.map(|n| n.to_string());
        assert!(!mapped.succeeded());
        assert_eq!(mapped.message(), "backend down");
        assert_eq!(mapped.status(), Status::Internal);
    }

    #[test]
    fn status_codes_render_as_strings() {
        assert_eq!(Status::Ok.as_str(), "200");
        assert_eq!(Status::BadRequest.as_str(), "400");
        assert_eq!(Status::NotFound.as_str(), "404");
        assert_eq!(Status::Internal.to_string(), "500");
    }

    #[test]
    fn serialized_success_carries_data() {
        let json = serde_json::to_value(Outcome::success(5)).unwrap();
        assert_eq!(json["succeeded"], true);
        assert_eq!(json["message"], "Operation succeeded");
        assert_eq!(json["status"], "200");
        assert_eq!(json["data"], 5);
    }

    #[test]
    fn serialized_failure_has_no_data_field() {
        let json = serde_json::to_value(Outcome::<u32>::failure()).unwrap();
        assert_eq!(json["succeeded"], false);
        assert_eq!(json["status"], "400");
        assert!(json.get("data").is_none());
    }
}
