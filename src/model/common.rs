use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Generic mutation result returned by most write endpoints
pub struct OperationResult {
    /// Whether the operation succeeded
    #[serde(default)]
    pub result: bool,
    /// Identifier of the created entity, when the endpoint returns one
    #[serde(default)]
    pub id: Option<u64>,
}

impl OperationResult {
    /// Turns a `"result": false` response into a semantic error.
    ///
    /// The API sometimes reports failure inside a 200 response; every write
    /// operation returning this type passes through here before handing the
    /// result to the caller.
    pub fn ensure(self, path: &str) -> Result<Self, AppError> {
        if self.result {
            Ok(self)
        } else {
            Err(AppError::InvalidResponse {
                path: path.to_string(),
                message: "result flag is false".to_string(),
            })
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Variable attached to a subscriber or push website
pub struct Variable {
    /// Variable name
    pub name: String,
    /// Variable type as reported by the API (e.g. "string", "number")
    #[serde(rename = "type", default)]
    pub value_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_passes_through_success() {
        let ok = OperationResult {
            result: true,
            id: Some(5),
        };
        let ensured = ok.ensure("addressbooks").expect("should be Ok");
        assert_eq!(ensured.id, Some(5));
    }

    #[test]
    fn ensure_rejects_false_result() {
        let failed = OperationResult {
            result: false,
            id: None,
        };
        let err = failed.ensure("addressbooks").unwrap_err();
        match err {
            AppError::InvalidResponse { path, .. } => assert_eq!(path, "addressbooks"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
