use serde_json::{Map, Value};

use crate::error::FormError;

pub const CONNECTION_ERROR: &str = "Error connecting to backend";

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Failed { error: String },
    Predicted(Prediction),
}

/// Values are whatever the backend sent, untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    pub crop: Value,
    pub harvest_days: Value,
    pub maturity_stage: Value,
}

impl PredictionResult {
    pub fn connection_error() -> Self {
        PredictionResult::Failed {
            error: CONNECTION_ERROR.to_string(),
        }
    }

    /// `None` for a falsy body (`null`, `false`, `0`, `""`), which shows nothing.
    /// Any other non-object body has no fields to read and renders them empty.
    pub fn from_slice(body: &[u8]) -> Result<Option<Self>, FormError> {
        let value: Value = serde_json::from_slice(body)?;

        let result = match value {
            Value::Object(object) => Self::from_object(object),
            other if !is_truthy(&other) => return Ok(None),
            _ => PredictionResult::Predicted(Prediction::default()),
        };

        Ok(Some(result))
    }

    fn from_object(mut object: Map<String, Value>) -> Self {
        match object.remove("error") {
            Some(error) if is_truthy(&error) => PredictionResult::Failed {
                error: display_value(&error),
            },
            _ => PredictionResult::Predicted(Prediction {
                crop: object.remove("crop").unwrap_or_default(),
                harvest_days: object.remove("harvest_days").unwrap_or_default(),
                maturity_stage: object.remove("maturity_stage").unwrap_or_default(),
            }),
        }
    }
}

/// `""`, `0`, `false` and `null` are falsy, everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings without quotes, numbers as written, nothing for `null` and booleans.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(_) => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(display_value).collect(),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> PredictionResult {
        PredictionResult::from_slice(value.to_string().as_bytes())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_prediction() {
        let result = parse(json!({
            "crop": "Wheat",
            "harvest_days": 90,
            "maturity_stage": "Flowering"
        }));

        assert_eq!(
            result,
            PredictionResult::Predicted(Prediction {
                crop: json!("Wheat"),
                harvest_days: json!(90),
                maturity_stage: json!("Flowering"),
            })
        );
    }

    #[test]
    fn test_error() {
        assert_eq!(
            parse(json!({ "error": "Invalid input" })),
            PredictionResult::Failed {
                error: "Invalid input".to_string()
            }
        );
    }

    #[test]
    fn test_falsy_error_is_ignored() {
        let result = parse(json!({ "error": "", "crop": "rice" }));

        assert!(matches!(
            result,
            PredictionResult::Predicted(Prediction { ref crop, .. }) if crop == "rice"
        ));
    }

    #[test]
    fn test_missing_fields_default_to_null() {
        assert_eq!(
            parse(json!({})),
            PredictionResult::Predicted(Prediction::default())
        );
    }

    #[test]
    fn test_malformed_body() {
        assert!(PredictionResult::from_slice(b"<html>500</html>").is_err());
        assert!(PredictionResult::from_slice(b"{\"crop\": ").is_err());
        assert!(PredictionResult::from_slice(b"").is_err());
    }

    #[test]
    fn test_falsy_body_is_no_result() {
        for body in ["null", "false", "0", "\"\""] {
            assert_eq!(
                PredictionResult::from_slice(body.as_bytes()).unwrap(),
                None,
                "{body}"
            );
        }
    }

    #[test]
    fn test_non_object_body_has_empty_fields() {
        for body in ["\"x\"", "[1]", "[]", "42", "true"] {
            assert_eq!(
                PredictionResult::from_slice(body.as_bytes()).unwrap(),
                Some(PredictionResult::Predicted(Prediction::default())),
                "{body}"
            );
        }
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("Mid")), "Mid");
        assert_eq!(display_value(&json!(121)), "121");
        assert_eq!(display_value(&json!(6.5)), "6.5");
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!(["a", 1])), "a1");
    }
}
