//! Validation of `POST /analyze` bodies.

use super::error::ApiError;
use serde_json::{Map, Value};

pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 2.0;

/// A validated analyze request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    /// Trimmed, never empty.
    pub transcript: String,
    /// Clamped to `[MIN_TEMPERATURE, MAX_TEMPERATURE]`.
    pub temperature: f64,
}

impl AnalyzeRequest {
    /// Parse a raw body. The body must be a JSON object; `Content-Type` is not checked.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidBody)?;
        let obj = value.as_object().ok_or(ApiError::InvalidBody)?;

        let transcript = transcript_field(obj)?;
        let temperature = match obj.get("temperature") {
            None => MIN_TEMPERATURE,
            Some(v) => clamp_temperature(number_like(v).ok_or(ApiError::InvalidTemperature)?),
        };

        Ok(Self {
            transcript,
            temperature,
        })
    }
}

fn transcript_field(obj: &Map<String, Value>) -> Result<String, ApiError> {
    let raw = match obj.get("transcript") {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(ApiError::InvalidTranscript),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::EmptyTranscript);
    }
    Ok(trimmed.to_string())
}

/// Numbers, booleans and numeric strings are accepted; `null` and NaN are not.
fn number_like(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (!n.is_nan()).then_some(n)
}

pub fn clamp_temperature(t: f64) -> f64 {
    t.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
}
