//! Crate error type and the JS boundary conversion

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("landmark buffer length {0} is not a multiple of 3")]
    LandmarkBufferLength(usize),

    #[error("face detector call failed: {0}")]
    Detector(String),

    #[error("canvas operation failed: {0}")]
    Canvas(String),

    #[error("malformed region {region}: {reason}")]
    MalformedRegion {
        region: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a thrown JS value for an error message
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
