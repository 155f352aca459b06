use serde_json::Error as JsonError;
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    io::Error as IoError,
};

/// Errors from the fallible edges of the crate: option parsing and
/// dictionary loading. Conversion itself never fails.
#[derive(Debug)]
pub enum PinyinError {
    Io(IoError),
    Json(JsonError),
    AnyHow(anyhow::Error),
    Common(String),
}

impl Error for PinyinError {}

impl Display for PinyinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "PinyinError: ")?;
        match self {
            Self::Io(e) => Display::fmt(e, f),
            Self::Json(e) => Display::fmt(e, f),
            Self::AnyHow(e) => Display::fmt(e, f),
            Self::Common(e) => Display::fmt(e, f),
        }
    }
}

impl From<IoError> for PinyinError {
    fn from(value: IoError) -> Self {
        Self::Io(value)
    }
}

impl From<JsonError> for PinyinError {
    fn from(value: JsonError) -> Self {
        Self::Json(value)
    }
}

impl From<anyhow::Error> for PinyinError {
    fn from(value: anyhow::Error) -> Self {
        Self::AnyHow(value)
    }
}

impl From<String> for PinyinError {
    fn from(value: String) -> Self {
        Self::Common(value)
    }
}

impl From<&str> for PinyinError {
    fn from(value: &str) -> Self {
        Self::Common(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed() {
        let e = PinyinError::from("unknown toneType: foo");
        assert_eq!(e.to_string(), "PinyinError: unknown toneType: foo");
    }

    #[test]
    fn json_errors_convert() {
        let e: PinyinError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(matches!(e, PinyinError::Json(_)));
    }
}
