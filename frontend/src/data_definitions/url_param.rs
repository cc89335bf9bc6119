//! Route segments carrying a whole value, CBOR encoded and base64 url-safe.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};

// usable as a route segment: Display, FromStr and Default
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut encoded = Vec::new();
        if ciborium::into_writer(&self.0, &mut encoded).is_ok() {
            write!(f, "{}", URL_SAFE.encode(encoded))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "route segment is not base64: {err}"),
            Self::Cbor(err) => write!(f, "route segment does not decode: {err}"),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE.decode(s.as_bytes()).map_err(UrlParamError::Base64)?;
        let value = ciborium::from_reader(std::io::Cursor::new(bytes)).map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(value))
    }
}
