use core::str;
use std::fmt;

use serde::Serialize;

pub const ARG_MISSING: &str = "Required argument is missing";
pub const ARG_MALFORMED: &str = "Argument value is malformed";

#[derive(Debug, PartialEq, Serialize)]
pub enum ErrorKind {
    ArgMissing,
    ArgMalformed,
}

pub trait GateError {
    fn default() -> Error;
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Error {
    pub message: String,
    pub source: ErrorKind,
}

impl<'a> Error {
    pub fn new(message: &'a str, kind: ErrorKind) -> Self {
        Error {
            message: message.to_string(),
            source: kind,
        }
    }
}

pub struct ArgMissingError;
impl GateError for ArgMissingError {
    fn default() -> Error {
        Error::new(ARG_MISSING, ErrorKind::ArgMissing)
    }
}

pub struct ArgMalformedError;
impl GateError for ArgMalformedError {
    fn default() -> Error {
        Error::new(ARG_MALFORMED, ErrorKind::ArgMalformed)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ErrorKind {}

impl<'a> std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }

    fn cause(&self) -> Option<&dyn std::error::Error> {
        self.source()
    }
}
