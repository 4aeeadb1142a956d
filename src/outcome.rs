use crate::error::FetchError;
use log::warn;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Fall back to `T::default()` and keep rendering.
    Degrade,
    /// Give up on the request.
    Fail,
}

impl FromStr for OnFailure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degrade" => Ok(OnFailure::Degrade),
            "fail" => Ok(OnFailure::Fail),
            _ => Err("expected \"degrade\" or \"fail\"".to_owned()),
        }
    }
}

/// Result of a downstream fetch as seen by page rendering.
#[derive(Debug)]
pub enum Fetched<T> {
    Ok(T),
    Degraded(T, FetchError),
    Failed(FetchError),
}

impl<T: Default> Fetched<T> {
    pub fn new(what: &str, result: Result<T, FetchError>, policy: OnFailure) -> Self {
        match result {
            Ok(value) => Fetched::Ok(value),
            Err(err) => {
                warn!("Get {} error: {}", what, err);
                match policy {
                    OnFailure::Degrade => Fetched::Degraded(T::default(), err),
                    OnFailure::Fail => Fetched::Failed(err),
                }
            }
        }
    }
}

impl<T> Fetched<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Fetched::Degraded(..))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Fetched::Ok(value) | Fetched::Degraded(value, _) => Some(value),
            Fetched::Failed(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, FetchError> {
        match self {
            Fetched::Ok(value) | Fetched::Degraded(value, _) => Ok(value),
            Fetched::Failed(err) => Err(err),
        }
    }
}
