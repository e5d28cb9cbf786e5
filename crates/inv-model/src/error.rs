use thiserror::Error;

/// A wire enum holds a value outside its closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for {kind}")]
pub struct InvalidEnumValue {
    pub kind: &'static str,
    pub value: String,
}
