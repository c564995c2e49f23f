use thiserror::Error;

/// Parse failures for the string-typed inputs hosts forward to the controller.
///
/// Controller operations themselves never fail: an unknown chip or an
/// out-of-range index is skipped without calling the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChipSetError {
    #[error("unrecognized navigation key: {0:?}")]
    UnrecognizedKey(String),
    #[error("unrecognized event source: {0:?}")]
    UnrecognizedSource(String),
}
