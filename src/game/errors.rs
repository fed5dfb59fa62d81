use thiserror::Error;

/// Errors that can arise while driving a game session.
///
/// Gameplay refusals (not enough gold, missing item, invalid command) are never
/// errors; they come back as values with a narration attached.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around IO errors from the input reader or the output sink.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while a prompt was waiting for a line.
    #[error("input closed")]
    InputClosed,

    /// Returned when a token does not name a known item.
    #[error("unknown item: {0}")]
    UnknownItem(String),
}
