use crate::common::types::RoomCode;

/// Errors produced by the room engine itself. Transport-level rejections
/// (bad origin, unparsable frames) never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// A join referenced a code with no live room behind it. Surfaced to the
    /// requester only, never broadcast.
    #[error("no room exists with code {0}")]
    RoomNotFound(RoomCode),

    /// The code generator ran out of retries against the live registry.
    #[error("could not generate a free room code")]
    CodeExhausted,
}
