use thiserror::Error;

/// Errors surfaced by the cart store.
///
/// Cart operations themselves always succeed; the only failure is losing the
/// actor that owns the cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
