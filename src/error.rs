#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `min` or `remove_min` was called on an empty queue.
    #[error("Queue underflow")]
    Underflow,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
