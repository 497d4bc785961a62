use thiserror::Error;

// Failure classes every backend port reports. `Unreachable` covers
// transport-level failures; `Rejected` means the backend answered and
// said no, carrying its own message when it sent one.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("backend unreachable")]
    Unreachable,
    #[error("backend rejected the request")]
    Rejected { message: Option<String> },
}
