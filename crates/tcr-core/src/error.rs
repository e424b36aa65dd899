use thiserror::Error;

pub type TcrResult<T> = Result<T, TcrError>;

/// Errors shared by every crate of the workspace.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TcrError {
    /// User-entered text that should hold a finite number.
    #[error("Cannot read {what} from '{text}'")]
    Unparsable { what: String, text: String },
}
