use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown theme `{0}`, expected `light` or `dark`")]
    UnknownTheme(String),
}
