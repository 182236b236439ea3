use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{input}': expected one of name, email, role")]
pub struct ParseFieldError {
    pub input: String,
}

impl ParseFieldError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
