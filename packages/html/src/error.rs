use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Failed to parse markup: {0}")]
    Parse(String),

    #[error("Failed to render template: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Invalid root element `{0}`")]
    InvalidRoot(String),

    #[error("Invalid stylesheet at {line}:{column}: {message}")]
    Stylesheet {
        message: String,
        line: u32,
        column: u32,
    },
}

impl From<html_parser::Error> for Error {
    fn from(e: html_parser::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
