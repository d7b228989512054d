use crate::error::{PromptCheckError, Result};
use std::io::Read;
use std::path::PathBuf;

pub const STDIN_ARG: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn parse(arg: &str) -> Self {
        if arg == STDIN_ARG {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

pub fn read_input(source: &InputSource) -> Result<String> {
    let bytes = match source {
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
        InputSource::File(path) => {
            if !path.is_file() {
                return Err(PromptCheckError::InputNotFound(path.display().to_string()));
            }
            std::fs::read(path)?
        }
    };
    tracing::debug!(source = %source.label(), bytes = bytes.len(), "read prompt input");
    decode(source, bytes)
}

fn decode(source: &InputSource, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| PromptCheckError::InvalidEncoding(format!("{}: {}", source.label(), e)))
}
