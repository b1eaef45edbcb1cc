use std::fmt;

#[derive(Debug)]
pub enum OWMError {
    Transport(String),
    InvalidShape(String),
}

impl fmt::Display for OWMError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OWMError::Transport(e) => write!(f, "OWMError::Transport: {}", e),
            OWMError::InvalidShape(e) => write!(f, "OWMError::InvalidShape: invalid response shape: {}", e),
        }
    }
}
impl From<reqwest::Error> for OWMError {
    fn from(e: reqwest::Error) -> Self {
        OWMError::Transport(e.to_string())
    }
}
impl From<serde_json::Error> for OWMError {
    fn from(e: serde_json::Error) -> Self {
        OWMError::InvalidShape(e.to_string())
    }
}
