use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Petalpress operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Petalpress operations
#[derive(Debug)]
pub enum PetalpressError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Content store fetch error
    Fetch(String),
    /// Document decoding error
    Document(String),
    /// Render pipeline error
    Render(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for PetalpressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetalpressError::Io(err) => write!(f, "IO error: {}", err),
            PetalpressError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PetalpressError::Fetch(msg) => write!(f, "Content store error: {}", msg),
            PetalpressError::Document(msg) => write!(f, "Document error: {}", msg),
            PetalpressError::Render(msg) => write!(f, "Render error: {}", msg),
            PetalpressError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for PetalpressError {}

impl From<io::Error> for PetalpressError {
    fn from(err: io::Error) -> Self {
        PetalpressError::Io(err)
    }
}

impl From<String> for PetalpressError {
    fn from(msg: String) -> Self {
        PetalpressError::Generic(msg)
    }
}

impl From<&str> for PetalpressError {
    fn from(msg: &str) -> Self {
        PetalpressError::Generic(msg.to_string())
    }
}
