use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Json(serde_json::Error),
    /// A field name that does not map to any product field.
    UnknownField(String),
    InvalidQuantity(u32),
    EmptyCart,
    MissingName,
    OutOfRange { what: &'static str, value: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "io error: {}", err),
            CatalogError::Json(err) => write!(f, "malformed catalog data: {}", err),
            CatalogError::UnknownField(name) => write!(f, "unknown product field \"{}\"", name),
            CatalogError::InvalidQuantity(quantity) => write!(f, "quantity must be greater than 0, got {}", quantity),
            CatalogError::EmptyCart => write!(f, "the cart is empty"),
            CatalogError::MissingName => write!(f, "a customer needs a name"),
            CatalogError::OutOfRange { what, value, limit } => {
                write!(f, "{} {} is out of range (must be less than {})", what, value, limit)
            }
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err)
    }
}
