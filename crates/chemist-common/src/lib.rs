pub mod errors;

pub use errors::{ChemistError, ConfigError};

pub type Result<T> = std::result::Result<T, ChemistError>;
