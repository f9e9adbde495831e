use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Return type `{0}` clashes with a type variable of the alphabet")]
    ReservedClash(char),
    #[error("Alphabet needs at least 3 symbols to curry anything, got {0}")]
    AlphabetTooSmall(usize),
    #[error("Type variable `{0}` must be an ASCII uppercase letter")]
    InvalidSymbol(char),
    #[error("Parameter `{0}` would shadow the curried function `{1}`")]
    TargetShadowed(char, String),
    #[error("Cannot curry {arity} arguments with an alphabet of {size} symbols")]
    ArityOutOfRange { arity: usize, size: usize },
    #[error("Missing value for `{0}`")]
    MissingField(&'static str),
    #[error("Cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
