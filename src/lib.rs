//! Generates a Swift source file with `curry` overloads for every arity from
//! two up to one less than the size of the type-variable alphabet.
//!
//! ```text
//! public func curry<A, B, R>(_ f: @escaping (A, B) -> R) -> (A) -> (B) -> R {
//!     return { a in { b in f(a, b) } }
//! }
//! ```

pub mod alphabet;
pub mod body;
pub mod cli;
pub mod document;
pub mod error;
pub mod header;
pub mod render;
pub mod signature;

pub use alphabet::Alphabet;
pub use body::Body;
pub use document::{generate, render_document, write_document};
pub use error::{Error, Result};
pub use header::Header;
pub use render::{render_definition, Definition};
pub use signature::Signature;

use chrono::Local;

/// Runs one generation pass for the parsed command line, with today's date
/// and `script` as the generating program.
pub fn run(cli: &cli::Cli, script: Option<String>) -> Result<usize> {
    let alphabet = Alphabet::standard()?;
    let script = script.ok_or(Error::MissingField("script"))?;
    let header = Header::for_path(
        &cli.file_path,
        cli.project.as_str(),
        cli.author.as_str(),
        Local::now().date_naive(),
        script,
    )?;
    generate(&cli.file_path, &alphabet, &header)
}
