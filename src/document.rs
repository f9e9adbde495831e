//! Assembles the whole output file and writes it in one go.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::header::Header;
use crate::render::render_definition;
use std::path::Path;

/// Header followed by one definition per arity, in increasing order.
pub fn render_document(alphabet: &Alphabet, header: &Header) -> Result<String> {
    let mut text = header.render(alphabet.len());
    for arity in alphabet.arities() {
        text.push_str(&render_definition(alphabet, arity)?);
    }
    Ok(text)
}

/// Creates or truncates `path` with `text` in a single write.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

/// Renders the document and writes it to `path`. Nothing touches the disk
/// unless rendering succeeds. Returns the number of definitions written.
pub fn generate(path: &Path, alphabet: &Alphabet, header: &Header) -> Result<usize> {
    let text = render_document(alphabet, header)?;
    write_document(path, &text)?;
    let count = alphabet.arities().len();
    log::info!(
        "wrote {count} curry functions ({} bytes) to {}",
        text.len(),
        path.display()
    );
    Ok(count)
}
