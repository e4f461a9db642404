use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{DatasetError, Element};

/// Reads the first `n` values of the dataset stored at `path`.
///
/// Only the first line is read. Whitespace around each token is ignored, so files with or
/// without a trailing newline load identically, and a single trailing `,` is ignored. Tokens past
/// the `n`-th are not parsed.
///
/// # Errors
/// - [`DatasetError::Io`] if the file cannot be opened or read.
/// - [`DatasetError::InvalidToken`] if one of the first `n` tokens is not an integer.
/// - [`DatasetError::Truncated`] if the line holds fewer than `n` tokens.
pub fn load_dataset(path: &Path, n: usize) -> Result<Vec<Element>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::io(path, source))?;
    let mut reader = BufReader::new(file);

    let mut line = String::new();
    reader.read_line(&mut line).map_err(|source| DatasetError::io(path, source))?;

    // a trailing separator ends the data; it does not open an empty token
    let body = line.trim();
    let body = body.strip_suffix(',').unwrap_or(body);

    let mut values = Vec::with_capacity(n);
    let tokens = body.split(',').filter(|_| !body.is_empty());
    for (position, token) in tokens.take(n).enumerate() {
        let token = token.trim();
        let value = token.parse::<Element>().map_err(|_| DatasetError::InvalidToken {
            path: path.to_path_buf(),
            position,
            token: token.to_string(),
        })?;
        values.push(value);
    }

    if values.len() < n {
        return Err(DatasetError::Truncated {
            path: path.to_path_buf(),
            expected: n,
            found: values.len(),
        });
    }

    Ok(values)
}
