// All nom parsers and fixed-column helpers split amoung files for organisation
mod control;
mod number;
mod record;

// Re-exports for convenience
pub use control::ControlRecord;
pub use record::{decode_line, read_identifiers, read_values, Field, FieldKind, Layout};

use nom::error::{Error, ErrorKind};

/// More convenient error creation for nom
pub(in crate::parsers) fn cause(s: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(s, ErrorKind::Fail))
}

/// Split a line into fixed-width columns
///
/// Columns are counted in characters. Anything past the end of a short line
/// comes back as an empty column, which decodes as a blank field.
pub(crate) fn columns<'a>(line: &'a str, widths: &[usize]) -> Vec<&'a str> {
    let mut rest = line;
    widths
        .iter()
        .map(|&width| {
            let end = rest
                .char_indices()
                .nth(width)
                .map_or(rest.len(), |(idx, _)| idx);
            let (column, tail) = rest.split_at(end);
            rest = tail;
            column
        })
        .collect()
}
