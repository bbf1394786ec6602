//! Section parsers, one per kind of GENDF data
//!
//! Every parser takes the ordered lines of a single section, from the HEAD
//! record through to the SEND record that closes it.
mod energy;
mod outgoing;
mod pointwise;
mod scattering;

pub use energy::read_energy_grid;
pub use outgoing::read_outgoing;
pub use pointwise::read_pointwise;
pub use scattering::read_scattering_matrix;

use crate::error::{Error, Result};
use crate::parsers::ControlRecord;

/// Largest group structure a section may declare
///
/// Comfortably above the biggest standard structures (UKAEA 1102 groups).
/// Dense arrays are sized from NGN, so anything larger is treated as corrupt.
pub const MAX_GROUPS: usize = 2000;

/// Decode the HEAD record at the start of a section
fn head<S: AsRef<str>>(lines: &[S]) -> Result<ControlRecord> {
    let first = lines.first().ok_or(Error::EmptySection)?;
    ControlRecord::from_line(first.as_ref())
}

/// Group count from the NGN field of a section HEAD
fn group_count(head: &ControlRecord) -> Result<usize> {
    let n_groups = head.count(head.n2, "NGN")?;
    if n_groups > MAX_GROUPS {
        return Err(Error::InvalidCount {
            name: "NGN",
            value: head.n2,
            mf: head.mf,
            mt: head.mt,
        });
    }
    Ok(n_groups)
}

/// Get a line by index, running off the end is an error for the section
fn line<'a, S: AsRef<str>>(
    lines: &'a [S],
    index: usize,
    head: &ControlRecord,
) -> Result<&'a str> {
    lines
        .get(index)
        .map(|l| l.as_ref())
        .ok_or(Error::UnexpectedEndOfSection {
            mf: head.mf,
            mt: head.mt,
        })
}

/// Convert a 1-based group index to an array index
fn group_index(
    index: i64,
    n_groups: usize,
    name: &'static str,
    head: &ControlRecord,
) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if (1..=n_groups).contains(&i) => Ok(i - 1),
        _ => Err(Error::GroupOutOfRange {
            name,
            index,
            n_groups,
            mf: head.mf,
            mt: head.mt,
        }),
    }
}
