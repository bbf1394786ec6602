//! Result and Error types for the GENDF module

use std::path::PathBuf;

use crate::parsers::FieldKind;

/// Type alias for `Result<T, gendf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `groupy-gendf`
///
/// Every error aborts the whole parse, no partial evaluation is ever returned.
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// The GENDF tape does not exist, checked before any parsing
    #[error("the GENDF file {path:?} was not found")]
    MissingFile { path: PathBuf },

    /// A fixed-width field could not be decoded as its declared kind
    #[error("failed to decode {text:?} as {kind:?} field")]
    InvalidField { text: String, kind: FieldKind },

    /// The tape has no material records at all
    #[error("no materials found on the tape")]
    NoMaterials,

    /// A section was handed over without a single record
    #[error("section contains no records")]
    EmptySection,

    /// The section header does not identify the section being parsed
    #[error("expected {expected}, found MF{mf} MT{mt}")]
    UnexpectedSection { expected: String, mf: u32, mt: u32 },

    /// Neither neutron nor gamma group counts are given in MF1 MT451
    #[error("both NGN and NGG cannot be zero")]
    NoGroups,

    /// A count field in a control record is negative
    #[error("invalid {name} ({value}) in MF{mf} MT{mt}")]
    InvalidCount {
        name: &'static str,
        value: i64,
        mf: u32,
        mt: u32,
    },

    /// A 1-based group index points outside of the group structure
    #[error("{name} {index} outside of 1..={n_groups} in MF{mf} MT{mt}")]
    GroupOutOfRange {
        name: &'static str,
        index: i64,
        n_groups: usize,
        mf: u32,
        mt: u32,
    },

    /// Unexpected number of values for the declared record size
    #[error("unexpected number of values in MF{mf} MT{mt} (expected {expected}, found {found})")]
    UnexpectedLength {
        mf: u32,
        mt: u32,
        expected: usize,
        found: usize,
    },

    /// The section ran out of lines before all declared records were read
    #[error("MF{mf} MT{mt} ended before all records were read")]
    UnexpectedEndOfSection { mf: u32, mt: u32 },

    /// A reaction uses a different group structure to the energy grid
    #[error("MF{mf} MT{mt} has {found} groups, the energy grid has {expected}")]
    InconsistentGroups {
        mf: u32,
        mt: u32,
        expected: usize,
        found: usize,
    },

    /// A section required to build the evaluation is not on the tape
    #[error("MF{mf} MT{mt} not found")]
    MissingSection { mf: u32, mt: u32 },

    /// More than one background cross section (sigma0) was processed
    #[error("multiple sigma0 values (NZ={nz}) are not yet implemented, found in MF{mf} MT{mt}")]
    MultipleSigmaZero { nz: i64, mf: u32, mt: u32 },

    /// A file type that no section parser exists for
    #[error("MF{mf} is not supported")]
    UnsupportedFile { mf: u32 },
}
