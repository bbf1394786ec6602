//! Module for reading GENDF multigroup data tapes
//!
//! GENDF is the fixed-column card image format written by the GROUPR module of
//! NJOY, containing group-averaged nuclear data for one or more materials.
//!
//! - [Gendf] - Primary data structure containing the parsed material data
//!
//! Every material is read into one of the following blocks:
//!
//! | Data block             | File | Description                              |
//! | ---------------------- | ---- | ---------------------------------------- |
//! | [EnergyGrid]           | MF1  | group boundaries, sigma0, temperature    |
//! | [Pointwise]            | MF3  | group-wise cross sections by MT          |
//! | [OutgoingDistribution] | MF5  | outgoing energy spectra by MT            |
//! | [ScatteringMatrix]     | MF6  | Legendre moment transfer matrices by MT  |
//!
//! Any other file type on the material is an error. Only a single sigma0 is
//! supported.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use groupy_gendf::Gendf;
//! // Read the first material on the tape into the core data structure
//! let gendf = Gendf::from_file("/path/to/tape91").unwrap();
//!
//! // Find the elastic scattering matrix
//! let matrix = gendf.get_matrix(2).expect("MT2 not found");
//!
//! // P0 moment as a dense [source][destination] array
//! let p0 = matrix.moment(0);
//! ```
//!
//! # Lower level access
//!
//! The section parsers work on the lines of a single section, from the HEAD
//! record to the SEND record, so they can be used without the [Tape] splitter.
//!
//! ```rust
//! # use groupy_gendf::{read_pointwise, EvaluationSource, Tape};
//! let tape = Tape::from_file("./data/one_group.gendf").unwrap();
//! let material = tape.first_material().unwrap();
//!
//! let lines = material.section(3, 2).unwrap();
//! let elastic = read_pointwise(lines).unwrap();
//! assert_eq!(elastic.values, vec![20.436]);
//! ```

mod core;
mod error;
mod gendf;
mod parsers;
mod reader;
mod tape;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use gendf::{FileKind, Gendf};

#[doc(inline)]
pub use tape::{EvaluationSource, Material, Tape};

#[doc(inline)]
pub use core::*;

#[doc(inline)]
pub use parsers::{
    decode_line, read_identifiers, read_values, ControlRecord, Field, FieldKind, Layout,
};

#[doc(inline)]
pub use reader::{
    read_energy_grid, read_outgoing, read_pointwise, read_scattering_matrix, MAX_GROUPS,
};
