//! Module for writing GENDF multigroup data to tables
//!
//! A [Gendf](groupy_gendf::Gendf) is flattened into rectangular tables for a
//! fixed list of reaction types:
//!
//! | Table                | Rows x columns          | Content                     |
//! | -------------------- | ----------------------- | --------------------------- |
//! | [pointwise_table()]  | `(G+1) x (1 + n_mt)`    | energy then one column/MT   |
//! | [outgoing_table()]   | `(G+1) x (1 + n_mt)`    | energy then one column/MT   |
//! | [matrix_table()]     | `(G+2) x (G+2)`         | one Legendre moment         |
//!
//! Reaction types missing from the tape are written as zeros, with the
//! exception of MT4. If MT4 is not on the tape it is built as the sum of any
//! partial inelastic levels MT51-91 present.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use groupy_gendf::Gendf;
//! # use groupy_export::{write_csv, write_json, ExportConfig};
//! let gendf = Gendf::from_file("/path/to/tape91").unwrap();
//!
//! // Default reaction types, P0 matrices only
//! let mut config = ExportConfig::default();
//! config.moments = 3;
//!
//! write_csv(&gendf, &config, "./tables", "fe56").unwrap();
//! write_json(&gendf, "./tables/fe56.json").unwrap();
//! ```

mod error;
mod tables;
mod writer;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use tables::{
    matrix_table, outgoing_table, pointwise_table, Table, INELASTIC_PARTIALS, NONELASTIC_MT,
};

#[doc(inline)]
pub use writer::{write_csv, write_json, write_table, ExportConfig};
