//! `groupy` is a small toolkit for post-processing GENDF multigroup data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use groupy_utils as utils;

#[doc(inline)]
pub use groupy_gendf as gendf;

#[cfg(feature = "export")]
#[cfg_attr(docsrs, doc(cfg(feature = "export")))]
#[doc(inline)]
pub use groupy_export as export;
