//! Fixed-width card image decoding

// nom parser combinators
use nom::combinator::{all_consuming, map};

use crate::error::{Error, Result};
use crate::parsers::columns;
use crate::parsers::number::{endf_f64, endf_i64};

/// Kind of value expected in a fixed-width field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Fortran `G11.0`/`E11.0` style real, exponent character optional
    Real,
    /// Fortran `In` style integer
    Integer,
}

/// A single decoded field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    /// Decoded real value
    Real(f64),
    /// Decoded integer value
    Integer(i64),
}

impl Field {
    /// Value as a float, whatever the field kind
    pub fn as_f64(&self) -> f64 {
        match self {
            Field::Real(value) => *value,
            Field::Integer(value) => *value as f64,
        }
    }

    /// Value as an integer, reals are truncated
    pub fn as_i64(&self) -> i64 {
        match self {
            Field::Real(value) => *value as i64,
            Field::Integer(value) => *value,
        }
    }
}

/// Column layout of a card image line
///
/// An ordered list of field widths and kinds, equivalent to a Fortran format
/// statement for reading.
///
/// | Layout              | Fortran format                |
/// | ------------------- | ----------------------------- |
/// | [Layout::CONTROL]   | `(2G11.0,4I11,I4,I2,I3,I5)`   |
/// | [Layout::VALUES]    | `(6G11.0)`                    |
/// | [Layout::PAIR]      | `(2G11.0)`                    |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout(&'static [(usize, FieldKind)]);

impl Layout {
    /// Control record: C1, C2, L1, L2, N1, N2, MAT, MF, MT, NS
    pub const CONTROL: Layout = Layout(&[
        (11, FieldKind::Real),
        (11, FieldKind::Real),
        (11, FieldKind::Integer),
        (11, FieldKind::Integer),
        (11, FieldKind::Integer),
        (11, FieldKind::Integer),
        (4, FieldKind::Integer),
        (2, FieldKind::Integer),
        (3, FieldKind::Integer),
        (5, FieldKind::Integer),
    ]);

    /// Six reals per line, the usual list continuation
    pub const VALUES: Layout = Layout(&[(11, FieldKind::Real); 6]);

    /// Two reals, used for the flux/value pairs of pointwise data
    pub const PAIR: Layout = Layout(&[(11, FieldKind::Real); 2]);

    /// Number of fields in the layout
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Layout has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.0.iter().map(|(width, _)| *width).collect()
    }
}

/// Decode one line into the fields of a layout
///
/// Blank fields, including any beyond the end of a short line, are zero.
///
/// ```rust
/// # use groupy_gendf::{decode_line, Field, Layout};
/// let fields = decode_line(" 1.000000-5 2.000000+7", &Layout::PAIR).unwrap();
/// assert_eq!(fields, vec![Field::Real(1.0e-5), Field::Real(2.0e7)]);
/// ```
pub fn decode_line(line: &str, layout: &Layout) -> Result<Vec<Field>> {
    columns(line, &layout.widths())
        .into_iter()
        .zip(layout.0.iter())
        .map(|(text, (_, kind))| decode_field(text, *kind))
        .collect()
}

/// Decode a line of up to six reals
pub fn read_values(line: &str) -> Result<Vec<f64>> {
    Ok(decode_line(line, &Layout::VALUES)?
        .iter()
        .map(Field::as_f64)
        .collect())
}

/// Decode only the MAT, MF and MT identifiers in columns 67-75
///
/// Works for any line on a tape, whatever is in the data columns.
pub fn read_identifiers(line: &str) -> Result<(i32, u32, u32)> {
    let ids = columns(line, &[66, 4, 2, 3])
        .into_iter()
        .skip(1)
        .map(|text| decode_field(text, FieldKind::Integer).map(|f| (f.as_i64(), text)))
        .collect::<Result<Vec<_>>>()?;

    let invalid = |text: &str| Error::InvalidField {
        text: text.to_string(),
        kind: FieldKind::Integer,
    };
    let (mat, mf, mt) = (ids[0], ids[1], ids[2]);
    Ok((
        i32::try_from(mat.0).map_err(|_| invalid(mat.1))?,
        u32::try_from(mf.0).map_err(|_| invalid(mf.1))?,
        u32::try_from(mt.0).map_err(|_| invalid(mt.1))?,
    ))
}

/// Decode a single field of known kind
fn decode_field(text: &str, kind: FieldKind) -> Result<Field> {
    let value = text.trim();

    let decoded = match kind {
        FieldKind::Real if value.is_empty() => return Ok(Field::Real(0.0)),
        FieldKind::Integer if value.is_empty() => return Ok(Field::Integer(0)),
        FieldKind::Real => all_consuming(map(endf_f64, Field::Real))(value),
        FieldKind::Integer => all_consuming(map(endf_i64, Field::Integer))(value),
    };

    decoded.map(|(_, field)| field).map_err(|_| Error::InvalidField {
        text: text.to_string(),
        kind,
    })
}
