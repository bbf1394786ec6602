use log::trace;

use crate::error::{Error, Result};
use crate::parsers::record::{decode_line, Field, FieldKind, Layout};

/// The control record that starts every GENDF record
///
/// Uses the ENDF CONT naming. The MAT/MF/MT identifiers and sequence number
/// occupy the last 14 columns of every line.
///
/// ```text
/// [MAT, MF, MT / C1, C2, L1, L2, N1, N2] CONT
/// ```
///
/// Sections reuse the six data fields for different things:
///
/// | Record        | C1    | C2  | L1  | L2    | N1     | N2  |
/// | ------------- | ----- | --- | --- | ----- | ------ | --- |
/// | section HEAD  | ZA    | AWR | NL  | NZ    | LRFLAG | NGN |
/// | MF1 LIST      | TEMP  | 0   | NGN | NGG   | NW     | 0   |
/// | group LIST    | TEMP  | 0   | NG2 | IG2LO | NW     | IG  |
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlRecord {
    /// First real field
    pub c1: f64,
    /// Second real field
    pub c2: f64,
    /// First integer field
    pub l1: i64,
    /// Second integer field
    pub l2: i64,
    /// Third integer field
    pub n1: i64,
    /// Fourth integer field
    pub n2: i64,
    /// Material number
    pub mat: i32,
    /// File type
    pub mf: u32,
    /// Reaction type
    pub mt: u32,
    /// Sequence number
    pub ns: u32,
}

impl ControlRecord {
    /// Decode a control record from a card image line
    ///
    /// ```rust
    /// # use groupy_gendf::ControlRecord;
    /// let line = " 9.223800+4 2.360058+2          1          1          0         309237 3  1    1";
    /// let head = ControlRecord::from_line(line).unwrap();
    /// assert_eq!(head.c1, 92238.0);
    /// assert_eq!((head.mat, head.mf, head.mt), (9237, 3, 1));
    /// assert_eq!(head.n2, 30);
    /// ```
    pub fn from_line(line: &str) -> Result<Self> {
        let fields = decode_line(line, &Layout::CONTROL)?;
        let record = Self::try_from(fields.as_slice())?;
        trace!("{record:?}");
        Ok(record)
    }

    /// Isotope identifier from the first field of a section HEAD
    pub fn za(&self) -> u32 {
        self.c1.round() as u32
    }

    /// Check the record belongs to the expected file type
    pub fn expect_file(&self, mf: u32) -> Result<()> {
        if self.mf != mf {
            return Err(Error::UnexpectedSection {
                expected: format!("MF{mf}"),
                mf: self.mf,
                mt: self.mt,
            });
        }
        Ok(())
    }

    /// Check the record belongs to the expected section
    pub fn expect_section(&self, mf: u32, mt: u32) -> Result<()> {
        if self.mf != mf || self.mt != mt {
            return Err(Error::UnexpectedSection {
                expected: format!("MF{mf} MT{mt}"),
                mf: self.mf,
                mt: self.mt,
            });
        }
        Ok(())
    }

    /// Only one sigma0 (NZ in L2 of a section HEAD) is supported
    pub fn expect_single_sigma_zero(&self) -> Result<()> {
        if self.l2 != 1 {
            return Err(Error::MultipleSigmaZero {
                nz: self.l2,
                mf: self.mf,
                mt: self.mt,
            });
        }
        Ok(())
    }

    /// Interpret one of the integer fields as a count
    pub(crate) fn count(&self, value: i64, name: &'static str) -> Result<usize> {
        usize::try_from(value).map_err(|_| Error::InvalidCount {
            name,
            value,
            mf: self.mf,
            mt: self.mt,
        })
    }
}

impl TryFrom<&[Field]> for ControlRecord {
    type Error = Error;

    fn try_from(fields: &[Field]) -> Result<Self> {
        if fields.len() != Layout::CONTROL.len() {
            return Err(Error::UnexpectedLength {
                mf: 0,
                mt: 0,
                expected: Layout::CONTROL.len(),
                found: fields.len(),
            });
        }

        Ok(Self {
            c1: fields[0].as_f64(),
            c2: fields[1].as_f64(),
            l1: fields[2].as_i64(),
            l2: fields[3].as_i64(),
            n1: fields[4].as_i64(),
            n2: fields[5].as_i64(),
            mat: identifier(fields[6])?,
            mf: identifier(fields[7])?,
            mt: identifier(fields[8])?,
            ns: identifier(fields[9])?,
        })
    }
}

/// Narrow an identifier field, MAT/MF/MT/NS never need 64 bits
fn identifier<T: TryFrom<i64>>(field: Field) -> Result<T> {
    let value = field.as_i64();
    T::try_from(value).map_err(|_| Error::InvalidField {
        text: value.to_string(),
        kind: FieldKind::Integer,
    })
}
