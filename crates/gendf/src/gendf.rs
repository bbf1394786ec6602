// Crate types
use crate::core::{EnergyGrid, OutgoingDistribution, Pointwise, ScatteringMatrix};
use crate::error::{Error, Result};
use crate::reader::{read_energy_grid, read_outgoing, read_pointwise, read_scattering_matrix};
use crate::tape::{EvaluationSource, Tape};

// Other libraries
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// File types that have a section parser
///
/// Every file type on a material must be one of these, anything else is
/// rejected rather than ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// MF1, descriptive data and the group structure
    Information,
    /// MF3, group-wise cross sections
    Pointwise,
    /// MF5, outgoing energy distributions
    Outgoing,
    /// MF6, group-to-group transfer matrices
    Scattering,
}

impl TryFrom<u32> for FileKind {
    type Error = Error;

    fn try_from(mf: u32) -> Result<Self> {
        match mf {
            1 => Ok(Self::Information),
            3 => Ok(Self::Pointwise),
            5 => Ok(Self::Outgoing),
            6 => Ok(Self::Scattering),
            _ => Err(Error::UnsupportedFile { mf }),
        }
    }
}

/// Data structure to store a processed GENDF material
///
/// This [Gendf] is the primary data structure containing the parsed file data.
///
/// | Data             | Source | Description                           |
/// | ---------------- | ------ | ------------------------------------- |
/// | [EnergyGrid]     | MF1    | group structure, sigma0, temperature  |
/// | [Pointwise]      | MF3    | group-wise cross sections by MT       |
/// | [OutgoingDistribution] | MF5 | outgoing spectra by MT            |
/// | [ScatteringMatrix] | MF6  | transfer matrices by MT               |
///
/// Reactions are kept in maps ordered by MT. A material without MF5 or MF6
/// data simply has empty maps for them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Gendf {
    /// Material number (MAT)
    pub material: i32,
    /// Title of the evaluation
    pub title: String,
    /// Group structure shared by every reaction
    pub energy: EnergyGrid,
    /// MF3 data by reaction type
    pub pointwise: BTreeMap<u32, Pointwise>,
    /// MF5 data by reaction type
    pub outgoing: BTreeMap<u32, OutgoingDistribution>,
    /// MF6 data by reaction type
    pub matrices: BTreeMap<u32, ScatteringMatrix>,
}

impl Gendf {
    /// Read the first material of a GENDF tape
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    ///
    /// Example
    /// ```rust
    /// # use groupy_gendf::Gendf;
    /// let gendf = Gendf::from_file("./data/one_group.gendf").unwrap();
    /// assert_eq!(gendf.material, 125);
    /// assert_eq!(gendf.energy_boundaries(), &[1.0e-5, 2.0e7]);
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let tape = Tape::from_file(path)?;
        Self::from_source(tape.first_material()?)
    }

    /// Assemble every supported section of an evaluated material
    ///
    /// The group structure from MF1 MT451 is read first, and every other
    /// record must use the same number of groups. Any error aborts the whole
    /// parse.
    pub fn from_source<S: EvaluationSource + ?Sized>(source: &S) -> Result<Self> {
        let mat = source.material_number();
        info!("Parsing MAT{mat} \"{}\"", source.title());

        let energy = source
            .section(1, 451)
            .ok_or(Error::MissingSection { mf: 1, mt: 451 })
            .and_then(read_energy_grid)?;

        let mut gendf = Gendf {
            material: mat,
            title: source.title().to_string(),
            energy,
            ..Default::default()
        };

        for mf in source.file_numbers() {
            let kind = FileKind::try_from(mf)?;
            for mt in source.section_numbers(mf) {
                let lines = source
                    .section(mf, mt)
                    .ok_or(Error::MissingSection { mf, mt })?;
                debug!("MF{mf} MT{mt}: {} lines", lines.len());
                gendf.insert(kind, mf, mt, lines)?;
            }
        }

        info!(
            "Found {} pointwise, {} outgoing, {} matrices",
            gendf.pointwise.len(),
            gendf.outgoing.len(),
            gendf.matrices.len()
        );
        Ok(gendf)
    }

    /// Find pointwise data for a reaction type
    ///
    /// If the reaction exists it is returned as `Some(&Pointwise)`, otherwise
    /// `None`.
    pub fn get_pointwise(&self, mt: u32) -> Option<&Pointwise> {
        self.pointwise.get(&mt)
    }

    /// Find an outgoing distribution for a reaction type
    pub fn get_outgoing(&self, mt: u32) -> Option<&OutgoingDistribution> {
        self.outgoing.get(&mt)
    }

    /// Find a scattering matrix for a reaction type
    pub fn get_matrix(&self, mt: u32) -> Option<&ScatteringMatrix> {
        self.matrices.get(&mt)
    }

    /// Group boundaries in eV
    pub fn energy_boundaries(&self) -> &[f64] {
        &self.energy.boundaries
    }

    /// Number of groups in the structure
    pub fn n_groups(&self) -> usize {
        self.energy.n_groups
    }

    // Parse one section into the slot for its file type
    fn insert<S: AsRef<str>>(
        &mut self,
        kind: FileKind,
        mf: u32,
        mt: u32,
        lines: &[S],
    ) -> Result<()> {
        match kind {
            FileKind::Information if mt == 451 => (),
            FileKind::Information => warn!("Skipping MF1 MT{mt}, only MT451 is used"),
            FileKind::Pointwise => {
                let record = read_pointwise(lines)?;
                self.check_groups(mf, mt, record.n_groups)?;
                self.pointwise.insert(mt, record);
            }
            FileKind::Outgoing => {
                let record = read_outgoing(lines)?;
                self.check_groups(mf, mt, record.n_groups)?;
                self.outgoing.insert(mt, record);
            }
            FileKind::Scattering => {
                let record = read_scattering_matrix(lines)?;
                self.check_groups(mf, mt, record.n_groups)?;
                self.matrices.insert(mt, record);
            }
        }
        Ok(())
    }

    fn check_groups(&self, mf: u32, mt: u32, found: usize) -> Result<()> {
        if found != self.energy.n_groups {
            return Err(Error::InconsistentGroups {
                mf,
                mt,
                expected: self.energy.n_groups,
                found,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Gendf {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let keys = |mts: Vec<&u32>| {
            mts.iter()
                .map(|mt| mt.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        };

        writeln!(f, "MAT{} {}", self.material, self.title)?;
        writeln!(f, "  ZA         : {}", self.energy.za)?;
        writeln!(f, "  groups     : {}", self.energy)?;
        writeln!(f, "  MF3        : {}", keys(self.pointwise.keys().collect()))?;
        writeln!(f, "  MF5        : {}", keys(self.outgoing.keys().collect()))?;
        write!(f, "  MF6        : {}", keys(self.matrices.keys().collect()))
    }
}
