use serde::Serialize;

/// Group-to-group transfer matrix from an MF6 section
///
/// Each source group is written as a row with only the contiguous run of
/// non-zero destination groups.
///
/// ```text
/// [MAT, 6, MT / TEMP, 0, NG2, IG2LO, NW, IG] LIST
///   flux(NL), matrix(NL) for IG2LO, matrix(NL) for IG2LO+1, ...
/// ```
///
/// - `IG` is the 1-based source group
/// - `IG2LO` is the first destination group of the run
/// - `NG2 - 1` destination groups follow the flux values
///
/// Destination groups outside of the run are zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScatteringMatrix {
    /// Reaction type
    pub mt: u32,
    /// Isotope identifier (Z*1000 + A)
    pub za: u32,
    /// Number of groups
    pub n_groups: usize,
    /// Number of Legendre moments
    pub n_legendre: usize,
    /// Temperature in K
    pub temperature: f64,
    /// Transfer values as `[source][destination][moment]`
    pub values: Vec<Vec<Vec<f64>>>,
    /// Flux moments as `[source][moment]`
    pub flux: Vec<Vec<f64>>,
}

impl ScatteringMatrix {
    /// Create a zeroed matrix for `n_groups` groups and `n_legendre` moments
    pub fn new(mt: u32, za: u32, n_groups: usize, n_legendre: usize) -> Self {
        Self {
            mt,
            za,
            n_groups,
            n_legendre,
            temperature: 0.0,
            values: vec![vec![vec![0.0; n_legendre]; n_groups]; n_groups],
            flux: vec![vec![0.0; n_legendre]; n_groups],
        }
    }

    /// Single value, zero for any index outside of the matrix
    pub fn value(&self, source: usize, destination: usize, moment: usize) -> f64 {
        self.values
            .get(source)
            .and_then(|row| row.get(destination))
            .and_then(|column| column.get(moment))
            .copied()
            .unwrap_or_default()
    }

    /// Dense `[source][destination]` slice of one Legendre moment
    ///
    /// Moments beyond those available are all zero.
    pub fn moment(&self, moment: usize) -> Vec<Vec<f64>> {
        (0..self.n_groups)
            .map(|source| {
                (0..self.n_groups)
                    .map(|destination| self.value(source, destination, moment))
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for ScatteringMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "MT{} matrix, {}x{} groups, P{} at {} K",
            self.mt,
            self.n_groups,
            self.n_groups,
            self.n_legendre.saturating_sub(1),
            self.temperature
        )
    }
}
