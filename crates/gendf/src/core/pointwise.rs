use serde::Serialize;

/// Group-wise values from an MF3 section
///
/// Cross sections, nubar, and similar quantities with one value per group.
/// Every group record carries the flux used for weighting alongside the value.
///
/// ```text
///  9.223800+4 2.360058+2          1          1          0         309237 3  1    1
///  2.930000+2 0.000000+0          2          0          2          19237 3  1    2
///  1.057475-1 1.105207+1                                            9237 3  1    3
///  ...
/// ```
///
/// Values are stored at the group index given on each record, so groups below
/// a reaction threshold that are never written stay zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Pointwise {
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
    /// Value for every group (barns for cross sections)
    pub values: Vec<f64>,
    /// Weighting flux for every group
    pub flux: Vec<f64>,
}

impl Pointwise {
    /// Create a zeroed record for `n_groups` groups
    pub fn new(mt: u32, za: u32, n_groups: usize, n_legendre: usize) -> Self {
        Self {
            mt,
            za,
            n_groups,
            n_legendre,
            temperature: 0.0,
            values: vec![0.0; n_groups],
            flux: vec![0.0; n_groups],
        }
    }
}

impl std::fmt::Display for Pointwise {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "MT{} pointwise, {} groups at {} K",
            self.mt, self.n_groups, self.temperature
        )
    }
}
