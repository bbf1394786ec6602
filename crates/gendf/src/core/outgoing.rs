use serde::Serialize;

/// Outgoing energy distribution from an MF5 section
///
/// Typically the prompt fission neutron spectrum (MT18), which is a single
/// group-independent spectrum.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OutgoingDistribution {
    /// Reaction type
    pub mt: u32,
    /// Isotope identifier (Z*1000 + A)
    pub za: u32,
    /// Number of groups
    pub n_groups: usize,
    /// Number of Legendre moments, only the first is used
    pub n_legendre: usize,
    /// Temperature in K
    pub temperature: f64,
    /// Value for every outgoing group
    pub values: Vec<f64>,
}

impl std::fmt::Display for OutgoingDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "MT{} distribution, {} groups at {} K",
            self.mt, self.n_groups, self.temperature
        )
    }
}
