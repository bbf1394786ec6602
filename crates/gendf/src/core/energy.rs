use groupy_utils::{f, ValueExt};
use serde::Serialize;

/// Particle type of a group structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Particle {
    /// Neutron groups (NGN > 0)
    #[default]
    Neutron,
    /// Gamma groups (NGG > 0)
    Gamma,
}

impl std::fmt::Display for Particle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Particle::Neutron => "neutron",
            Particle::Gamma => "gamma",
        };
        write!(f, "{s}")
    }
}

/// Group structure from the MF1 MT451 section
///
/// For example, a 30 group neutron structure for U-238:
///
/// ```text
///  9.223800+4 2.360058+2          0          1         -1          19237 1451    1
///  2.930000+2 0.000000+0         30          0         33          09237 1451    2
///  0.000000+0 1.00000+10 1.390000-4 3.255000-4 7.624000-4 1.785000-39237 1451    3
///  ...
///  3.099000+6 7.259000+6 1.700000+7                                 9237 1451    8
/// ```
///
/// The first value is a placeholder for the title, followed by sigma0 and then
/// the group boundaries in eV.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EnergyGrid {
    /// Isotope identifier (Z*1000 + A)
    pub za: u32,
    /// Atomic weight ratio
    pub awr: f64,
    /// Particle type of the groups
    pub particle: Particle,
    /// Background cross section
    pub sigma0: f64,
    /// Temperature in K
    pub temperature: f64,
    /// Number of groups
    pub n_groups: usize,
    /// Group boundaries in eV, `n_groups + 1` values
    pub boundaries: Vec<f64>,
}

impl EnergyGrid {
    /// Lowest group boundary
    pub fn min_energy(&self) -> Option<f64> {
        self.boundaries.first().copied()
    }

    /// Highest group boundary
    pub fn max_energy(&self) -> Option<f64> {
        self.boundaries.last().copied()
    }
}

impl std::fmt::Display for EnergyGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let range = match (self.min_energy(), self.max_energy()) {
            (Some(lo), Some(hi)) => f!("{} - {} eV", lo.sci(5, 2), hi.sci(5, 2)),
            _ => "none".to_string(),
        };
        write!(
            f,
            "{} {} groups ({range}), sigma0 {}",
            self.n_groups,
            self.particle,
            self.sigma0.sci(5, 2)
        )
    }
}
