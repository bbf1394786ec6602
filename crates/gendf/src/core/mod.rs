// Modules under core, split into files for convenience
mod energy;
mod outgoing;
mod pointwise;
mod scattering;

// Re-exports of the key public data structures
pub use energy::{EnergyGrid, Particle};
pub use outgoing::OutgoingDistribution;
pub use pointwise::Pointwise;
pub use scattering::ScatteringMatrix;
