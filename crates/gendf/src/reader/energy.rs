use log::{debug, trace};

use crate::core::{EnergyGrid, Particle};
use crate::error::{Error, Result};
use crate::parsers::{read_values, ControlRecord};

use super::{head, line};

/// Parse the group structure from the lines of MF1 MT451
///
/// - The HEAD must be MF1 MT451 with a single sigma0
/// - The LIST record gives NGN and NGG, whichever is non-zero decides the
///   particle type and number of groups
/// - The first value line holds a title placeholder, sigma0, and then the
///   first boundaries
/// - Every following line up to the SEND record adds its positive values
///
/// Anything past the `n_groups + 1` boundaries is discarded.
pub fn read_energy_grid<S: AsRef<str>>(lines: &[S]) -> Result<EnergyGrid> {
    let head = head(lines)?;
    head.expect_section(1, 451)?;
    head.expect_single_sigma_zero()?;

    let list = ControlRecord::from_line(line(lines, 1, &head)?)?;
    let ngn = head.count(list.l1, "NGN")?;
    let ngg = head.count(list.l2, "NGG")?;
    let (particle, n_groups) = if ngn > 0 {
        (Particle::Neutron, ngn)
    } else if ngg > 0 {
        (Particle::Gamma, ngg)
    } else {
        return Err(Error::NoGroups);
    };
    debug!("ZA          = {}", head.za());
    debug!("Groups      = {n_groups} {particle}");

    // the title placeholder comes first, then sigma0
    let first = read_values(line(lines, 2, &head)?)?;
    let sigma0 = first[1];
    let mut boundaries: Vec<f64> = first[2..].iter().copied().filter(|v| *v > 0.0).collect();
    debug!("Sigma0      = {sigma0}");

    // skip the SEND record at the end
    let last = lines.len().saturating_sub(1).max(3);
    for l in &lines[3..last] {
        boundaries.extend(read_values(l.as_ref())?.into_iter().filter(|v| *v > 0.0));
    }

    if boundaries.len() < n_groups + 1 {
        return Err(Error::UnexpectedLength {
            mf: head.mf,
            mt: head.mt,
            expected: n_groups + 1,
            found: boundaries.len(),
        });
    }
    boundaries.truncate(n_groups + 1);
    trace!("Boundaries  = {boundaries:?}");

    Ok(EnergyGrid {
        za: head.za(),
        awr: head.c2,
        particle,
        sigma0,
        temperature: list.c1,
        n_groups,
        boundaries,
    })
}
