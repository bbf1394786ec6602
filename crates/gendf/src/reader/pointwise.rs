use log::{debug, trace};

use crate::core::Pointwise;
use crate::error::Result;
use crate::parsers::{decode_line, ControlRecord, Layout};

use super::{group_count, group_index, head};

/// Parse group-wise values from the lines of an MF3 section
///
/// Every group is a LIST record followed by a line of `(flux, value)`. The
/// group index comes from the LIST record rather than the order of records,
/// so missing groups are left as zero.
///
/// Reading stops at the record for the last group. The temperature is taken
/// from the last LIST record read.
pub fn read_pointwise<S: AsRef<str>>(lines: &[S]) -> Result<Pointwise> {
    let head = head(lines)?;
    head.expect_file(3)?;
    head.expect_single_sigma_zero()?;

    let n_groups = group_count(&head)?;
    let n_legendre = head.count(head.l1, "NL")?;
    let mut pointwise = Pointwise::new(head.mt, head.za(), n_groups, n_legendre);
    debug!("MF3 MT{}: {n_groups} groups", head.mt);

    // any SEND record is left over as the remainder
    for pair in lines[1..].chunks_exact(2).take(n_groups) {
        let list = ControlRecord::from_line(pair[0].as_ref())?;
        let ig = group_index(list.n2, n_groups, "IG", &head)?;

        let fields = decode_line(pair[1].as_ref(), &Layout::PAIR)?;
        pointwise.flux[ig] = fields[0].as_f64();
        pointwise.values[ig] = fields[1].as_f64();
        pointwise.temperature = list.c1;

        if ig + 1 == n_groups {
            break;
        }
    }
    trace!("Values      = {:?}", pointwise.values);

    Ok(pointwise)
}
