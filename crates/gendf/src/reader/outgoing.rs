use log::{debug, trace};

use crate::core::OutgoingDistribution;
use crate::error::Result;
use crate::parsers::{read_values, ControlRecord};

use super::{group_count, head, line};

/// Parse an outgoing distribution from the lines of an MF5 section
///
/// The second record gives the temperature, followed by `ceil(n_groups/6)`
/// lines of values. Only strictly positive values are kept, and these fill the
/// distribution in order.
///
/// Unlike the MF3 and MF6 parsers, values are positional rather than placed by
/// an explicit group index.
pub fn read_outgoing<S: AsRef<str>>(lines: &[S]) -> Result<OutgoingDistribution> {
    let head = head(lines)?;
    head.expect_file(5)?;
    head.expect_single_sigma_zero()?;

    let n_groups = group_count(&head)?;
    let n_legendre = head.count(head.l1, "NL")?;
    debug!("MF5 MT{}: {n_groups} groups", head.mt);

    let list = ControlRecord::from_line(line(lines, 1, &head)?)?;

    let mut positive = Vec::with_capacity(n_groups);
    for index in 0..n_groups.div_ceil(6) {
        let values = read_values(line(lines, 2 + index, &head)?)?;
        positive.extend(values.into_iter().filter(|v| *v > 0.0));
    }
    positive.truncate(n_groups);

    let mut values = vec![0.0; n_groups];
    values[..positive.len()].copy_from_slice(&positive);
    trace!("Values      = {values:?}");

    Ok(OutgoingDistribution {
        mt: head.mt,
        za: head.za(),
        n_groups,
        n_legendre,
        temperature: list.c1,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::reader::cards::{cont, send, values};

    fn section(n_groups: i64, data: &[f64]) -> Vec<String> {
        let mut lines = vec![
            cont([92238.0, 236.0058], [1, 1, 0, n_groups], 9237, 5, 18),
            cont([293.0, 0.0], [n_groups, 1, n_groups, 0], 9237, 5, 18),
        ];
        lines.extend(data.chunks(6).map(|c| values(c, 9237, 5, 18)));
        lines.push(send(9237, 5));
        lines
    }

    #[test]
    fn spectrum() {
        let data: Vec<f64> = (1..=8).map(|i| i as f64 * 0.125).collect();
        let outgoing = read_outgoing(&section(8, &data)).unwrap();
        assert_eq!(outgoing.mt, 18);
        assert_eq!(outgoing.za, 92238);
        assert_eq!(outgoing.n_groups, 8);
        assert_eq!(outgoing.n_legendre, 1);
        assert_eq!(outgoing.temperature, 293.0);
        assert_eq!(outgoing.values, data);
    }

    #[test]
    fn zeros_are_skipped() {
        // positional, the zero is dropped and the rest shift down
        let data = [0.5, 0.0, 0.25, 0.125];
        let outgoing = read_outgoing(&section(4, &data)).unwrap();
        assert_eq!(outgoing.values, vec![0.5, 0.25, 0.125, 0.0]);
    }

    #[test]
    fn missing_value_lines() {
        let mut lines = section(12, &[0.5; 12]);
        lines.remove(3);
        lines.pop();
        assert!(matches!(
            read_outgoing(&lines),
            Err(Error::UnexpectedEndOfSection { mf: 5, mt: 18 })
        ));
    }

    #[test]
    fn wrong_file_type() {
        let mut lines = section(4, &[0.5; 4]);
        lines[0] = cont([92238.0, 236.0058], [1, 1, 0, 4], 9237, 3, 18);
        assert!(matches!(
            read_outgoing(&lines),
            Err(Error::UnexpectedSection { mf: 3, mt: 18, .. })
        ));
    }
}
