use log::{debug, trace, warn};

use crate::core::ScatteringMatrix;
use crate::error::{Error, Result};
use crate::parsers::{read_values, ControlRecord};

use super::{group_count, group_index, head, line};

/// Parse a transfer matrix from the lines of an MF6 section
///
/// Every source group row is a LIST record followed by `ceil(NW/6)` value
/// lines. The first `NL` values are the flux moments, then `NG2 - 1` blocks
/// of `NL` values for destination groups starting at `IG2LO`.
///
/// The matrix starts as zeros and each row only overwrites its own run of
/// destination groups. Rows are read for as long as more than the closing
/// SEND record remains.
///
/// Fission matrices (MT18) may carry an extra `IG = 0` row with the spectrum
/// for low energy source groups. It has no place in the matrix and is skipped.
pub fn read_scattering_matrix<S: AsRef<str>>(lines: &[S]) -> Result<ScatteringMatrix> {
    let head = head(lines)?;
    head.expect_file(6)?;
    head.expect_single_sigma_zero()?;

    let n_groups = group_count(&head)?;
    let n_legendre = head.count(head.l1, "NL")?;
    // every row starts with NL flux values, so NL is bounded by the data
    if n_legendre == 0 || n_legendre > 6 * lines.len() {
        return Err(Error::InvalidCount {
            name: "NL",
            value: head.l1,
            mf: head.mf,
            mt: head.mt,
        });
    }
    let mut matrix = ScatteringMatrix::new(head.mt, head.za(), n_groups, n_legendre);
    debug!("MF6 MT{}: {n_groups} groups, {n_legendre} moments", head.mt);

    let mut cursor = 1;
    while lines.len() - cursor > 1 {
        let row = ControlRecord::from_line(line(lines, cursor, &head)?)?;
        cursor += 1;

        let ng2 = head.count(row.l1, "NG2")?;
        let nw = head.count(row.n1, "NW")?;

        let n_lines = nw.div_ceil(6);
        if n_lines > lines.len() - cursor {
            return Err(Error::UnexpectedEndOfSection {
                mf: head.mf,
                mt: head.mt,
            });
        }

        if row.n2 == 0 {
            warn!("Skipping IG=0 row of MF6 MT{} ({nw} values)", head.mt);
            cursor += n_lines;
            continue;
        }
        let ig = group_index(row.n2, n_groups, "IG", &head)?;

        // gather the whole row, which can span many lines
        let mut buffer = Vec::with_capacity(n_lines * 6);
        for _ in 0..n_lines {
            buffer.extend(read_values(line(lines, cursor, &head)?)?);
            cursor += 1;
        }
        buffer.truncate(nw);

        let expected = ng2.max(1) * n_legendre;
        if buffer.len() < expected {
            return Err(Error::UnexpectedLength {
                mf: head.mf,
                mt: head.mt,
                expected,
                found: buffer.len(),
            });
        }

        matrix.flux[ig].copy_from_slice(&buffer[..n_legendre]);

        let columns = buffer[n_legendre..expected].chunks_exact(n_legendre);
        for (k, moments) in columns.enumerate() {
            let destination = group_index(row.l2 + k as i64, n_groups, "IG2LO", &head)?;
            matrix.values[ig][destination].copy_from_slice(moments);
        }

        matrix.temperature = row.c1;
        trace!("Row {:<3}     = {:?}", ig + 1, &buffer[..expected]);
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::cards::{cont, send, values};

    /// Row record for source `ig` with destination blocks from `ig2lo`
    fn row(ig: i64, ig2lo: i64, n_legendre: usize, blocks: &[&[f64]]) -> Vec<String> {
        let mut data = vec![0.25; n_legendre];
        for block in blocks {
            data.extend_from_slice(block);
        }
        let ng2 = blocks.len() as i64 + 1;
        let mut lines = vec![cont(
            [293.0, 0.0],
            [ng2, ig2lo, data.len() as i64, ig],
            9237,
            6,
            2,
        )];
        lines.extend(data.chunks(6).map(|c| values(c, 9237, 6, 2)));
        lines
    }

    fn section(n_groups: i64, n_legendre: i64, rows: Vec<Vec<String>>) -> Vec<String> {
        let mut lines = vec![cont([92238.0, 236.0058], [n_legendre, 1, 0, n_groups], 9237, 6, 2)];
        lines.extend(rows.into_iter().flatten());
        lines.push(send(9237, 6));
        lines
    }

    #[test]
    fn run_length_rows() {
        let lines = section(
            3,
            2,
            vec![
                row(1, 1, 2, &[&[1.0, 0.1]]),
                row(2, 1, 2, &[&[2.0, 0.2], &[3.0, 0.3]]),
                row(3, 2, 2, &[&[4.0, 0.4], &[5.0, 0.5]]),
            ],
        );
        let matrix = read_scattering_matrix(&lines).unwrap();
        assert_eq!(matrix.mt, 2);
        assert_eq!(matrix.n_groups, 3);
        assert_eq!(matrix.n_legendre, 2);
        assert_eq!(matrix.temperature, 293.0);

        assert_eq!(matrix.flux[1], vec![0.25, 0.25]);
        assert_eq!(matrix.values[0][0], vec![1.0, 0.1]);
        assert_eq!(matrix.values[1][0], vec![2.0, 0.2]);
        assert_eq!(matrix.values[1][1], vec![3.0, 0.3]);
        assert_eq!(matrix.values[2][1], vec![4.0, 0.4]);
        assert_eq!(matrix.values[2][2], vec![5.0, 0.5]);

        // everything outside of the runs is zero
        assert_eq!(matrix.values[0][1], vec![0.0, 0.0]);
        assert_eq!(matrix.values[0][2], vec![0.0, 0.0]);
        assert_eq!(matrix.values[1][2], vec![0.0, 0.0]);
        assert_eq!(matrix.values[2][0], vec![0.0, 0.0]);
    }

    #[test]
    fn rows_spanning_many_lines() {
        // 5 moments, 3 destinations -> 20 values over 4 lines
        let blocks: Vec<Vec<f64>> = (1..=3)
            .map(|d| (0..5).map(|l| d as f64 + l as f64 * 0.125).collect())
            .collect();
        let refs: Vec<&[f64]> = blocks.iter().map(|b| b.as_slice()).collect();
        let lines = section(4, 5, vec![row(4, 2, 5, &refs)]);
        let matrix = read_scattering_matrix(&lines).unwrap();
        assert_eq!(matrix.values[3][1], blocks[0]);
        assert_eq!(matrix.values[3][2], blocks[1]);
        assert_eq!(matrix.values[3][3], blocks[2]);
        assert_eq!(matrix.values[3][0], vec![0.0; 5]);
        assert!(matrix.values[..3].iter().flatten().flatten().all(|v| *v == 0.0));
    }

    #[test]
    fn destination_outside_matrix() {
        let lines = section(2, 1, vec![row(2, 2, 1, &[&[1.0], &[2.0]])]);
        assert!(matches!(
            read_scattering_matrix(&lines),
            Err(Error::GroupOutOfRange { name: "IG2LO", index: 3, .. })
        ));
    }

    #[test]
    fn source_outside_matrix() {
        let lines = section(2, 1, vec![row(3, 1, 1, &[&[1.0]])]);
        assert!(matches!(
            read_scattering_matrix(&lines),
            Err(Error::GroupOutOfRange { name: "IG", index: 3, .. })
        ));
    }

    #[test]
    fn fission_spectrum_row_is_skipped() {
        let lines = section(
            2,
            1,
            vec![
                row(0, 1, 1, &[&[0.6], &[0.4]]),
                row(2, 1, 1, &[&[1.0], &[2.0]]),
            ],
        );
        let matrix = read_scattering_matrix(&lines).unwrap();
        assert_eq!(matrix.values[1][0], vec![1.0]);
        assert_eq!(matrix.values[1][1], vec![2.0]);
        assert_eq!(matrix.values[0], vec![vec![0.0], vec![0.0]]);
        assert_eq!(matrix.flux[0], vec![0.0]);
        assert_eq!(matrix.flux[1], vec![0.25]);
    }

    #[test]
    fn row_longer_than_section() {
        let mut lines = section(2, 1, vec![]);
        lines.insert(1, cont([293.0, 0.0], [2, 1, 99_999_999_999, 1], 9237, 6, 2));
        lines.insert(2, values(&[0.25, 1.0], 9237, 6, 2));
        assert!(matches!(
            read_scattering_matrix(&lines),
            Err(Error::UnexpectedEndOfSection { mf: 6, mt: 2 })
        ));
    }

    #[test]
    fn oversized_header() {
        let lines = section(99_999_999_999, 1, vec![row(1, 1, 1, &[&[1.0]])]);
        assert!(matches!(
            read_scattering_matrix(&lines),
            Err(Error::InvalidCount { name: "NGN", value: 99_999_999_999, .. })
        ));

        let lines = section(2, 99_999_999_999, vec![row(1, 1, 1, &[&[1.0]])]);
        assert!(matches!(
            read_scattering_matrix(&lines),
            Err(Error::InvalidCount { name: "NL", .. })
        ));
    }

    #[test]
    fn short_row() {
        let mut lines = section(2, 1, vec![row(1, 1, 1, &[&[1.0], &[2.0]])]);
        // claim NW=2 so only one value line is read for an NG2=3 row
        lines[1] = cont([293.0, 0.0], [3, 1, 2, 1], 9237, 6, 2);
        lines[2] = values(&[0.25, 1.0], 9237, 6, 2);
        assert!(matches!(
            read_scattering_matrix(&lines),
            Err(Error::UnexpectedLength { expected: 3, .. })
        ));
    }

    #[test]
    fn truncated_section() {
        let mut lines = section(2, 5, vec![row(1, 1, 5, &[&[1.0; 5]])]);
        lines.remove(2);
        lines.pop();
        assert!(matches!(
            read_scattering_matrix(&lines),
            Err(Error::UnexpectedEndOfSection { mf: 6, mt: 2 })
        ));
    }

    #[test]
    fn zero_legendre_order() {
        let lines = section(2, 0, vec![]);
        assert!(matches!(
            read_scattering_matrix(&lines),
            Err(Error::InvalidCount { name: "NL", .. })
        ));
    }
}
