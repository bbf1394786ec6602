//! Flatten a [Gendf] into rectangular tables

// standard library
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

// external crates
use groupy_gendf::Gendf;
use log::debug;

/// Reaction type for the sum of all inelastic levels
pub const NONELASTIC_MT: u32 = 4;

/// Partial inelastic levels summed into MT4 when it is not on the tape
pub const INELASTIC_PARTIALS: RangeInclusive<u32> = 51..=91;

/// Rectangular table of values with an optional header row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Column names, if any
    pub header: Option<Vec<String>>,
    /// Data rows, all the same length
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    /// Number of data rows, not counting the header
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn n_columns(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Copy of a single column, zero where a row is short
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.get(index).copied().unwrap_or_default())
            .collect()
    }
}

/// Combined pointwise table over a list of reaction types
///
/// One row per group boundary, so `n_groups + 1` rows with the last row a
/// zero sentinel for every reaction. The first column is the energy.
///
/// | Energy | MT1 | MT18 | ... |
/// | ------ | --- | ---- | --- |
///
/// Reactions not on the tape are zero, except MT4 which is built from the
/// partial levels 51-91 when present.
///
/// ```rust
/// # use groupy_gendf::Gendf;
/// # use groupy_export::pointwise_table;
/// let gendf = Gendf::from_file("../gendf/data/one_group.gendf").unwrap();
/// let table = pointwise_table(&gendf, &[2, 18]);
///
/// assert_eq!(table.rows, vec![vec![1.0e-5, 20.436, 0.0], vec![2.0e7, 0.0, 0.0]]);
/// ```
pub fn pointwise_table(gendf: &Gendf, mts: &[u32]) -> Table {
    let records = gendf
        .pointwise
        .iter()
        .map(|(mt, p)| (*mt, p.values.as_slice()))
        .collect();
    group_table(gendf, mts, &records)
}

/// Combined outgoing distribution table over a list of reaction types
///
/// Same layout and fallback rules as [pointwise_table()].
pub fn outgoing_table(gendf: &Gendf, mts: &[u32]) -> Table {
    let records = gendf
        .outgoing
        .iter()
        .map(|(mt, o)| (*mt, o.values.as_slice()))
        .collect();
    group_table(gendf, mts, &records)
}

/// Square table for one Legendre moment of a scattering matrix
///
/// The first row and column are the group boundaries with a zero in the
/// corner. Interior rows are source groups, columns are destination groups.
///
/// ```text
///   0    E0    E1   ...  EG
///   E0   m00   m01  ...  0
///   E1   m10   m11  ...  0
///   ...
///   EG   0     0    ...  0
/// ```
///
/// The last row and column are a zero sentinel to match the boundaries,
/// giving a `(n_groups + 2)` square table. Missing reactions and moments are
/// zero, except MT4 which is the sum of any partial levels 51-91.
pub fn matrix_table(gendf: &Gendf, mt: u32, moment: usize) -> Table {
    let boundaries = gendf.energy_boundaries();
    let n_groups = gendf.n_groups();

    let values = match gendf.get_matrix(mt) {
        Some(matrix) => matrix.moment(moment),
        None if mt == NONELASTIC_MT => {
            let mut sum = vec![vec![0.0; n_groups]; n_groups];
            for (partial, matrix) in gendf.matrices.range(INELASTIC_PARTIALS) {
                debug!("Adding MT{partial} P{moment} to MT{NONELASTIC_MT}");
                for (total, row) in sum.iter_mut().zip(matrix.moment(moment)) {
                    total.iter_mut().zip(row).for_each(|(t, v)| *t += v);
                }
            }
            sum
        }
        None => vec![vec![0.0; n_groups]; n_groups],
    };

    let mut rows = Vec::with_capacity(n_groups + 2);
    rows.push(std::iter::once(0.0).chain(boundaries.iter().copied()).collect());
    for (i, energy) in boundaries.iter().enumerate() {
        let mut row = Vec::with_capacity(n_groups + 2);
        row.push(*energy);
        match values.get(i) {
            Some(interior) => row.extend(interior),
            None => row.extend(std::iter::repeat(0.0).take(n_groups)),
        }
        row.push(0.0);
        rows.push(row);
    }

    Table { header: None, rows }
}

// Shared layout for the pointwise and outgoing tables
fn group_table(gendf: &Gendf, mts: &[u32], records: &BTreeMap<u32, &[f64]>) -> Table {
    let n_groups = gendf.n_groups();

    let mut header = vec!["Energy".to_string()];
    let mut columns = vec![gendf.energy_boundaries().to_vec()];

    for mt in mts {
        header.push(format!("MT{mt}"));

        let mut column = match records.get(mt) {
            Some(values) => values.to_vec(),
            None if *mt == NONELASTIC_MT => {
                let mut sum = vec![0.0; n_groups];
                for (partial, values) in records.range(INELASTIC_PARTIALS) {
                    debug!("Adding MT{partial} to MT{NONELASTIC_MT}");
                    sum.iter_mut().zip(values.iter()).for_each(|(s, v)| *s += v);
                }
                sum
            }
            None => vec![0.0; n_groups],
        };

        // zero sentinel to line up with the n+1 boundaries
        column.resize(n_groups + 1, 0.0);
        columns.push(column);
    }

    let rows = (0..=n_groups)
        .map(|i| {
            columns
                .iter()
                .map(|c| c.get(i).copied().unwrap_or_default())
                .collect()
        })
        .collect();

    Table {
        header: Some(header),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupy_gendf::{EnergyGrid, Pointwise, ScatteringMatrix};

    fn gendf() -> Gendf {
        let mut gendf = Gendf {
            energy: EnergyGrid {
                n_groups: 2,
                boundaries: vec![1.0, 10.0, 100.0],
                ..Default::default()
            },
            ..Default::default()
        };

        for (mt, values) in [(1, [5.0, 6.0]), (51, [0.0, 1.5]), (60, [0.25, 0.5])] {
            let mut p = Pointwise::new(mt, 26056, 2, 1);
            p.values = values.to_vec();
            gendf.pointwise.insert(mt, p);
        }

        let mut m = ScatteringMatrix::new(2, 26056, 2, 2);
        m.values[0][0] = vec![1.0, 0.1];
        m.values[1][0] = vec![2.0, 0.2];
        m.values[1][1] = vec![3.0, 0.3];
        gendf.matrices.insert(2, m);
        gendf
    }

    #[test]
    fn pointwise_columns() {
        let table = pointwise_table(&gendf(), &[1, 18]);
        assert_eq!(
            table.header,
            Some(vec!["Energy".into(), "MT1".into(), "MT18".into()])
        );
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_columns(), 3);
        assert_eq!(table.column(0), vec![1.0, 10.0, 100.0]);
        assert_eq!(table.column(1), vec![5.0, 6.0, 0.0]);
        assert_eq!(table.column(2), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn nonelastic_from_partials() {
        let table = pointwise_table(&gendf(), &[4]);
        assert_eq!(table.column(1), vec![0.25, 2.0, 0.0]);
    }

    #[test]
    fn nonelastic_on_tape_is_used() {
        let mut gendf = gendf();
        let mut p = Pointwise::new(4, 26056, 2, 1);
        p.values = vec![9.0, 9.0];
        gendf.pointwise.insert(4, p);
        assert_eq!(pointwise_table(&gendf, &[4]).column(1), vec![9.0, 9.0, 0.0]);
    }

    #[test]
    fn empty_outgoing() {
        let table = outgoing_table(&gendf(), &[18]);
        assert_eq!(table.column(1), vec![0.0; 3]);
    }

    #[test]
    fn matrix_layout() {
        let table = matrix_table(&gendf(), 2, 0);
        assert_eq!(table.header, None);
        assert_eq!(
            table.rows,
            vec![
                vec![0.0, 1.0, 10.0, 100.0],
                vec![1.0, 1.0, 0.0, 0.0],
                vec![10.0, 2.0, 3.0, 0.0],
                vec![100.0, 0.0, 0.0, 0.0],
            ]
        );
        assert_eq!(matrix_table(&gendf(), 2, 1).rows[2], vec![10.0, 0.2, 0.3, 0.0]);
    }

    #[test]
    fn missing_matrix_and_moment() {
        let zeros = matrix_table(&gendf(), 16, 0);
        assert_eq!(zeros.n_rows(), 4);
        assert!(zeros.rows[1..].iter().all(|r| r[1..].iter().all(|v| *v == 0.0)));

        // only P0 and P1 exist
        let p3 = matrix_table(&gendf(), 2, 3);
        assert!(p3.rows[1..].iter().all(|r| r[1..].iter().all(|v| *v == 0.0)));
    }
}
