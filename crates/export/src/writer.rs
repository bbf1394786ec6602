//! Write operations for GENDF tables

// standard library
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

// external crates
use groupy_gendf::Gendf;
use log::{debug, info};

// crate modules
use crate::error::Result;
use crate::tables::{matrix_table, outgoing_table, pointwise_table, Table};

/// Reaction types and moments to export
///
/// The defaults are the usual quantities of interest for transport and
/// activation work.
///
/// | Table      | Default reaction types                                   |
/// | ---------- | -------------------------------------------------------- |
/// | pointwise  | 1, 18, 452                                               |
/// | outgoing   | 18                                                       |
/// | matrices   | 2, 4, 11, 16, 17, 22-25, 28-30, 32-37, 41, 42, 44, 45    |
///
/// Only the P0 matrices are written unless `moments` is increased.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Columns of the pointwise table
    pub pointwise: Vec<u32>,
    /// Columns of the outgoing distribution table
    pub outgoing: Vec<u32>,
    /// One set of matrix tables per reaction type
    pub matrices: Vec<u32>,
    /// Number of Legendre moments written for every matrix
    pub moments: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pointwise: vec![1, 18, 452],
            outgoing: vec![18],
            matrices: vec![
                2, 4, 11, 16, 17, 22, 23, 24, 25, 28, 29, 30, 32, 33, 34, 35, 36, 37, 41, 42, 44,
                45,
            ],
            moments: 1,
        }
    }
}

/// Write every table for a [Gendf] to CSV files
///
/// Files are written to `directory`, which is created if needed:
///
/// - `<stem>_pointwise.csv`
/// - `<stem>_outgoing.csv`
/// - `<stem>_scattering_matrix_<mt>_<moment>.csv`
///
/// Returns the paths written, in that order.
///
/// ```rust, no_run
/// # use groupy_gendf::Gendf;
/// # use groupy_export::{write_csv, ExportConfig};
/// let gendf = Gendf::from_file("tape91").unwrap();
/// let paths = write_csv(&gendf, &ExportConfig::default(), "./output", "u238").unwrap();
/// ```
pub fn write_csv<P: AsRef<Path>>(
    gendf: &Gendf,
    config: &ExportConfig,
    directory: P,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let directory = directory.as_ref();
    std::fs::create_dir_all(directory)?;
    info!("Writing tables to {}", directory.display());

    let mut paths = Vec::new();

    let path = directory.join(format!("{stem}_pointwise.csv"));
    write_table(&pointwise_table(gendf, &config.pointwise), &path)?;
    paths.push(path);

    let path = directory.join(format!("{stem}_outgoing.csv"));
    write_table(&outgoing_table(gendf, &config.outgoing), &path)?;
    paths.push(path);

    for mt in &config.matrices {
        for moment in 0..config.moments {
            let path = directory.join(format!("{stem}_scattering_matrix_{mt}_{moment}.csv"));
            write_table(&matrix_table(gendf, *mt, moment), &path)?;
            paths.push(path);
        }
    }

    info!("Written {} files", paths.len());
    Ok(paths)
}

/// Write a single [Table] to a CSV file
///
/// Values are written in the shortest form that reads back to the same
/// `f64`, so nothing is lost on a round trip.
pub fn write_table<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {}", path.display());

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(init_writer(path)?);

    if let Some(header) = &table.header {
        writer.write_record(header)?;
    }
    for row in &table.rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the whole [Gendf] to a JSON file
///
/// This is a direct serialisation of the energy grid and every reaction, with
/// the maps keyed by MT.
pub fn write_json<P: AsRef<Path>>(gendf: &Gendf, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Writing {}", path.display());
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, gendf)?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
