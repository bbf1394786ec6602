//! Command line tool for converting GENDF tapes to CSV tables

// standard library
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// external crates
use clap::{ArgAction, Parser};
use groupy_export::{write_csv, write_json, ExportConfig};
use groupy_gendf::Gendf;
use log::{debug, error, info};

/// Convert a GENDF tape from NJOY/GROUPR into CSV tables
///
/// The first material on the tape is read. Pointwise and outgoing data are
/// written to one table each, and every scattering matrix moment to its own
/// square table.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
struct Cli {
    /// Path to the GENDF tape
    #[arg(value_name = "gendf")]
    input: PathBuf,

    /// Directory for the output tables
    #[arg(short, long, value_name = "dir", default_value = ".")]
    output: PathBuf,

    /// Prefix for output file names (default: input file stem)
    #[arg(long, value_name = "name")]
    stem: Option<String>,

    /// Number of Legendre moments written per matrix
    #[arg(long, value_name = "n", default_value_t = 1)]
    moments: usize,

    /// Reaction types for the pointwise table
    #[arg(long, value_name = "mt", value_delimiter = ',')]
    pointwise: Option<Vec<u32>>,

    /// Reaction types for the outgoing table
    #[arg(long, value_name = "mt", value_delimiter = ',')]
    outgoing: Option<Vec<u32>>,

    /// Reaction types for the scattering matrices
    #[arg(long, value_name = "mt", value_delimiter = ',')]
    matrices: Option<Vec<u32>>,

    /// Also write the whole evaluation to <stem>.json
    #[arg(long)]
    json: bool,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            pointwise: self.pointwise.clone().unwrap_or(default.pointwise),
            outgoing: self.outgoing.clone().unwrap_or(default.outgoing),
            matrices: self.matrices.clone().unwrap_or(default.matrices),
            moments: self.moments,
        }
    }

    fn stem(&self) -> String {
        self.stem.clone().unwrap_or_else(|| file_stem(&self.input))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);
    debug!("{cli:#?}");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> groupy_export::Result<()> {
    let gendf = Gendf::from_file(&cli.input)?;
    info!("{gendf}");

    let stem = cli.stem();
    write_csv(&gendf, &cli.config(), &cli.output, &stem)?;

    if cli.json {
        write_json(&gendf, cli.output.join(format!("{stem}.json")))?;
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    let result = stderrlog::new()
        .modules([module_path!(), "groupy_gendf", "groupy_export"])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .show_level(false)
        .color(stderrlog::ColorChoice::Auto)
        .init();

    if let Err(e) = result {
        eprintln!("unable to initialise logging: {e}");
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "gendf".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["groupy", "data/tape91.gendf"]);
        assert_eq!(cli.output, PathBuf::from("."));
        assert_eq!(cli.stem(), "tape91");
        assert_eq!(cli.config(), ExportConfig::default());
        assert!(!cli.json);
    }

    #[test]
    fn overrides() {
        let cli = Cli::parse_from([
            "groupy",
            "tape91",
            "-o",
            "tables",
            "--stem",
            "fe56",
            "--moments",
            "3",
            "--matrices",
            "2,4,51",
            "-vv",
        ]);
        let config = cli.config();
        assert_eq!(cli.stem(), "fe56");
        assert_eq!(config.moments, 3);
        assert_eq!(config.matrices, vec![2, 4, 51]);
        assert_eq!(config.pointwise, vec![1, 18, 452]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
