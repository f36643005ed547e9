use axe_sarif_converter::convert::InputShape;
use axe_sarif_converter::sarif::SarifVersion;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "axe-sarif-converter",
    version,
    about = "Convert axe-core accessibility results into SARIF logs"
)]
pub struct Cli {
    /// axe-core result files to convert
    #[arg(short = 'i', long = "input-files", num_args = 1.., required = true)]
    pub input_files: Vec<PathBuf>,

    /// Where to write the SARIF log
    #[arg(short = 'o', long = "output-file", required = true)]
    pub output_file: PathBuf,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Indent the output JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,

    #[arg(long, value_enum)]
    pub sarif_version: Option<SarifVersionArg>,

    #[arg(long, value_enum)]
    pub input_shape: Option<InputShapeArg>,

    #[arg(long)]
    pub scan_name: Option<String>,

    #[arg(long)]
    pub scan_id: Option<String>,

    #[arg(long)]
    pub test_case_id: Option<String>,

    /// Scanned page URL (raw input only)
    #[arg(long)]
    pub page_url: Option<String>,

    /// Scanned page title (raw input only)
    #[arg(long)]
    pub page_title: Option<String>,

    /// Scan time for raw input; defaults to now
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Extra config file layered over the global and project files
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SarifVersionArg {
    #[value(name = "2.1.2")]
    V212,
    #[value(name = "2.0.0")]
    V200,
}

impl From<SarifVersionArg> for SarifVersion {
    fn from(arg: SarifVersionArg) -> Self {
        match arg {
            SarifVersionArg::V212 => SarifVersion::V2_1_2,
            SarifVersionArg::V200 => SarifVersion::V2_0_0,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InputShapeArg {
    Decorated,
    Raw,
}

impl From<InputShapeArg> for InputShape {
    fn from(arg: InputShapeArg) -> Self {
        match arg {
            InputShapeArg::Decorated => InputShape::Decorated,
            InputShapeArg::Raw => InputShape::Raw,
        }
    }
}
