mod cli;

use axe_sarif_converter::config;
use axe_sarif_converter::convert::{self, InputShape, ScanInput};
use axe_sarif_converter::error::ConverterError;
use axe_sarif_converter::logging;
use axe_sarif_converter::report::{self, writer, OutputFormat};
use axe_sarif_converter::sarif::{self, SarifLog, SarifVersion};
use axe_sarif_converter::types::axe::{DecoratedInput, RawRuleResult};
use axe_sarif_converter::types::config::ConverterConfig;
use axe_sarif_converter::types::environment::{ConverterOptions, EnvironmentData};
use chrono::Utc;
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Flags layered over config values.
struct Settings {
    sarif_version: SarifVersion,
    input_shape: InputShape,
    format: OutputFormat,
    options: ConverterOptions,
    environment: EnvironmentData,
}

impl Settings {
    fn resolve(cli: &cli::Cli, config: Option<&ConverterConfig>) -> Result<Self, ConverterError> {
        let configured_version = config.and_then(ConverterConfig::sarif_version);
        let sarif_version: SarifVersion = match (cli.sarif_version, configured_version) {
            (Some(arg), _) => arg.into(),
            (None, Some(value)) => value.parse()?,
            (None, None) => SarifVersion::default(),
        };
        let configured_shape = config.and_then(ConverterConfig::input_shape);
        let input_shape: InputShape = match (cli.input_shape, configured_shape) {
            (Some(arg), _) => arg.into(),
            (None, Some(value)) => value.parse()?,
            (None, None) => InputShape::default(),
        };
        let pretty = cli.pretty || config.is_some_and(ConverterConfig::pretty);

        let scan = config.and_then(|c| c.scan.as_ref());
        let options = ConverterOptions {
            scan_name: cli
                .scan_name
                .clone()
                .or_else(|| scan.and_then(|s| s.name.clone())),
            scan_id: cli.scan_id.clone().or_else(|| scan.and_then(|s| s.id.clone())),
            test_case_id: cli
                .test_case_id
                .clone()
                .or_else(|| scan.and_then(|s| s.test_case_id.clone())),
        };

        let page = config.and_then(|c| c.page.as_ref());
        let environment = EnvironmentData::new(
            cli.page_url
                .clone()
                .or_else(|| page.and_then(|p| p.url.clone()))
                .unwrap_or_default(),
            cli.page_title
                .clone()
                .or_else(|| page.and_then(|p| p.title.clone()))
                .unwrap_or_default(),
            cli.timestamp
                .clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
        );

        Ok(Self {
            sarif_version,
            input_shape,
            format: OutputFormat::from_pretty(pretty),
            options,
            environment,
        })
    }
}

fn read_input(path: &Path) -> Result<String, ConverterError> {
    if !path.exists() {
        return Err(ConverterError::PathNotFound(path.display().to_string()));
    }
    let contents = fs::read_to_string(path).map_err(ConverterError::Io)?;
    info!(path = %path.display(), bytes = contents.len(), "read input file");
    Ok(contents)
}

fn input_parse_error(path: &Path, source: serde_json::Error) -> ConverterError {
    ConverterError::InputParse {
        path: path.display().to_string(),
        source,
    }
}

fn convert_file(path: &Path, settings: &Settings) -> Result<Vec<SarifLog>, ConverterError> {
    let contents = read_input(path)?;
    match settings.input_shape {
        InputShape::Decorated => {
            let scans = DecoratedInput::from_json(&contents)
                .map_err(|source| input_parse_error(path, source))?
                .into_vec();
            scans
                .iter()
                .map(|results| {
                    convert::convert(
                        ScanInput::Decorated(results),
                        settings.sarif_version,
                        &settings.options,
                    )
                })
                .collect()
        }
        InputShape::Raw => {
            let results: Vec<RawRuleResult> = serde_json::from_str(&contents)
                .map_err(|source| input_parse_error(path, source))?;
            let input = ScanInput::Raw {
                results: &results,
                environment: &settings.environment,
            };
            Ok(vec![convert::convert(
                input,
                settings.sarif_version,
                &settings.options,
            )?])
        }
    }
}

fn run() -> Result<i32, ConverterError> {
    let cli = cli::Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir().map_err(ConverterError::Io)?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, loaded.as_ref())?;

    writer::check_output_path(&cli.output_file, cli.force)?;

    let mut logs = Vec::new();
    for path in &cli.input_files {
        logs.extend(convert_file(path, &settings)?);
    }
    let log = sarif::combine(logs)?.unwrap_or_else(|| SarifLog::empty(settings.sarif_version));

    let rendered = report::render(&log, settings.format)?;
    writer::write_atomic(&cli.output_file, &rendered, cli.force)?;
    info!(
        path = %cli.output_file.display(),
        version = %settings.sarif_version,
        shape = %settings.input_shape,
        runs = log.run_count(),
        "wrote SARIF log"
    );

    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::FAILURE);
        }
    }
}
