use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use expmat_cli::commands::expm::{load_eval_config, run_expm};
use expmat_cli::commands::plot::{load_plot_config, run_plot};
use expmat_core::config::{EvalConfig, PlotConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(
            "EXPMAT_LOG",
            "error,expmat=info,expmat_cli=info,expmat_core=info",
        ))
        .init();

    let matches = Command::new("expmat")
        .version(clap::crate_version!())
        .about("Matrix exponential evaluator and convergence plotter")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("expm")
                .about("Print a square matrix and its scaled matrix exponential")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help(
                            "Headerless CSV matrix to evaluate. Defaults to the \
                             built-in 5x5 demo matrix.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("scale")
                        .short('s')
                        .long("scale")
                        .help("Scalar applied to the matrix before exponentiation")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to an evaluator JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("plot")
                .about("Render error-decay runs on a shared semi-log chart")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help(
                            "CSV error series to plot (repeatable, labeled by \
                             position). Defaults to the five built-in runs.",
                        )
                        .action(ArgAction::Append)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Path of the HTML chart to write")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Chart title")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a plotter JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("expm", sub_m)) => handle_expm(sub_m),
        Some(("plot", sub_m)) => handle_plot(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_expm(matches: &ArgMatches) -> Result<()> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[expmat::expm] Using config: {:?}", path);
            load_eval_config(path)?
        }
        None => EvalConfig::default(),
    };

    if let Some(scale) = matches.get_one::<f64>("scale") {
        config.scale = *scale;
    }
    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.input = Some(input.clone());
    }

    match run_expm(&config) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Evaluation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_plot(matches: &ArgMatches) -> Result<()> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[expmat::plot] Using config: {:?}", path);
            load_plot_config(path)?
        }
        None => PlotConfig::default(),
    };

    if let Some(inputs) = matches.get_many::<PathBuf>("input") {
        config.inputs = inputs.cloned().collect();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.clone();
    }
    if let Some(title) = matches.get_one::<String>("title") {
        config.title = title.clone();
    }

    match run_plot(&config) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Plotting failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
