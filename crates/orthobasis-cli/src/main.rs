use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use orthobasis_linalg::report::{print_matrix, RenderOptions};
use orthobasis_linalg::GramSchmidt;
use orthobasis_cli::basis::{orthonormal_basis, read_vectors, write_basis};
use orthobasis_cli::config::{load_experiment_config, ExperimentConfig};
use orthobasis_cli::experiment::{run_experiment, write_experiment_report};

fn method_arg() -> Arg {
    Arg::new("method")
        .short('m')
        .long("method")
        .help("Gram-Schmidt variant to run")
        .value_parser(["classical", "cgs", "modified", "mgs", "both"])
        .value_hint(ValueHint::Other)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ORTHOBASIS_LOG", "error,orthobasis=info"))
        .init();

    let matches = Command::new("orthobasis")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Orthonormal bases by classical and modified Gram-Schmidt")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("experiment")
                .about("Compare I - Q^T Q for both variants on nearly dependent vectors")
                .arg(
                    Arg::new("config")
                        .help("Path to experiment JSON configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("k")
                        .short('k')
                        .long("k")
                        .help("Conditioning parameter; may be repeated. Overrides the config file.")
                        .action(ArgAction::Append)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(method_arg())
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .help("Digits printed after the decimal point")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("scientific")
                        .long("scientific")
                        .help("Print entries in scientific notation")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("print_config")
                        .long("print-config")
                        .help("Print the effective configuration as JSON and exit")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("basis")
                .about("Orthonormalize vectors read from a JSON file")
                .arg(
                    Arg::new("input")
                        .help("JSON array of vectors, e.g. [[1.0, 0.0], [1.0, 1.0]]")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(method_arg())
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Path to write the basis as JSON (columns are basis vectors)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("experiment", sub_m)) => handle_experiment(sub_m),
        Some(("basis", sub_m)) => handle_basis(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn parse_methods(matches: &ArgMatches) -> Result<Option<Vec<GramSchmidt>>> {
    match matches.get_one::<String>("method").map(String::as_str) {
        None => Ok(None),
        Some("both") => Ok(Some(GramSchmidt::ALL.to_vec())),
        Some(name) => Ok(Some(vec![
            GramSchmidt::from_str(name).map_err(anyhow::Error::msg)?
        ])),
    }
}

fn handle_experiment(matches: &ArgMatches) -> Result<()> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[Orthobasis::Experiment] Using config: {:?}", config_path);
        load_experiment_config(config_path)?
    } else {
        ExperimentConfig::default()
    };

    if let Some(ks) = matches.get_many::<f64>("k") {
        config.ks = ks.copied().collect();
    }
    if let Some(methods) = parse_methods(matches)? {
        config.methods = methods;
    }
    if let Some(precision) = matches.get_one::<usize>("precision") {
        config.precision = Some(*precision);
    }
    if matches.get_flag("scientific") {
        config.scientific = true;
    }

    if matches.get_flag("print_config") {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let runs = run_experiment(&config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_experiment_report(&mut out, &runs, &config.render_options())?;
    out.flush()?;
    Ok(())
}

fn handle_basis(matches: &ArgMatches) -> Result<()> {
    let input_path: &PathBuf = matches.get_one("input").unwrap();
    let method = match parse_methods(matches)? {
        Some(methods) if methods.len() == 1 => methods[0],
        Some(_) => anyhow::bail!("The basis command runs a single method; choose classical or modified"),
        None => GramSchmidt::Modified,
    };
    log::info!(
        "[Orthobasis::Basis] {} on vectors from {:?}",
        method,
        input_path
    );

    let vectors = read_vectors(input_path)?;
    let basis = orthonormal_basis(method, &vectors)?;
    print_matrix(&basis, &RenderOptions::default())?;

    if let Some(output_path) = matches.get_one::<PathBuf>("output_file") {
        write_basis(output_path, &basis)?;
        log::info!("[Orthobasis::Basis] Wrote basis to {:?}", output_path);
    }
    Ok(())
}
