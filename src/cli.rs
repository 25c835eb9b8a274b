use std::path::PathBuf;

use clap::{
    Arg, ArgMatches, command, crate_authors, crate_description, crate_name, crate_version,
    value_parser,
};

use crate::config::ConfigOverrides;
use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, INIT_HELP, LOG_FILE_HELP, OUTPUT_HELP,
    PREVIEW_HELP, SOURCE_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `config`: Path to the configuration file
/// - `source`, `output`, `log_file`, `preview`: overrides for the configuration
/// - `dry`: Run without writing the output file
/// - `verbose`: Increase verbosity level
/// - `init`: Write a starter configuration and exit
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Builds the command-line definition
pub fn build_command() -> clap::Command {
    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_CONFIG_PATH);

    let arg_source = Arg::new("source")
        .short('s')
        .long("source")
        .help(SOURCE_HELP)
        .value_parser(value_parser!(PathBuf));

    let arg_output = Arg::new("output")
        .short('o')
        .long("output")
        .help(OUTPUT_HELP)
        .value_parser(value_parser!(PathBuf));

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .value_parser(value_parser!(PathBuf));

    let arg_preview = Arg::new("preview")
        .short('p')
        .long("preview")
        .help(PREVIEW_HELP)
        .value_parser(value_parser!(usize));

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    let arg_init = Arg::new("init")
        .long("init")
        .help(INIT_HELP)
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_config)
        .arg(arg_source)
        .arg(arg_output)
        .arg(arg_log_file)
        .arg(arg_preview)
        .arg(arg_dry)
        .arg(arg_verbose)
        .arg(arg_init)
}

/// Gets the configuration file path from the command-line arguments
pub fn get_config_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Collects the configuration overrides given on the command line
pub fn get_overrides(matches: &ArgMatches) -> ConfigOverrides {
    ConfigOverrides {
        source_dir: matches.get_one::<PathBuf>("source").cloned(),
        output_path: matches.get_one::<PathBuf>("output").cloned(),
        log_file: matches.get_one::<PathBuf>("log_file").cloned(),
        preview_rows: matches.get_one::<usize>("preview").copied(),
    }
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

pub fn is_init(matches: &ArgMatches) -> bool {
    matches.get_flag("init")
}
