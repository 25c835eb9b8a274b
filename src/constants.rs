/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Glob segment used to enumerate the files of the source directory
pub const WILDCARD: &str = "*";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "file-etl";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "file_etl";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "etl.yaml";

/// Default log file used when the configuration does not name one
pub const LOG_FILE_DEFAULT: &str = "logs/etl.log";

/// Number of rows printed by the inspection step unless configured otherwise
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Inches to meters
pub const INCHES_TO_METERS: f64 = 0.0254;

/// Pounds to kilograms
pub const POUNDS_TO_KILOGRAMS: f64 = 0.453592;

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the source command-line option
pub const SOURCE_HELP: &str = "Directory containing the .csv, .json and .xml files to merge";

/// Help text for the output command-line option
pub const OUTPUT_HELP: &str = "Path of the CSV file to write";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Append stage timings to this log file";

/// Help text for the preview command-line option
pub const PREVIEW_HELP: &str = "Number of combined rows to print before transforming";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run every stage without writing the output file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the init command-line option
pub const INIT_HELP: &str = "Write a starter configuration file to the --config path and exit";
