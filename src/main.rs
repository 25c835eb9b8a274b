use anyhow::Result;
use colored::Colorize;
use human_panic::setup_panic;
use log::error;

use file_etl::prelude::*;

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches();
    let config_path = get_config_path(&matches);

    if is_init(&matches) {
        write_default_config(&config_path)?;
        println!("Wrote starter configuration to {}", config_path.display());
        return Ok(());
    }

    let config = resolve_configuration(&config_path, get_overrides(&matches))?;
    init_logger(get_verbosity(&matches), &config.log_file)?;

    let options = PipelineOptions::new(config, is_dry_run(&matches));
    let summary = run_pipeline(&options).inspect_err(|e| error!("ETL process failed: {e:#}"))?;

    let message = summary.to_string();
    println!("{}", format_message(&message, &message.green().to_string()));

    Ok(())
}
