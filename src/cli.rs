use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Scatter-plot generational archive files, colored by absolute variance",
    allow_negative_numbers = true
)]
pub struct Args {
    /// Folder (relative to the working directory) holding archive_<gen>.dat files
    #[arg(value_name = "DATA_FOLDER")]
    pub data_folder: String,

    /// How many generations per data set
    #[arg(value_name = "DUMP_PERIOD")]
    pub dump_period: u64,

    /// Number of generations in experiment (negative samples nothing)
    #[arg(value_name = "MAX_GENS")]
    pub max_gens: i64,

    /// Path to config TOML
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run without GUI (log a summary per generation)
    #[arg(long, default_value_t = false)]
    pub nogui: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long, default_value_t = false)]
    pub print_config: bool,
}
