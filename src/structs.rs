use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
}
