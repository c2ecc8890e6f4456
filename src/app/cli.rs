use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lumideck")]
#[command(version)]
#[command(
    about = "A terminal showcase of a 32-output WS2811 ART-NET LED controller",
    long_about = None
)]
pub struct Args {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Route to open at startup (e.g. "/pcb")
    #[arg(short, long)]
    pub page: Option<String>,

    /// Write a default config file to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<PathBuf>,
}
