use clap::Parser;

/// SafeIndy: a console client for the SafeIndy public safety assistant.
#[derive(Parser, Debug)]
#[command(name = "safeindy", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Chat service base URL (overrides config and SAFEINDY_URL).
    #[arg(long)]
    pub url: Option<String>,

    /// Answer with the built-in assistant instead of contacting a service.
    #[arg(long)]
    pub offline: bool,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
