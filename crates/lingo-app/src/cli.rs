use clap::Parser;

/// Lingo — a desktop studio for converting Python code to JavaScript.
#[derive(Parser, Debug)]
#[command(name = "lingo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Conversion service endpoint override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Log directive override (e.g. "lingo=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
