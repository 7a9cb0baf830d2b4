use clap::Parser;
use std::path::PathBuf;

/// daysout — count the days spent outside your home country
#[derive(Parser, Debug)]
#[command(name = "daysout", version, about)]
pub struct Cli {
    /// Input file with one travel range per line, e.g. `5 Nov 2023 - 07/11/2023`.
    /// Dates may be written as `DD MMM YYYY`, `DD Month YYYY` or `DD/MM/YYYY`.
    #[arg(long, short, env = "DAYSOUT_FILE")]
    pub file: PathBuf,
}
