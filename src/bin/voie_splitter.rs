use std::path::PathBuf;

use atelier::{
    logging::init_logging,
    voie::{DEFAULT_DIR, VoieSplitter},
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Split a Voie record into one JSON file per tier")]
struct Cli {
    /// The source record, relative to the working directory
    #[arg(value_name = "SOURCE")]
    source: String,

    /// Prefix of the tier files, eg. "Rodeur" gives Rodeur1.json to Rodeur5.json
    #[arg(value_name = "PREFIX")]
    prefix: String,

    /// The working directory holding the source and tier files
    #[arg(short = 'd', value_name = "DIR", default_value = DEFAULT_DIR)]
    dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let splitter = VoieSplitter::new(&cli.dir);

    if let Err(e) = splitter.split(&cli.source, &cli.prefix) {
        eprintln!("Unable to split {}. Error: {}", cli.source, e);

        error_exit();
    }
}

fn error_exit() -> ! {
    eprintln!("\nUnable to continue.");

    std::process::exit(1);
}
