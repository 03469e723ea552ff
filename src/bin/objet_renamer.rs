use std::path::PathBuf;

use atelier::{
    logging::init_logging,
    rename::{self, DEFAULT_ROOT, DEFAULT_SAMPLE_SIZE, RenameOptions},
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Rename image assets from English to French")]
struct Cli {
    /// Only report the planned renames
    #[arg(long)]
    dry_run: bool,

    /// The directory containing the assets
    #[arg(short = 'r', long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// How many renames a dry run lists
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SAMPLE_SIZE)]
    samples: usize,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let options = RenameOptions {
        root: cli.root,
        dry_run: cli.dry_run,
        sample_size: cli.samples,
    };

    // Per-file failures are only counted in the summary
    if let Err(e) = rename::run(&options) {
        eprintln!("❌ {}", e);

        error_exit();
    }
}

fn error_exit() -> ! {
    eprintln!("\nUnable to continue.");

    std::process::exit(1);
}
