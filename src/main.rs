mod cli;

use clap::Parser;
use std::io::{self, BufWriter};

use cli::Args;
use termglyph::config::Config;
use termglyph::layout::TerminalGeometry;
use termglyph::pipeline::{print_image, ScreenState};

fn main() {
    // Logs go to stderr so they never mix with the image on stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> termglyph::Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let options = args.render_options(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut screen = ScreenState::default();

    for path in &args.images {
        let bytes = std::fs::read(path)?;
        // Re-query per image so a resized terminal is picked up.
        let terminal = TerminalGeometry::detect();
        log::debug!("printing {}", path.display());
        print_image(&bytes, &options, terminal, &mut screen, &mut out)?;
    }

    Ok(())
}
