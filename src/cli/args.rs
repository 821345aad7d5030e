//! CLI argument parsing with clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use termglyph::block::MatchOptions;
use termglyph::config::{Config, ConfigError};
use termglyph::glyphs::GlyphSet;
use termglyph::pipeline::RenderOptions;

use super::enums::GlyphChoice;

/// Parse an image path, rejecting files that do not exist.
fn parse_image_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("'{}' is not a readable file", s))
    }
}

/// Print images in the terminal using colored Unicode block glyphs
#[derive(Parser, Debug)]
#[command(name = "termglyph")]
#[command(version, about = "Print images in the terminal with colored block glyphs", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Images to print
    #[arg(required = true, value_parser = parse_image_path)]
    pub images: Vec<PathBuf>,

    /// Resize to this pixel width (0 = fit terminal)
    #[arg(short = 'w', long, default_value = "0")]
    pub width: u32,

    /// Resize to this pixel height (0 = fit terminal)
    #[arg(short = 'h', long, default_value = "0")]
    pub height: u32,

    /// Print in compat mode: one colored space per pixel, no glyphs
    #[arg(short, long)]
    pub compat: bool,

    /// Glyph table to match against
    #[arg(long)]
    pub glyphs: Option<GlyphChoice>,

    /// Classify blocks by their two dominant exact colors when possible
    #[arg(long)]
    pub direct: bool,

    /// Do not stretch the width to compensate for narrow cells
    #[arg(long)]
    pub no_double_width: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Args {
    /// Merge flags over the config file into pipeline options.
    ///
    /// Flags only ever switch features on; anything left unset falls back
    /// to the config file.
    pub fn render_options(&self, config: &Config) -> Result<RenderOptions, ConfigError> {
        let glyphs = match self.glyphs {
            Some(choice) => GlyphSet::from(choice),
            None => config.glyph_set()?.unwrap_or_default(),
        };

        Ok(RenderOptions {
            width: self.width,
            height: self.height,
            compat: self.compat || config.render.compat,
            double_width: !self.no_double_width && config.render.double_width,
            match_options: MatchOptions {
                glyphs,
                direct_mode: self.direct || config.render.direct_mode,
            },
            max_stripes: config.render.max_stripes,
            clear_on_resize: config.terminal.clear_on_resize,
        })
    }
}
