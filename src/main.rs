// raster2d: small command line front end over the library.
// Each subcommand is load -> one buffer operation -> save (or print).
//
//   raster2d info  in.png
//   raster2d crop  in.png out.tga --background none --transparent --margin 2
//   raster2d gray  in.tga out.png
//   raster2d flatten in.png out.tga --background white --threshold 1
//   raster2d convert in.tga out.png --no-alpha

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{debug, info};
use raster2d::{Buffer, Color, Error, MatchRule, SaveOptions};

#[derive(Parser)]
#[command(name = "raster2d", version, about = "Crop, convert and inspect TGA/PNG images")]
struct Cli {
    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print size and average color.
    Info { input: PathBuf },

    /// Cut the image down to the smallest rect enclosing non-background pixels.
    Crop {
        input: PathBuf,
        output: PathBuf,
        /// Background color: a name (none, white, ...) or r,g,b[,a] floats.
        #[arg(long, default_value = "none")]
        background: Color,
        /// Treat every zero-alpha pixel as background, whatever its RGB.
        #[arg(long)]
        transparent: bool,
        /// Extra pixels kept around the isolated rect.
        #[arg(long, default_value_t = 0)]
        margin: i32,
        #[arg(long)]
        no_alpha: bool,
    },

    /// Convert to grayscale, keeping alpha.
    Gray {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        no_alpha: bool,
    },

    /// Replace translucent pixels with a background color and drop alpha.
    Flatten {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "white")]
        background: Color,
        /// Pixels with alpha below this are replaced.
        #[arg(long, default_value_t = 1.0)]
        threshold: f32,
    },

    /// Re-encode into the format of the output extension.
    Convert {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        no_alpha: bool,
        /// Normalize zero-alpha pixels to fully transparent black first.
        #[arg(long)]
        sanitize: bool,
    },
}

// ----------------------------- setup -----------------------------

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

impl Command {
    /// How the output is written. Flatten always drops alpha; that is its point.
    fn save_options(&self) -> SaveOptions {
        match *self {
            Command::Flatten { .. } => SaveOptions { with_alpha: false },
            Command::Crop { no_alpha, .. }
            | Command::Gray { no_alpha, .. }
            | Command::Convert { no_alpha, .. } => SaveOptions { with_alpha: !no_alpha },
            Command::Info { .. } => SaveOptions::default(),
        }
    }
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let options = cli.command.save_options();

    match cli.command {
        Command::Info { input } => {
            let buffer = Buffer::load(&input)?;
            println!("{}: {} average {}", input.display(), buffer.size(), buffer.average());
        }

        Command::Crop { input, output, background, transparent, margin, .. } => {
            /* --- Find the content --- */
            let buffer = Buffer::load(&input)?;
            let rule = if transparent { MatchRule::TransparentMatchesAny } else { MatchRule::Exact };

            let mut rect = buffer.isolate_rect(buffer.bounds(), background, rule);
            debug!("isolated {rect}");
            if !rect.is_empty() {
                rect.grow(margin);
            }

            /* --- Cut and write --- */
            let cropped = buffer.crop(rect);
            info!("cropped {} -> {}", buffer.size(), cropped.size());
            cropped.save(&output, options)?;
        }

        Command::Gray { input, output, .. } => {
            let mut buffer = Buffer::load(&input)?;
            buffer.grayscale();
            buffer.save(&output, options)?;
        }

        Command::Flatten { input, output, background, threshold } => {
            let mut buffer = Buffer::load(&input)?;
            buffer.full_alpha(background, threshold);
            buffer.save(&output, options)?;
        }

        Command::Convert { input, output, sanitize, .. } => {
            let mut buffer = Buffer::load(&input)?;
            if sanitize {
                buffer.sanitize();
            }
            buffer.save(&output, options)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_for(args: &[&str]) -> SaveOptions {
        let cli = Cli::try_parse_from(args).unwrap();
        cli.command.save_options()
    }

    #[test]
    fn flatten_never_writes_alpha() {
        let opts = options_for(&["raster2d", "flatten", "in.png", "out.tga"]);
        assert_eq!(opts, SaveOptions { with_alpha: false });
    }

    #[test]
    fn no_alpha_flag_drops_alpha_elsewhere() {
        assert!(options_for(&["raster2d", "convert", "a.tga", "b.png"]).with_alpha);
        assert!(!options_for(&["raster2d", "gray", "a.tga", "b.png", "--no-alpha"]).with_alpha);
        let crop = options_for(&["raster2d", "crop", "a.png", "b.tga", "--transparent", "--no-alpha"]);
        assert!(!crop.with_alpha);
    }
}
