use std::path::PathBuf;

use clap::{Parser, Subcommand};
use slidefit::{render, PixelGrid, SolveConfig};

#[derive(Parser)]
#[command(name = "slidefit", about = "Slide captcha solver: trace the piece, fit it into the notch")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a patch/background pair from disk and print the horizontal offset
    Solve {
        /// Cut-out puzzle piece image (PNG with alpha)
        #[arg(short, long)]
        patch: PathBuf,

        /// Background image containing the white notch
        #[arg(short, long)]
        background: PathBuf,

        /// Packed RGBA notch colour in hex
        #[arg(long, default_value = "FFFFFFFF")]
        sentinel: String,

        /// Tracer step ceiling as a multiple of the patch area
        #[arg(long, default_value = "4")]
        step_limit: usize,

        /// Print the traced outline and the background fill mask
        #[arg(long)]
        show_outline: bool,
    },

    /// Run one full attempt against the live portal
    #[cfg(feature = "portal")]
    Online {
        /// Portal base URL
        #[arg(long, default_value = "http://yjcx.ems.com.cn")]
        server: String,

        /// Request timeout in seconds
        #[arg(long, default_value = "15")]
        timeout: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            patch,
            background,
            sentinel,
            step_limit,
            show_outline,
        } => {
            let config = SolveConfig {
                sentinel: u32::from_str_radix(sentinel.trim_start_matches("0x"), 16)?,
                step_limit_factor: step_limit,
                ..SolveConfig::default()
            };
            let ctx = slidefit::solve_grids(PixelGrid::open(&patch)?, PixelGrid::open(&background)?, &config)?;

            if show_outline {
                eprint!("{}", render::outline_mask(&ctx.patch, &ctx.contour));
                eprintln!("seed {:?}", ctx.seed);
                eprint!("{}", render::fill_mask(&ctx.background, config.sentinel));
                eprintln!("anchor {:?}", ctx.anchor);
            }
            println!("{}", ctx.displacement.horizontal());
        }

        #[cfg(feature = "portal")]
        Command::Online { server, timeout } => {
            let config = slidefit::PortalConfig {
                server_url: server,
                timeout: std::time::Duration::from_secs(timeout),
                ..slidefit::PortalConfig::default()
            };
            let portal = slidefit::portal::HttpPortal::new(config.clone())?;
            let verdict = slidefit::challenge::attempt(&portal, &config)?;
            println!("{}", verdict);
        }
    }

    Ok(())
}
