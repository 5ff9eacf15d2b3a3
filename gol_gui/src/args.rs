use std::{num::NonZeroUsize, time::Duration};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The width of the window in pixels.
    #[arg(long, value_name = "PX", default_value_t = 800)]
    pub(crate) width: u32,

    /// The height of the window in pixels.
    #[arg(long, value_name = "PX", default_value_t = 600)]
    pub(crate) height: u32,

    /// The width & height of each cell in pixels.
    #[arg(short, long, value_name = "PX", default_value_t = 10)]
    pub(crate) cell_size: u32,

    /// The amount of frames, & therefore generations, per second.
    #[arg(short, long, value_name = "N", default_value_t = 10)]
    pub(crate) ticks_per_second: u32,

    /// The chance of each cell being alive when the board is randomized.
    #[arg(short, long, value_name = "P", default_value_t = 0.3)]
    pub(crate) density: f64,

    /// Seeds the random number generator to make a run reproducible.
    #[arg(short, long, value_name = "N")]
    pub(crate) seed: Option<u64>,
}

/// The reasons the given [`Args`] cannot be used to start the application.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("The cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("A {width}x{height} window cannot fit a single {cell_size} pixel cell")]
    WindowTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("The density must be between 0 and 1, not {0}")]
    InvalidDensity(f64),
    #[error("The simulation must run at least one tick per second")]
    ZeroTickRate,
}

/// The validated startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    /// The size of the window in pixels.
    pub(crate) window_size: [f32; 2],
    /// The size of each cell in pixels.
    pub(crate) cell_size: f32,
    /// The amount of cells in the x axis.
    pub(crate) cols: NonZeroUsize,
    /// The amount of cells in the y axis.
    pub(crate) rows: NonZeroUsize,
    /// The time between frames.
    pub(crate) tick_period: Duration,
    /// The chance of a cell being alive when randomizing.
    pub(crate) density: f64,
    pub(crate) seed: Option<u64>,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        if !(0.0..=1.0).contains(&args.density) {
            return Err(ConfigError::InvalidDensity(args.density));
        }

        if args.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        let too_small = ConfigError::WindowTooSmall {
            width: args.width,
            height: args.height,
            cell_size: args.cell_size,
        };
        let cols = NonZeroUsize::new((args.width / args.cell_size) as usize);
        let rows = NonZeroUsize::new((args.height / args.cell_size) as usize);
        let (Some(cols), Some(rows)) = (cols, rows) else {
            return Err(too_small);
        };

        Ok(Config {
            window_size: [args.width as f32, args.height as f32],
            cell_size: args.cell_size as f32,
            cols,
            rows,
            tick_period: Duration::from_secs(1) / args.ticks_per_second,
            density: args.density,
            seed: args.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("gol_gui").chain(args.iter().copied()))
            .expect("Arguments must parse");
        Config::try_from(args)
    }

    #[test]
    /// The defaults give an 80x60 board at 10 frames per second.
    fn defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(config.window_size, [800.0, 600.0]);
        assert_eq!(config.cell_size, 10.0);
        assert_eq!(config.cols.get(), 80);
        assert_eq!(config.rows.get(), 60);
        assert_eq!(config.tick_period, Duration::from_millis(100));
        assert_eq!(config.density, 0.3);
        assert_eq!(config.seed, None);
    }

    #[test]
    /// Partial cells at the edge of the window are dropped.
    fn grid_size_is_floored() {
        let config = parse(&["--width", "105", "--height", "99", "-c", "10"]).unwrap();

        assert_eq!(config.cols.get(), 10);
        assert_eq!(config.rows.get(), 9);
    }

    #[test]
    fn seed() {
        let config = parse(&["--seed", "42"]).unwrap();
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn invalid_configs() {
        assert_eq!(parse(&["-c", "0"]), Err(ConfigError::ZeroCellSize));
        assert_eq!(parse(&["-t", "0"]), Err(ConfigError::ZeroTickRate));
        assert_eq!(
            parse(&["-d", "1.5"]),
            Err(ConfigError::InvalidDensity(1.5))
        );
        assert_eq!(
            parse(&["--width", "5", "-c", "10"]),
            Err(ConfigError::WindowTooSmall {
                width: 5,
                height: 600,
                cell_size: 10
            })
        );
    }
}
