use lib_geometry::Vector3;
use pico_args::Arguments;
use tracing::Level;

use crate::{
    error::{ApplicationError, ApplicationResult},
    logging::DEFAULT_LEVEL,
};

pub(crate) const HELP: &str = "\
Prints the view matrix of a viewer at EYE looking at TARGET.

USAGE:
  look-at [OPTIONS]

OPTIONS:
  --eye X,Y,Z       position of the viewer [default: random in [0, 1)]
  --target X,Y,Z    point to look at [default: random in [0, 1)]
  --up X,Y,Z        up direction [default: 0,1,0]
  --seed N          seed for the random eye and target
  --json            print eye, target, up and the matrix as JSON
  -v, --verbose     enable debug logging
  -h, --help        print this help
";

#[derive(Debug, PartialEq)]
pub(crate) struct Config {
    pub(crate) eye: Option<Vector3>,
    pub(crate) target: Option<Vector3>,
    pub(crate) up: Vector3,
    pub(crate) seed: Option<u64>,
    pub(crate) json: bool,
    pub(crate) verbose: bool,
    pub(crate) help: bool,
}

impl Config {
    pub(crate) fn from_env() -> ApplicationResult<Self> {
        Self::from_arguments(Arguments::from_env())
    }

    pub(crate) fn from_arguments(mut args: Arguments) -> ApplicationResult<Self> {
        let config = Self {
            help: args.contains(["-h", "--help"]),
            verbose: args.contains(["-v", "--verbose"]),
            json: args.contains("--json"),
            eye: args.opt_value_from_fn("--eye", parse_vector)?,
            target: args.opt_value_from_fn("--target", parse_vector)?,
            up: args
                .opt_value_from_fn("--up", parse_vector)?
                .unwrap_or(Vector3::UP),
            seed: args.opt_value_from_str("--seed")?,
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            return Err(ApplicationError::UnexpectedArguments(
                remaining
                    .iter()
                    .map(|argument| argument.to_string_lossy().into_owned())
                    .collect(),
            ));
        }

        Ok(config)
    }

    pub(crate) fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            DEFAULT_LEVEL
        }
    }
}

/// Parses `x,y,z`.
fn parse_vector(text: &str) -> Result<Vector3, String> {
    let components = text
        .split(',')
        .map(|component| {
            component
                .trim()
                .parse::<f32>()
                .map_err(|error| format!("`{component}` is not a number: {error}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match *components.as_slice() {
        [x, y, z] => Ok(Vector3::new(x, y, z)),
        _ => Err(format!(
            "expected three comma separated components, got {}",
            components.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn parse(arguments: &[&str]) -> ApplicationResult<Config> {
        Config::from_arguments(Arguments::from_vec(
            arguments.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(
            config,
            Config {
                eye: None,
                target: None,
                up: Vector3::UP,
                seed: None,
                json: false,
                verbose: false,
                help: false,
            }
        );
        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn all_options() {
        let config = parse(&[
            "--eye",
            "1,2,3",
            "--target=-1, 0.5 ,4",
            "--up",
            "0,0,1",
            "--seed",
            "9",
            "--json",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.eye, Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(config.target, Some(Vector3::new(-1.0, 0.5, 4.0)));
        assert_eq!(config.up, Vector3::FORWARD);
        assert_eq!(config.seed, Some(9));
        assert!(config.json);
        assert_eq!(config.log_level(), Level::DEBUG);
    }

    #[test]
    fn malformed_vectors() {
        assert_eq!(
            parse_vector("1,2"),
            Err("expected three comma separated components, got 2".to_owned())
        );
        assert!(parse_vector("1,two,3").is_err());
        assert!(matches!(
            parse(&["--eye", "1,2,3,4"]),
            Err(ApplicationError::Arguments(_))
        ));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(matches!(
            parse(&["--frobnicate", "1"]),
            Err(ApplicationError::UnexpectedArguments(arguments)) if arguments.len() == 2
        ));
    }
}
