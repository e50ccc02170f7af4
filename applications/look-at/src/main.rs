//! Prints the view matrix of a viewer looking from one point at another.
//!
//! Eye and target default to random points in the unit cube, the up direction to `(0, 1, 0)`.

mod config;
mod error;
mod logging;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use lib_geometry::{look_at, random_vector3, Matrix4x4, Vector3};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::{
    config::{Config, HELP},
    error::ApplicationResult,
    logging::{init_logger, DEFAULT_LEVEL},
};

#[derive(Serialize)]
struct Report {
    eye: Vector3,
    target: Vector3,
    up: Vector3,
    view: Matrix4x4,
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            init_logger(DEFAULT_LEVEL);
            error!("{error}");
            return error.into();
        }
    };
    init_logger(config.log_level());

    match run(&config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            error.into()
        }
    }
}

fn run(config: &Config, out: &mut impl Write) -> ApplicationResult<()> {
    if config.help {
        out.write_all(HELP.as_bytes())?;
        return Ok(());
    }

    let mut seeded = config.seed.map(StdRng::seed_from_u64);
    let mut random_point = || match seeded {
        Some(ref mut rng) => Vector3::random(rng),
        None => random_vector3(),
    };
    let eye = config.eye.unwrap_or_else(&mut random_point);
    let target = config.target.unwrap_or_else(&mut random_point);
    let up = config.up;

    debug!(%eye, %target, %up, "building view matrix");
    let view = look_at(eye, target, up)?;
    info!("view from {eye} toward {target}");

    if config.json {
        let report = Report {
            eye,
            target,
            up,
            view,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{view}")?;
    }

    Ok(())
}
