// SPDX-License-Identifier: MPL-2.0
use gesture_gallery::app::{self, paths, Flags};
use gesture_gallery::config;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
GestureGallery - pinch, rotate, drag, double-tap and long-press playground

USAGE:
  gesture_gallery [OPTIONS]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --assets-dir <DIR>   Directory holding the gallery images
  --write-config       Write the effective settings.toml and exit
  -h, --help           Print this help

ENVIRONMENT:
  GESTURE_GALLERY_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                     Log filter (default: info)
";

struct Args {
    flags: Flags,
    write_config: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let write_config = args.contains("--write-config");
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }

    Ok(Some(Args {
        flags,
        write_config,
    }))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn write_config() -> ExitCode {
    let (config, _) = config::load();
    match config::save(&config) {
        Ok(()) => {
            if let Some(path) = config::config_path() {
                info!(path = %path.display(), "settings written");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "could not write settings");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            error!(error = %err, "invalid arguments");
            eprint!("{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(args.flags.config_dir.clone());

    if args.write_config {
        return write_config();
    }

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "application error");
            ExitCode::FAILURE
        }
    }
}
