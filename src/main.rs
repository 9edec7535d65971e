use std::io;
use std::path::PathBuf;

use anyhow::bail;
use shapekit::{init_logging, load_config, scene_from_config, Session, BUILD_DATE, VERSION};

const USAGE: &str = "Usage: shapekit [--config <path>]

Options:
  -c, --config <path>  Load settings from a .toml or .json file
  -h, --help           Print this help";

fn parse_config_arg(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<PathBuf>> {
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("{arg} requires a path\n\n{USAGE}"),
            },
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unexpected argument '{other}'\n\n{USAGE}"),
        }
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let config_path = parse_config_arg(std::env::args().skip(1))?;
    let config = load_config(config_path.as_deref())?;

    init_logging(&config.session.log_level)?;
    tracing::info!(version = VERSION, "starting shapekit");

    let scene = scene_from_config(&config)?;

    println!("ShapeKit {VERSION} (built {BUILD_DATE})");
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(scene, stdin.lock(), stdout.lock()).run()
}
