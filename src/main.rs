// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_reel - desktop video player

USAGE:
  iced_reel [OPTIONS] [URL|PATH]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --log <filter>       Log filter, overrides RUST_LOG (default: info)
  -h, --help           Print this help
";

struct Args {
    flags: Flags,
    log: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let log = args.opt_value_from_str("--log")?;
    let source = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Args {
        flags: Flags {
            lang,
            source,
            config_dir,
        },
        log,
    }))
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_tracing(args.log.as_deref());
    paths::init_cli_overrides(args.flags.config_dir.clone());

    app::run(args.flags)
}
