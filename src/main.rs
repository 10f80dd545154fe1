// SPDX-License-Identifier: MPL-2.0
use showroom::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
Browse a used-car catalog.

USAGE:
  showroom [OPTIONS] [DATA_FILE]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, ar)
  --config-dir <DIR>   Directory holding settings.toml
  --car <ID>           Open this car once the catalog is loaded
  -h, --help           Print this help

ENVIRONMENT:
  SHOWROOM_LOG         Log filter (falls back to RUST_LOG, default: info)
  SHOWROOM_CONFIG_DIR  Config directory when --config-dir is absent
";

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SHOWROOM_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        car: args.opt_value_from_str("--car")?,
        data_file: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("showroom: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_tracing();
    app::run(flags)
}
