// SPDX-License-Identifier: MPL-2.0
use concept_lens::app::{self, Flags};

const HELP: &str = "\
concept_lens - browse animated series concepts

USAGE:
  concept_lens [OPTIONS] [BASE_URL]

ARGS:
  BASE_URL              Server publishing concepts.json and the concept folders

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --manifest <PATH>     Manifest path under BASE_URL [default: concepts.json]
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,concept_lens=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let manifest = args.opt_value_from_str("--manifest")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let base_url = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        base_url,
        manifest,
        config_dir,
    }))
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::debug!(?flags, "parsed command line");
    app::run(flags)
}
