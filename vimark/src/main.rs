use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;
use tracing::{debug, error};
use vimark_frontend::settings::Settings;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
}

#[tokio::main]
async fn main() {
    let logpath = match get_logging_path() {
        Ok(it) => it,
        Err(_) => return,
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    match vimark_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("vimark")
        .about("vimark - mirrors vim marks into the sign column")
        .args([
            // NOTE: arguments
            Arg::new("files")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("files to open, one pane each"),
            // NOTE: options
            Arg::new("no-modal")
                .long("no-modal")
                .action(ArgAction::SetTrue)
                .help("start with modal editing reported as disabled, mark tracking stays inert"),
            Arg::new("signs-after-line-numbers")
                .long("signs-after-line-numbers")
                .action(ArgAction::SetTrue)
                .conflicts_with("signs-before-line-numbers")
                .help("render mark signs after the line numbers and persist the choice"),
            Arg::new("signs-before-line-numbers")
                .long("signs-before-line-numbers")
                .action(ArgAction::SetTrue)
                .help("render mark signs before the line numbers and persist the choice"),
            Arg::new("session-capacity")
                .long("session-capacity")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .help("maximum number of pane sessions kept in memory, defaults to 64"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.files = args
        .get_many::<PathBuf>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    settings.modal_editing = !args.get_flag("no-modal");

    if args.get_flag("signs-after-line-numbers") {
        settings.show_signs_before_line_numbers_override = Some(false);
    } else if args.get_flag("signs-before-line-numbers") {
        settings.show_signs_before_line_numbers_override = Some(true);
    }

    if let Some(capacity) = args.get_one::<usize>("session-capacity") {
        settings.session_capacity = *capacity;
    }
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/vimark/logs"))
}
