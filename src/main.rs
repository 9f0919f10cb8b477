// std imports
use std::io::{BufRead, BufWriter, ErrorKind, Write, stdin, stdout};
use std::process;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use strmatch::{App, MatchOptions, Mode, NameFilter, app, cli, config, error::*};

const STRMATCH_DEBUG_LOG: &str = "STRMATCH_DEBUG_LOG";
const STRMATCH_DEBUG_LOG_STYLE: &str = "STRMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(STRMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(STRMATCH_DEBUG_LOG)
                .write_style(STRMATCH_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

/// Runs the application and reports whether any name was selected.
fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();

    let settings = config::at(&opt.config).no_default(opt.no_default_config).load()?;
    log::debug!("settings: {:?}", settings);

    let options = MatchOptions {
        mode: if opt.path { Mode::Path } else { Mode::Name },
        separator: opt.separator.unwrap_or(settings.separator.into()),
        strict: opt.strict || settings.strict,
    };

    let mut names = opt.names;
    let mut filter = NameFilter::new(options);
    if opt.split {
        if let Some(name) = opt.pattern {
            names.insert(0, name);
        }
    } else if let Some(pattern) = &opt.pattern {
        filter.include(pattern)?;
    }
    for pattern in settings.exclude.iter().chain(&opt.exclude) {
        filter.exclude(pattern)?;
    }

    let app = App::new(
        filter,
        app::Options {
            invert: opt.invert,
            count: opt.count,
            split: opt.split,
        },
    );

    let mut output = BufWriter::new(stdout().lock());
    let selected = if names.is_empty() {
        log::debug!("read names from stdin");
        app.run(stdin().lock().lines(), &mut output)?
    } else {
        app.run(names.into_iter().map(Ok), &mut output)?
    };
    output.flush()?;

    Ok(selected != 0 || opt.count || opt.split)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(Error::Io(ref e)) if e.kind() == ErrorKind::BrokenPipe => {}
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}
