use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use doxygraph::{
    Settings, SymbolModel,
    config::{LogLevel, OutlineFormat, find_settings_file},
    outline,
};

#[derive(Parser, Debug)]
#[command(name = "doxygraph", version, about)]
struct Args {
    /// Settings file. Defaults to the nearest `doxygraph.toml` above the
    /// current directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the XML export.
    #[arg(long)]
    export_root: Option<PathBuf>,

    /// Root index file name inside the export directory.
    #[arg(long)]
    index_file: Option<String>,

    #[arg(long, value_enum)]
    format: Option<OutlineFormat>,

    /// Leave member functions out of the outline.
    #[arg(long)]
    no_functions: bool,

    /// Print source locations.
    #[arg(long)]
    locations: bool,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn load_settings(args: &Args) -> doxygraph::Result<Settings> {
    let file = args.config.clone().or_else(|| std::env::current_dir().ok().as_deref().and_then(find_settings_file));
    let mut settings = match file {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    if let Some(root) = &args.export_root {
        settings.export.root = root.clone();
    }
    if let Some(index_file) = &args.index_file {
        settings.export.index_file = index_file.clone();
    }
    settings.export.normalize();
    if let Some(format) = args.format {
        settings.outline.format = format;
    }
    if args.no_functions {
        settings.outline.functions = false;
    }
    if args.locations {
        settings.outline.locations = true;
    }
    if args.verbose {
        settings.logging.level = LogLevel::Debug;
    }
    Ok(settings)
}

fn init_tracing(
    level: LogLevel,
    log_file: Option<&Path>,
) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(level.filter_directive()));

    let file_layer = log_file.map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("doxygraph.log")),
        );
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(EnvFilter::new(LogLevel::Debug.filter_directive()))
    });

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("doxygraph: {err}");
            return ExitCode::FAILURE;
        },
    };
    init_tracing(settings.logging.level, args.log_file.as_deref());
    info!("Reading export {}", settings.export.index_path().display());

    let rendered = SymbolModel::open(&settings.export).and_then(|model| outline::render(&model, &settings.outline));
    match rendered {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("doxygraph: {err}");
            ExitCode::FAILURE
        },
    }
}
