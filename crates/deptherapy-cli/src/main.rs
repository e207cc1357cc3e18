//! CLI entry point for deptherapy.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `deptherapy-app` crate.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use deptherapy_app::{
    SessionError, SessionInput, build_probe, read_config_text, resolve_settings, run_session,
    session_exit_code,
};
use deptherapy_settings::Overrides;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(
    name = "deptherapy",
    version,
    disable_version_flag = true,
    about = "A therapy session for your package.json dependencies"
)]
struct Cli {
    /// Path to the manifest to examine.
    #[arg(long, default_value = "package.json")]
    manifest: Utf8PathBuf,

    /// Path to deptherapy config TOML (missing file means defaults).
    #[arg(long, default_value = "deptherapy.toml")]
    config: Utf8PathBuf,

    /// Seed for template selection; the same seed gives the same session.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the package manager cycle probe.
    #[arg(long)]
    no_probe: bool,

    /// Log more to stderr (-V info, -VV debug, -VVV trace).
    #[arg(short = 'V', long, action = ArgAction::Count)]
    verbose: u8,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = session(&cli);
    match &result {
        Ok(text) => print!("{text}"),
        Err(err) => report_error(err),
    }

    let code = session_exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn session(cli: &Cli) -> Result<String, SessionError> {
    let config_text = read_config_text(&cli.config)?;
    let config = resolve_settings(
        &config_text,
        Overrides {
            disable_probe: cli.no_probe,
        },
    )?;

    tracing::debug!(
        manifest = %cli.manifest,
        config = %cli.config,
        seed = ?cli.seed,
        probe = config.probe.enabled,
        "starting session"
    );

    let probe = build_probe(&config.probe, &cli.manifest);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let output = run_session(SessionInput {
        manifest_path: &cli.manifest,
        config: &config,
        probe: probe.as_ref(),
        rng: &mut rng,
    })?;

    Ok(output.report.render())
}

fn report_error(err: &SessionError) {
    match err {
        SessionError::ManifestUnreadable(inner) => {
            eprintln!("deptherapy: {err}");
            let mut source = std::error::Error::source(inner);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = std::error::Error::source(cause);
            }
            eprintln!(
                "Run deptherapy next to a package.json, or point at one with --manifest <PATH>."
            );
        }
        SessionError::Unexpected(_) => {
            eprintln!("deptherapy error: {err}");
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
