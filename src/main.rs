//! wgkeygen — WireGuard key material generator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use wgkeygen::config::Config;
use wgkeygen::constants;
use wgkeygen::env::Env;
use wgkeygen::history::History;
use wgkeygen::keys::{self, EncodedKeyPair, KeyMaterial, KeyMaterialGenerator, KeyPair, PrivateScalar};
use wgkeygen::logging;
use wgkeygen::netdev::NetdevOptions;
use wgkeygen::output::Format;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, GenerateArgs, KeypairArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(cli.verbose, &env);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Generate(args) => run_generate(args, &env),
        Command::Keypair(args) => run_keypair(args),
        Command::Psk => run_psk(),
        Command::Pubkey => run_pubkey(),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Generate one or more two-peer sessions and render the last one.
fn run_generate(args: GenerateArgs, env: &Env) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;

    // Load config with layering, then let CLI flags win
    let mut config = Config::load(Some(&cwd), env).context("failed to load configuration")?;
    args.apply_to(&mut config);

    let options = NetdevOptions::from_config(&config.netdev).context("invalid netdev settings")?;
    let format = config.output.format;

    let mut generator = KeyMaterialGenerator::new();
    let mut history = History::new();
    let mut latest = None;
    for _ in 0..args.count {
        let session = generator
            .generate_session()
            .context("key generation failed")?;
        history.record(&session);
        latest = Some(session);
    }
    let session = latest.context("no session was generated")?;

    if format == Format::Terminal {
        cli::print_banner();
    }
    if args.history {
        print!("{}", format.render_with_history(&session, &options, &history));
    } else {
        print!("{}", format.render(&session, &options));
    }

    tracing::info!(sessions = history.len(), %format, "generation complete");
    Ok(())
}

/// Generate a single key pair: private key line, then public key line.
fn run_keypair(args: KeypairArgs) -> Result<()> {
    let pair = keys::generate_keypair().context("key generation failed")?;

    if args.json {
        let encoded = EncodedKeyPair::from(&pair);
        println!(
            "{}",
            serde_json::to_string_pretty(&encoded).context("failed to serialize key pair")?
        );
    } else {
        println!("{}", pair.private().to_base64());
        println!("{}", pair.public().to_base64());
    }
    Ok(())
}

/// Generate a single pre-shared key.
fn run_psk() -> Result<()> {
    let psk = keys::generate_preshared_secret().context("key generation failed")?;
    println!("{}", psk.to_base64());
    Ok(())
}

/// Read a base64 private key from stdin and print its public key.
fn run_pubkey() -> Result<()> {
    let input = zeroize::Zeroizing::new(
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?,
    );
    let scalar = PrivateScalar::from_base64(&input).context("invalid private key on stdin")?;

    let pair = KeyPair::from_private(scalar);
    keys::verify_keypair(&pair).context("public key derivation failed")?;

    println!("{}", pair.public());
    Ok(())
}
