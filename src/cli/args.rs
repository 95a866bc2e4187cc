//! Clap argument types and config overrides.

use clap::{ArgAction, Parser};

use wgkeygen::config::Config;
use wgkeygen::output::Format;

/// WireGuard key pair, pre-shared key and netdev snippet generator.
#[derive(Parser, Debug)]
#[command(name = "wgkeygen", version = wgkeygen::constants::VERSION)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable coloured output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate key pairs for two peers plus a pre-shared key.
    Generate(GenerateArgs),

    /// Generate a single key pair.
    Keypair(KeypairArgs),

    /// Generate a single pre-shared key.
    Psk,

    /// Derive the public key for a base64 private key read from stdin.
    Pubkey,

    /// Print version and build information.
    Version,
}

/// Arguments for the `keypair` subcommand.
#[derive(Parser, Debug)]
pub struct KeypairArgs {
    /// Print `{"private_key": ..., "public_key": ...}` instead of two lines.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    // --- Output ---
    /// Output format (default: terminal, or `[output] format` from config).
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<Format>,

    /// Regenerate this many times; only the last session is rendered.
    #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub count: u32,

    /// Print the history of every session generated by this run.
    #[arg(long, default_value_t = false)]
    pub history: bool,

    // --- Netdev ---
    /// Interface name written to `Name=`.
    #[arg(long)]
    pub name: Option<String>,

    /// UDP port written to `ListenPort`.
    #[arg(long)]
    pub listen_port: Option<u16>,

    /// Comma-separated CIDR networks written to `AllowedIPs`.
    #[arg(long, value_delimiter = ',')]
    pub allowed_ips: Vec<String>,

    /// Seconds written to `PersistentKeepalive`.
    #[arg(long)]
    pub keepalive: Option<u16>,

    /// Omit the `PersistentKeepalive` line.
    #[arg(long, default_value_t = false, conflicts_with = "keepalive")]
    pub no_keepalive: bool,
}

impl GenerateArgs {
    /// Apply CLI flags on top of the loaded config (flags win).
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(ref name) = self.name {
            config.netdev.name = name.clone();
        }
        if let Some(port) = self.listen_port {
            config.netdev.listen_port = port;
        }
        if !self.allowed_ips.is_empty() {
            config.netdev.allowed_ips = self.allowed_ips.clone();
        }
        if let Some(keepalive) = self.keepalive {
            config.netdev.persistent_keepalive = Some(keepalive);
        }
        if self.no_keepalive {
            config.netdev.persistent_keepalive = None;
        }
    }
}
