//! Output renderers for a generated session: terminal, JSON, netdev, CSV.

pub mod csv;
pub mod json;
pub mod netdev;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::keys::Session;
use crate::netdev::NetdevOptions;

/// Trait for rendering a session to an output format.
pub trait OutputRenderer {
    /// Render the session to a string.
    fn render(&self, session: &Session) -> String;
}

/// Output format options.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    /// Labelled, coloured key listing.
    #[default]
    Terminal,
    /// Pretty-printed JSON.
    Json,
    /// One systemd-networkd `.netdev` snippet per peer.
    Netdev,
    /// A single history line: a.key,a.pub,b.key,b.pub,psk.
    Csv,
}

impl Format {
    /// Render a session using the renderer for this format.
    pub fn render(&self, session: &Session, options: &NetdevOptions) -> String {
        match self {
            Format::Terminal => terminal::TerminalRenderer.render(session),
            Format::Json => json::JsonRenderer.render(session),
            Format::Netdev => netdev::NetdevRenderer::new(options.clone()).render(session),
            Format::Csv => csv::CsvRenderer.render(session),
        }
    }

    /// Render a session followed by the run's history. JSON embeds the
    /// history as an array; text formats append a legend comment and lines.
    pub fn render_with_history(
        &self,
        session: &Session,
        options: &NetdevOptions,
        history: &History,
    ) -> String {
        match self {
            Format::Json => json::JsonRenderer.render_with_history(session, history),
            _ => format!("{}{}", self.render(session, options), history.block()),
        }
    }
}
