//! Terminal renderer: a labelled listing of the generated values.
//!
//! Same order as the history line legend, with the PSK first.

use colored::Colorize;

use crate::keys::{KeyMaterial, Session};
use crate::output::OutputRenderer;

/// Terminal output renderer with coloured labels.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, session: &Session) -> String {
        let rows = [
            ("psk", session.psk.to_base64()),
            ("key (alice)", session.alice.private().to_base64()),
            ("pub (alice)", session.alice.public().to_base64()),
            ("key (bob)", session.bob.private().to_base64()),
            ("pub (bob)", session.bob.public().to_base64()),
        ];

        let mut output = String::new();
        for (label, value) in rows {
            let label = format!("{label:<12}");
            let styled = if label.starts_with("pub") {
                value.green().to_string()
            } else {
                value.yellow().to_string()
            };
            output.push_str(&format!("  {} {}\n", label.cyan().bold(), styled));
        }

        output.push_str(&format!("{}\n", "─".repeat(58).dimmed()));
        output.push_str(&format!(
            "  {}\n",
            "Private keys and the psk are secrets; share only pub values.".dimmed()
        ));

        output
    }
}
