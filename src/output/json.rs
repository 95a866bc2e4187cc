//! JSON output renderer.
//!
//! Outputs `{"alice": {...}, "bob": {...}, "psk": "..."}`, with an extra
//! `"history"` array when a history is requested.

use serde::Serialize;

use crate::history::History;
use crate::keys::{EncodedSession, Session};
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

#[derive(Serialize)]
struct SessionWithHistory<'a> {
    #[serde(flatten)]
    session: EncodedSession,
    history: &'a [String],
}

impl JsonRenderer {
    /// Render the session with every history line embedded, so the output
    /// stays a single JSON document.
    pub fn render_with_history(&self, session: &Session, history: &History) -> String {
        to_pretty_line(&SessionWithHistory {
            session: EncodedSession::from(session),
            history: history.lines(),
        })
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, session: &Session) -> String {
        to_pretty_line(&EncodedSession::from(session))
    }
}

fn to_pretty_line<T: Serialize>(value: &T) -> String {
    let mut out = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}
