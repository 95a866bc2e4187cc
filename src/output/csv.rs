//! CSV renderer: the session as one history line.

use crate::history::History;
use crate::keys::Session;
use crate::output::OutputRenderer;

/// Renders `a.key,a.pub,b.key,b.pub,psk` followed by a newline.
pub struct CsvRenderer;

impl OutputRenderer for CsvRenderer {
    fn render(&self, session: &Session) -> String {
        format!("{}\n", History::line(session))
    }
}
