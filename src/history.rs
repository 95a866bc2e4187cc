//! In-memory history of generated sessions.
//!
//! Owned by the calling layer, never by the generator, and never written
//! to disk.

use crate::keys::{KeyMaterial, Session};

/// Column legend for history lines.
pub const HISTORY_LEGEND: &str = "a.key,a.pub,b.key,b.pub,psk";

/// Running log of sessions, one comma-separated line each.
#[derive(Debug, Default, Clone)]
pub struct History {
    lines: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a session as a single history line (no trailing newline).
    pub fn line(session: &Session) -> String {
        [
            session.alice.private().to_base64(),
            session.alice.public().to_base64(),
            session.bob.private().to_base64(),
            session.bob.public().to_base64(),
            session.psk.to_base64(),
        ]
        .join(",")
    }

    /// Append a session.
    pub fn record(&mut self, session: &Session) {
        self.lines.push(Self::line(session));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All lines, each terminated by `\n`, oldest first.
    pub fn render(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Legend comment followed by every line, for appending to text output.
    pub fn block(&self) -> String {
        format!("\n# history: [{HISTORY_LEGEND}]\n{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::generate_session;

    #[test]
    fn line_has_five_columns_in_legend_order() {
        let session = generate_session().unwrap();
        let line = History::line(&session);
        let columns: Vec<_> = line.split(',').collect();

        assert_eq!(columns.len(), HISTORY_LEGEND.split(',').count());
        assert_eq!(columns[0], session.alice.private().to_base64());
        assert_eq!(columns[1], session.alice.public().to_base64());
        assert_eq!(columns[2], session.bob.private().to_base64());
        assert_eq!(columns[3], session.bob.public().to_base64());
        assert_eq!(columns[4], session.psk.to_base64());
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = History::new();
        let first = generate_session().unwrap();
        let second = generate_session().unwrap();

        history.record(&first);
        history.record(&second);

        assert_eq!(history.len(), 2);
        assert_eq!(history.lines()[0], History::line(&first));
        assert_eq!(history.lines()[1], History::line(&second));
        assert_eq!(
            history.render(),
            format!("{}\n{}\n", History::line(&first), History::line(&second))
        );
    }

    #[test]
    fn block_lists_legend_then_lines() {
        let mut history = History::new();
        let session = generate_session().unwrap();
        history.record(&session);

        let block = history.block();
        let lines: Vec<_> = block.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "# history: [a.key,a.pub,b.key,b.pub,psk]");
        assert_eq!(lines[2], History::line(&session));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_block_has_only_legend() {
        assert_eq!(History::new().block().trim(), "# history: [a.key,a.pub,b.key,b.pub,psk]");
    }

    #[test]
    fn clear_empties_history() {
        let mut history = History::new();
        history.record(&generate_session().unwrap());
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.render(), "");
    }
}
