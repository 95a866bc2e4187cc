//! Netdev renderer: both peers' `.netdev` snippets, one after the other.

use crate::keys::Session;
use crate::netdev::{NetdevOptions, render_pair};
use crate::output::OutputRenderer;

/// Renders alice's and bob's `wg.netdev`, each under a comment header.
pub struct NetdevRenderer {
    options: NetdevOptions,
}

impl NetdevRenderer {
    pub fn new(options: NetdevOptions) -> Self {
        Self { options }
    }
}

impl OutputRenderer for NetdevRenderer {
    fn render(&self, session: &Session) -> String {
        let (alice, bob) = render_pair(session, &self.options);
        format!("# alice's wg.netdev\n{alice}\n# bob's wg.netdev\n{bob}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetdevConfig;
    use crate::keys::generate_session;

    #[test]
    fn render_contains_both_peers() {
        let options = NetdevOptions::from_config(&NetdevConfig::default()).unwrap();
        let session = generate_session().unwrap();
        let output = NetdevRenderer::new(options).render(&session);

        assert!(output.starts_with("# alice's wg.netdev\n[NetDev]\n"));
        assert!(output.contains("\n# bob's wg.netdev\n[NetDev]\n"));
        assert_eq!(output.matches("[WireGuardPeer]").count(), 2);
    }
}
