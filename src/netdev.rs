//! systemd-networkd `.netdev` snippets for a two-peer WireGuard tunnel.

use ipnetwork::IpNetwork;
use thiserror::Error;

use crate::config::NetdevConfig;
use crate::keys::{KeyMaterial, KeyPair, PresharedSecret, PublicPoint, Session};

/// Errors raised while validating netdev options.
#[derive(Error, Debug)]
pub enum NetdevError {
    #[error("interface name must not be empty")]
    EmptyName,

    #[error(
        "invalid interface name {0:?}: use at most 15 ASCII letters, digits, '-', '_' or '.'"
    )]
    InvalidName(String),

    #[error("at least one AllowedIPs entry is required")]
    NoAllowedIps,

    #[error("invalid AllowedIPs entry {value:?}: {source}")]
    InvalidAllowedIp {
        value: String,
        source: ipnetwork::IpNetworkError,
    },
}

/// Longest interface name the kernel accepts (`IFNAMSIZ` minus the NUL).
pub const MAX_INTERFACE_NAME_LEN: usize = 15;

/// Validated settings shared by both peers' snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetdevOptions {
    pub name: String,
    pub listen_port: u16,
    pub allowed_ips: Vec<IpNetwork>,
    /// `None` omits the `PersistentKeepalive` line.
    pub persistent_keepalive: Option<u16>,
}

impl NetdevOptions {
    /// Validate the `[netdev]` config section.
    pub fn from_config(config: &NetdevConfig) -> Result<Self, NetdevError> {
        let name = config.name.trim();
        if name.is_empty() {
            return Err(NetdevError::EmptyName);
        }
        if !is_valid_interface_name(name) {
            return Err(NetdevError::InvalidName(name.to_string()));
        }
        if config.allowed_ips.is_empty() {
            return Err(NetdevError::NoAllowedIps);
        }

        let allowed_ips = config
            .allowed_ips
            .iter()
            .map(|value| {
                value
                    .trim()
                    .parse::<IpNetwork>()
                    .map_err(|source| NetdevError::InvalidAllowedIp {
                        value: value.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            listen_port: config.listen_port,
            allowed_ips,
            persistent_keepalive: config.persistent_keepalive.filter(|&k| k > 0),
        })
    }
}

fn is_valid_interface_name(name: &str) -> bool {
    name.len() <= MAX_INTERFACE_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

/// Render one peer's `.netdev` file.
///
/// `local` supplies this side's private key (its public key is written as a
/// comment for reference); `remote` is the other peer's public key.
pub fn render_peer(
    local: &KeyPair,
    remote: &PublicPoint,
    psk: &PresharedSecret,
    options: &NetdevOptions,
) -> String {
    let allowed_ips = options
        .allowed_ips
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!(
        "[NetDev]\n\
         Name={}\n\
         Kind=wireguard\n\
         \n\
         [WireGuard]\n\
         PrivateKey = {}\n\
         # PublicKey = {}\n\
         ListenPort = {}\n\
         \n\
         [WireGuardPeer]\n\
         PublicKey = {}\n\
         AllowedIPs = {}\n\
         PresharedKey = {}\n",
        options.name,
        local.private().to_base64(),
        local.public().to_base64(),
        options.listen_port,
        remote.to_base64(),
        allowed_ips,
        psk.to_base64(),
    );

    if let Some(keepalive) = options.persistent_keepalive {
        out.push_str(&format!("PersistentKeepalive = {keepalive}\n"));
    }

    out
}

/// Render alice's and bob's snippets; each names the other as its peer.
pub fn render_pair(session: &Session, options: &NetdevOptions) -> (String, String) {
    let alice = render_peer(&session.alice, session.bob.public(), &session.psk, options);
    let bob = render_peer(&session.bob, session.alice.public(), &session.psk, options);
    (alice, bob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::generate_session;

    fn config(allowed_ips: &[&str]) -> NetdevConfig {
        NetdevConfig {
            allowed_ips: allowed_ips.iter().map(|s| s.to_string()).collect(),
            ..NetdevConfig::default()
        }
    }

    fn default_options() -> NetdevOptions {
        NetdevOptions::from_config(&NetdevConfig::default()).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        let options = default_options();
        assert_eq!(options.name, "wg0");
        assert_eq!(options.listen_port, 51820);
        assert_eq!(options.allowed_ips[0].to_string(), "0.0.0.0/0");
        assert_eq!(options.persistent_keepalive, Some(25));
    }

    #[test]
    fn parses_mixed_address_families() {
        let options = NetdevOptions::from_config(&config(&["10.0.0.0/24", " fd00::/64 "])).unwrap();
        assert_eq!(options.allowed_ips.len(), 2);
        assert!(options.allowed_ips[1].is_ipv6());
    }

    #[test]
    fn rejects_invalid_allowed_ip() {
        let err = NetdevOptions::from_config(&config(&["10.0.0.0/99"])).unwrap_err();
        assert!(matches!(err, NetdevError::InvalidAllowedIp { .. }));
        assert!(err.to_string().contains("10.0.0.0/99"));
    }

    #[test]
    fn rejects_empty_allowed_ips_and_name() {
        assert!(matches!(
            NetdevOptions::from_config(&config(&[])),
            Err(NetdevError::NoAllowedIps)
        ));

        let blank = NetdevConfig {
            name: "  ".into(),
            ..NetdevConfig::default()
        };
        assert!(matches!(
            NetdevOptions::from_config(&blank),
            Err(NetdevError::EmptyName)
        ));
    }

    fn named(name: &str) -> NetdevConfig {
        NetdevConfig {
            name: name.into(),
            ..NetdevConfig::default()
        }
    }

    #[test]
    fn rejects_name_with_embedded_newline() {
        let err = NetdevOptions::from_config(&named("wg0\nKind=bridge")).unwrap_err();
        assert!(matches!(err, NetdevError::InvalidName(ref name) if name == "wg0\nKind=bridge"));
    }

    #[test]
    fn rejects_names_with_separators_or_spaces() {
        for name in ["wg 0", "wg=0", "wg/0", "wg0:1"] {
            assert!(
                matches!(
                    NetdevOptions::from_config(&named(name)),
                    Err(NetdevError::InvalidName(_))
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn name_length_is_capped_at_fifteen_bytes() {
        let longest = "a".repeat(MAX_INTERFACE_NAME_LEN);
        assert_eq!(NetdevOptions::from_config(&named(&longest)).unwrap().name, longest);

        let overlong = "a".repeat(MAX_INTERFACE_NAME_LEN + 1);
        assert!(matches!(
            NetdevOptions::from_config(&named(&overlong)),
            Err(NetdevError::InvalidName(_))
        ));
    }

    #[test]
    fn accepts_common_interface_names() {
        for name in ["wg0", "wg-office", "wg_lab.1", " wg7 "] {
            assert!(NetdevOptions::from_config(&named(name)).is_ok(), "{name:?}");
        }
    }

    #[test]
    fn zero_keepalive_disables_line() {
        let cfg = NetdevConfig {
            persistent_keepalive: Some(0),
            ..NetdevConfig::default()
        };
        let options = NetdevOptions::from_config(&cfg).unwrap();
        assert_eq!(options.persistent_keepalive, None);

        let session = generate_session().unwrap();
        let (alice, _) = render_pair(&session, &options);
        assert!(!alice.contains("PersistentKeepalive"));
    }

    #[test]
    fn peers_reference_each_other() {
        let session = generate_session().unwrap();
        let (alice, bob) = render_pair(&session, &default_options());

        assert!(alice.contains(&format!("PrivateKey = {}", session.alice.private().to_base64())));
        assert!(alice.contains(&format!("# PublicKey = {}", session.alice.public().to_base64())));
        assert!(alice.contains(&format!("[WireGuardPeer]\nPublicKey = {}", session.bob.public().to_base64())));

        assert!(bob.contains(&format!("PrivateKey = {}", session.bob.private().to_base64())));
        assert!(bob.contains(&format!("[WireGuardPeer]\nPublicKey = {}", session.alice.public().to_base64())));

        let psk_line = format!("PresharedKey = {}", session.psk.to_base64());
        assert!(alice.contains(&psk_line));
        assert!(bob.contains(&psk_line));
        assert!(alice.ends_with("PersistentKeepalive = 25\n"));
    }

    #[test]
    fn multiple_allowed_ips_are_comma_separated() {
        let options = NetdevOptions::from_config(&config(&["10.0.0.0/24", "10.1.0.0/16"])).unwrap();
        let session = generate_session().unwrap();
        let (alice, _) = render_pair(&session, &options);
        assert!(alice.contains("AllowedIPs = 10.0.0.0/24, 10.1.0.0/16\n"));
    }
}
