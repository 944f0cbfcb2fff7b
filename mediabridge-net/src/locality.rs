//! Server locality detection
//!
//! Users frequently configure their server by its public address even when it
//! sits on the same LAN (hairpin NAT). Treating such a server as remote would
//! impose WAN bitrate limits for no reason, so the probe resolves the
//! configured hostname and checks two things: is the address private, and if
//! not, does it match our own public-facing address.
//!
//! Both network collaborators (DNS and the public-IP echo service) sit behind
//! traits so callers can substitute their own; tests inject fakes. The probe
//! performs blocking-style awaited I/O with no internal timeout or retry.

use std::net::IpAddr;

use async_trait::async_trait;
use mediabridge_core::MediaBridgeError;
use tracing::{debug, warn};
use url::Url;

/// Echo service returning the caller's public-facing IP address
pub const PUBLIC_IP_ECHO_URL: &str = "https://checkip.amazonaws.com/";

/// Resolves a hostname to an IP address
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolve `host` to one IP address
    async fn resolve(&self, host: &str) -> Result<IpAddr, MediaBridgeError>;
}

/// Looks up the caller's own public-facing IP address
#[async_trait]
pub trait PublicIpSource: Send + Sync {
    /// Fetch the public IP the outside world sees for this caller
    async fn public_ip(&self) -> Result<IpAddr, MediaBridgeError>;
}

/// System DNS resolver
#[derive(Debug, Default)]
pub struct DnsHostResolver;

#[async_trait]
impl HostResolver for DnsHostResolver {
    async fn resolve(&self, host: &str) -> Result<IpAddr, MediaBridgeError> {
        let mut addresses =
            tokio::net::lookup_host((host, 0))
                .await
                .map_err(|e| MediaBridgeError::DnsResolution {
                    host: host.to_string(),
                    reason: e.to_string(),
                })?;
        addresses
            .next()
            .map(|address| address.ip())
            .ok_or_else(|| MediaBridgeError::DnsResolution {
                host: host.to_string(),
                reason: "no addresses returned".to_string(),
            })
    }
}

/// Public-IP lookup via an HTTP echo endpoint
#[derive(Debug)]
pub struct HttpIpEcho {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpIpEcho {
    /// Create a lookup against the default echo endpoint
    pub fn new() -> Self {
        Self::with_endpoint(PUBLIC_IP_ECHO_URL)
    }

    /// Create a lookup against a custom echo endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpIpEcho {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PublicIpSource for HttpIpEcho {
    async fn public_ip(&self) -> Result<IpAddr, MediaBridgeError> {
        let lookup_failed = |reason: String| MediaBridgeError::PublicIpLookup {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| lookup_failed(e.to_string()))?
            .text()
            .await
            .map_err(|e| lookup_failed(e.to_string()))?;

        body.trim()
            .parse::<IpAddr>()
            .map_err(|e| lookup_failed(format!("unparseable response {body:?}: {e}")))
    }
}

/// Determines whether a server endpoint is on the caller's own network
pub struct LocalityProbe {
    resolver: Box<dyn HostResolver>,
    ip_source: Box<dyn PublicIpSource>,
}

impl std::fmt::Debug for LocalityProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalityProbe").finish_non_exhaustive()
    }
}

impl LocalityProbe {
    /// Probe using system DNS and the default echo endpoint
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(DnsHostResolver), Box::new(HttpIpEcho::new()))
    }

    /// Probe using custom network collaborators
    pub fn with_collaborators(
        resolver: Box<dyn HostResolver>,
        ip_source: Box<dyn PublicIpSource>,
    ) -> Self {
        Self {
            resolver,
            ip_source,
        }
    }

    /// Whether `server_url` points at the caller's own network
    ///
    /// A private or loopback address is local immediately. A public address
    /// is local only if it equals the caller's own public IP (hairpin NAT).
    /// DNS or echo-lookup failure surfaces as an error; no retry.
    pub async fn is_local(&self, server_url: &str) -> Result<bool, MediaBridgeError> {
        let url = Url::parse(server_url).map_err(|_| MediaBridgeError::InvalidServerUrl {
            url: server_url.to_string(),
        })?;
        let host = url
            .host_str()
            .ok_or_else(|| MediaBridgeError::InvalidServerUrl {
                url: server_url.to_string(),
            })?;

        let address = self.resolver.resolve(host).await?;
        if is_private_address(address) {
            debug!(%host, %address, "server resolves to a private address");
            return Ok(true);
        }

        let public_ip = self.ip_source.public_ip().await?;
        debug!(%host, %address, %public_ip, "comparing server address against public IP");
        Ok(address == public_ip)
    }

    /// Like [`is_local`](Self::is_local), but treats probe failure as remote
    ///
    /// Remote is the conservative answer: it keeps the WAN bitrate limits in
    /// force when the network situation cannot be determined.
    pub async fn is_local_or_default(&self, server_url: &str) -> bool {
        match self.is_local(server_url).await {
            Ok(local) => local,
            Err(error) => {
                warn!(%error, server_url, "locality probe failed; assuming remote");
                false
            }
        }
    }
}

impl Default for LocalityProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `address` belongs to a private, loopback or link-local range
pub fn is_private_address(address: IpAddr) -> bool {
    match address {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback() || v4.is_link_local(),
        IpAddr::V6(v6) => {
            // Unique-local fc00::/7 and link-local fe80::/10
            let first = v6.segments()[0];
            v6.is_loopback() || (first & 0xfe00) == 0xfc00 || (first & 0xffc0) == 0xfe80
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_private_v4_ranges() {
        assert!(is_private_address(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10))));
        assert!(is_private_address(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
        assert!(is_private_address(IpAddr::V4(Ipv4Addr::new(172, 16, 0, 1))));
        assert!(is_private_address(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        assert!(is_private_address(IpAddr::V4(Ipv4Addr::new(169, 254, 0, 5))));
    }

    #[test]
    fn test_public_v4_addresses() {
        assert!(!is_private_address(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))));
        assert!(!is_private_address(IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))));
    }

    #[test]
    fn test_dns_resolver_resolves_localhost() {
        let resolver = DnsHostResolver;
        let address = tokio_test::block_on(resolver.resolve("localhost")).unwrap();
        assert!(is_private_address(address));
    }

    #[test]
    fn test_v6_ranges() {
        assert!(is_private_address(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert!(is_private_address(
            "fd12:3456:789a::1".parse::<IpAddr>().unwrap()
        ));
        assert!(is_private_address(
            "fe80::1c2a:ff:fe00:1".parse::<IpAddr>().unwrap()
        ));
        assert!(!is_private_address(
            "2606:4700:4700::1111".parse::<IpAddr>().unwrap()
        ));
    }
}
