//! Broadcast configuration
//!
//! The destination address, destination port, and target broadcast frequency
//! are the subsystem's only external inputs; everything else about the wire
//! protocol is fixed per protocol version.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{error::ControlError, Result};

/// Default destination: local subnet broadcast.
pub const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::BROADCAST);
/// Default destination port.
pub const DEFAULT_PORT: u16 = 35680;
/// Default broadcast rate. Chosen to exceed common external
/// lighting-protocol frame rates (DMX refresh tops out around 44 Hz).
pub const DEFAULT_FREQUENCY_HZ: u32 = 88;

/// Destination and rate settings for the broadcast scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastConfig {
    /// Destination address (unicast or subnet broadcast)
    #[serde(default = "default_address")]
    pub address: IpAddr,
    /// Destination UDP port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Target datagrams per second
    #[serde(default = "default_frequency")]
    pub frequency_hz: u32,
}

fn default_address() -> IpAddr {
    DEFAULT_ADDRESS
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_frequency() -> u32 {
    DEFAULT_FREQUENCY_HZ
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            port: DEFAULT_PORT,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
        }
    }
}

impl BroadcastConfig {
    /// The full destination socket address.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    /// Tick period derived from the target frequency.
    pub fn interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.frequency_hz.max(1) as u64)
    }

    /// Reject configurations the scheduler cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.frequency_hz == 0 {
            return Err(ControlError::InvalidParameter(
                "broadcast frequency must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
