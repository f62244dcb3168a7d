//! Visualizer configuration.

use std::net::SocketAddr;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortvis_core::PacingParameter;

use crate::error::{Error, Result};

/// Configuration for the visualizer.
#[derive(Debug, Clone)]
pub struct VisConfig {
    /// HTTP listen address
    pub addr: SocketAddr,

    /// Initial slider position
    pub pacing: PacingParameter,

    /// Inner width of the bar container before the first client reports one
    pub container_width: u32,

    /// Seed for reproducible arrays; entropy when unset
    pub seed: Option<u64>,

    /// Surface events buffered per client before it has to resync
    pub event_capacity: usize,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            pacing: PacingParameter::default(),
            container_width: 960,
            seed: None,
            event_capacity: 4096,
        }
    }
}

impl VisConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// - `SORTVIS_ADDR`
    /// - `SORTVIS_PACING`
    /// - `SORTVIS_WIDTH`
    /// - `SORTVIS_SEED`
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            addr: env_var("SORTVIS_ADDR")?.unwrap_or(defaults.addr),
            pacing: env_var::<u8>("SORTVIS_PACING")?
                .map(PacingParameter::new)
                .unwrap_or(defaults.pacing),
            container_width: env_var("SORTVIS_WIDTH")?.unwrap_or(defaults.container_width),
            seed: env_var("SORTVIS_SEED")?,
            event_capacity: defaults.event_capacity,
        })
    }

    /// Override the listen port, keeping the host.
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }

    /// Random source for array generation.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn env_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => parse_setting(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_setting<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("invalid {name}: {raw:?}")))
}
