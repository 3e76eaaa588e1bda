// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration and HTTP server lifecycle events.

use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

use tracing::Level;

use super::StructuredLog;

/// Configuration was loaded from a file.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Configuration loaded from '{}'", self.path)
    }
}

impl StructuredLog for ConfigLoaded<'_> {}

/// No config file was found; built-in defaults are in effect.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ConfigDefaulted<'a> {
    pub path: &'a str,
}

impl Display for ConfigDefaulted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Config file '{}' not found, using built-in defaults",
            self.path
        )
    }
}

impl StructuredLog for ConfigDefaulted<'_> {
    fn level(&self) -> Level {
        Level::WARN
    }
}

/// The HTTP listener is bound and serving.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerListening {
    pub addr: SocketAddr,
}

impl Display for ServerListening {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Listening on http://{}", self.addr)
    }
}

impl StructuredLog for ServerListening {}

/// A request failed validation before reaching a transform or the store.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct RequestRejected<'a> {
    pub endpoint: &'a str,
    pub reason: &'a str,
}

impl Display for RequestRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Request to '{}' rejected: {}", self.endpoint, self.reason)
    }
}

impl StructuredLog for RequestRejected<'_> {
    fn level(&self) -> Level {
        Level::WARN
    }
}
