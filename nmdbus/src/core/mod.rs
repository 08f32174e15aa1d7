//! Object wrappers and operations over the proxy layer.
//!
//! Each remote object kind gets a typed wrapper holding the bus
//! connection and the object path. Wrapper methods funnel proxy errors
//! through the vanished-object classifier so callers can tell a removed
//! transient object from a real bus failure.

pub(crate) mod active;
pub(crate) mod agent;
pub(crate) mod device;
pub(crate) mod ip_config;
pub(crate) mod settings;
pub(crate) mod state_wait;
pub(crate) mod vpn;
pub(crate) mod wifi;
pub(crate) mod wimax;

use zvariant::OwnedObjectPath;

use crate::api::models::NmError;
use crate::types::constants::bus;
use crate::Result;

/// Maps a raw proxy error, attributing vanished-object conditions to `path`.
pub(crate) fn guard<T>(path: &str, result: zbus::Result<T>) -> Result<T> {
    result.map_err(|err| NmError::classify(path, err))
}

/// Translates the daemon's "/" null object into `None`.
pub(crate) fn opt_path(path: OwnedObjectPath) -> Option<OwnedObjectPath> {
    if path.as_str() == bus::NULL_PATH {
        None
    } else {
        Some(path)
    }
}
