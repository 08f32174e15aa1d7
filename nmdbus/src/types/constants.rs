//! Constants for the NetworkManager D-Bus service.
//!
//! Bus names, well-known object paths, and the numeric codes NetworkManager
//! uses for secret requests and signal strength display.

/// Well-known bus name and object paths.
pub mod bus {
    /// The NetworkManager service name on the system bus.
    pub const SERVICE: &str = "org.freedesktop.NetworkManager";

    /// Path of the manager singleton.
    pub const MANAGER_PATH: &str = "/org/freedesktop/NetworkManager";

    /// Path of the settings (connection profile store) singleton.
    pub const SETTINGS_PATH: &str = "/org/freedesktop/NetworkManager/Settings";

    /// Path of the agent manager singleton.
    pub const AGENT_MANAGER_PATH: &str = "/org/freedesktop/NetworkManager/AgentManager";

    /// Path at which secret agents must export their object.
    pub const SECRET_AGENT_PATH: &str = "/org/freedesktop/NetworkManager/SecretAgent";

    /// NetworkManager encodes "no object" as the root path.
    pub const NULL_PATH: &str = "/";
}

/// Flags passed to a secret agent's GetSecrets call.
pub mod secret_flags {
    pub const NONE: u32 = 0x0;
    pub const ALLOW_INTERACTION: u32 = 0x1;
    pub const REQUEST_NEW: u32 = 0x2;
    pub const USER_REQUESTED: u32 = 0x4;
}

/// Settings sections that may carry secrets, probed in this order when a
/// secrets request names no section.
pub const SECRET_SECTIONS: [&str; 6] = [
    "802-1x",
    "802-11-wireless-security",
    "cdma",
    "gsm",
    "pppoe",
    "vpn",
];

/// Timeout constants for signal-based waiting.
pub mod timeouts {
    use std::time::Duration;

    /// Default maximum time to wait for a connection to reach Activated.
    const ACTIVATION_TIMEOUT_SECS: u64 = 45;

    /// Default maximum time to wait for a deactivation to finish.
    const DEACTIVATION_TIMEOUT_SECS: u64 = 15;

    /// Time to wait after requesting a scan before reading results.
    const SCAN_WAIT_SECS: u64 = 2;

    /// Returns the default activation timeout.
    pub fn activation_timeout() -> Duration {
        Duration::from_secs(ACTIVATION_TIMEOUT_SECS)
    }

    /// Returns the default deactivation timeout.
    pub fn deactivation_timeout() -> Duration {
        Duration::from_secs(DEACTIVATION_TIMEOUT_SECS)
    }

    /// Returns the scan settle delay.
    pub fn scan_wait() -> Duration {
        Duration::from_secs(SCAN_WAIT_SECS)
    }
}

/// Signal strength thresholds for bar display
pub mod signal_strength {
    pub const BAR_1_MAX: u8 = 24;
    pub const BAR_2_MIN: u8 = BAR_1_MAX + 1;
    pub const BAR_2_MAX: u8 = 49;
    pub const BAR_3_MIN: u8 = BAR_2_MAX + 1;
    pub const BAR_3_MAX: u8 = 74;
}

/// WiFi frequency constants (MHz)
pub mod frequency {
    pub const BAND_2_4_START: u32 = 2412;
    pub const BAND_2_4_END: u32 = 2472;
    pub const BAND_2_4_CH14: u32 = 2484;
    pub const BAND_5_START: u32 = 5150;
    pub const BAND_5_END: u32 = 5925;
    pub const BAND_6_START: u32 = 5955;
    pub const BAND_6_END: u32 = 7115;
    pub const CHANNEL_SPACING: u32 = 5;
}

/// Rate conversion constants
pub mod rate {
    pub const KBIT_TO_MBPS: u32 = 1000;
}
