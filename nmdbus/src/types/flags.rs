//! Bitmask types NetworkManager reports as raw u32 properties.

use bitflags::bitflags;

bitflags! {
    /// Device capability flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DeviceCapabilities: u32 {
        /// No capabilities.
        const NONE = 0x00000000;
        /// NetworkManager supports this device.
        const NM_SUPPORTED = 0x00000001;
        /// Device supports carrier detection.
        const CARRIER_DETECT = 0x00000002;
        /// Device is a software device.
        const IS_SOFTWARE = 0x00000004;
        /// Device supports SR-IOV.
        const SRIOV = 0x00000008;
    }

    /// Access point capability flags (the `Flags` property).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ApFlags: u32 {
        /// No flags.
        const NONE = 0x00000000;
        /// Access point supports privacy/encryption.
        const PRIVACY = 0x00000001;
        /// Access point supports Wi-Fi Protected Setup.
        const WPS = 0x00000002;
        /// Access point supports push-button WPS.
        const WPS_PBC = 0x00000004;
        /// Access point supports PIN-based WPS.
        const WPS_PIN = 0x00000008;
    }

    /// Access point security flags (the `WpaFlags` and `RsnFlags` properties).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ApSecurityFlags: u32 {
        /// No security.
        const NONE = 0x00000000;
        /// Pairwise 40-bit WEP encryption.
        const PAIR_WEP40 = 0x00000001;
        /// Pairwise 104-bit WEP encryption.
        const PAIR_WEP104 = 0x00000002;
        /// Pairwise TKIP encryption.
        const PAIR_TKIP = 0x00000004;
        /// Pairwise CCMP encryption.
        const PAIR_CCMP = 0x00000008;
        /// Group 40-bit WEP encryption.
        const GROUP_WEP40 = 0x00000010;
        /// Group 104-bit WEP encryption.
        const GROUP_WEP104 = 0x00000020;
        /// Group TKIP encryption.
        const GROUP_TKIP = 0x00000040;
        /// Group CCMP encryption.
        const GROUP_CCMP = 0x00000080;
        /// Pre-shared key authentication.
        const KEY_MGMT_PSK = 0x00000100;
        /// 802.1X authentication.
        const KEY_MGMT_802_1X = 0x00000200;
        /// Simultaneous Authentication of Equals.
        const KEY_MGMT_SAE = 0x00000400;
        /// Opportunistic Wireless Encryption.
        const KEY_MGMT_OWE = 0x00000800;
    }

    /// Capabilities a secret agent announces when registering.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AgentCapabilities: u32 {
        /// No special capabilities.
        const NONE = 0x00000000;
        /// The agent can handle VPN plugin hints.
        const VPN_HINTS = 0x00000001;
    }
}

impl ApSecurityFlags {
    /// True when the flags demand enterprise (802.1X) authentication.
    pub fn is_enterprise(&self) -> bool {
        self.contains(Self::KEY_MGMT_802_1X)
    }

    /// True when a pre-shared key (or SAE password) unlocks the network.
    pub fn is_psk(&self) -> bool {
        self.contains(Self::KEY_MGMT_PSK) || self.contains(Self::KEY_MGMT_SAE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ap_flags_from_bits() {
        let flags = ApFlags::from_bits_truncate(0x1);
        assert!(flags.contains(ApFlags::PRIVACY));
        assert!(!flags.contains(ApFlags::WPS));
    }

    #[test]
    fn test_security_flags_psk() {
        let wpa2 = ApSecurityFlags::from_bits_truncate(0x188);
        assert!(wpa2.is_psk());
        assert!(!wpa2.is_enterprise());

        let sae = ApSecurityFlags::KEY_MGMT_SAE;
        assert!(sae.is_psk());
    }

    #[test]
    fn test_security_flags_enterprise() {
        let eap = ApSecurityFlags::from_bits_truncate(0x200);
        assert!(eap.is_enterprise());
        assert!(!eap.is_psk());
    }

    #[test]
    fn test_unknown_bits_truncated() {
        let flags = ApSecurityFlags::from_bits_truncate(0xFFFF_0000);
        assert_eq!(flags, ApSecurityFlags::NONE);
    }
}
