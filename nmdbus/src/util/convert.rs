//! Conversions between D-Bus wire representations and display types.
//!
//! NetworkManager transports SSIDs as byte arrays, MAC addresses as byte
//! arrays, and legacy IPv4 data as arrays of u32 cells. The helpers here
//! translate those into strings and `std::net` address types and back.

use log::warn;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::types::constants::{frequency, signal_strength};
use crate::{NmError, Result};

/// Decodes SSID bytes for display, replacing invalid UTF-8 sequences.
///
/// SSIDs are raw byte strings on the wire and need not be valid UTF-8.
/// Callers that must distinguish undecodable SSIDs should keep the raw
/// bytes alongside the decoded form.
pub fn decode_ssid(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Formats a hardware address as colon-separated uppercase hex.
///
/// Works for any length; Ethernet and Wi-Fi use 6 bytes, Infiniband 20.
pub fn mac_to_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Parses a colon-separated Ethernet/Wi-Fi address back into its six
/// octets. Anything else, including short or over-long forms, is
/// rejected.
pub fn mac_from_string(mac: &str) -> Result<Vec<u8>> {
    let octets = mac
        .split(':')
        .map(|part| {
            u8::from_str_radix(part, 16).map_err(|_| NmError::InvalidMacAddress(mac.to_owned()))
        })
        .collect::<Result<Vec<u8>>>()?;
    if octets.len() != 6 {
        return Err(NmError::InvalidMacAddress(mac.to_owned()));
    }
    Ok(octets)
}

/// Decodes a legacy IPv4 cell.
///
/// Legacy `Addresses`/`Routes` properties carry each address as a u32
/// whose bytes, read in little-endian order, are the address octets in
/// transmission order.
pub fn ipv4_from_cell(raw: u32) -> Ipv4Addr {
    Ipv4Addr::from(raw.to_le_bytes())
}

/// Encodes an IPv4 address into a legacy cell.
pub fn ipv4_to_cell(addr: Ipv4Addr) -> u32 {
    u32::from_le_bytes(addr.octets())
}

/// Decodes the legacy `Addresses` property: triples of
/// (address, prefix, gateway). Malformed rows are skipped.
pub fn decode_legacy_ipv4_addresses(raw: &[Vec<u32>]) -> Vec<(Ipv4Addr, u32, Ipv4Addr)> {
    raw.iter()
        .filter_map(|row| {
            if row.len() < 3 {
                warn!("Skipping malformed legacy address row of length {}", row.len());
                return None;
            }
            Some((ipv4_from_cell(row[0]), row[1], ipv4_from_cell(row[2])))
        })
        .collect()
}

/// Decodes the legacy `Routes` property: quads of
/// (destination, prefix, next hop, metric). The metric cell is carried
/// in network byte order.
pub fn decode_legacy_ipv4_routes(raw: &[Vec<u32>]) -> Vec<(Ipv4Addr, u32, Ipv4Addr, u32)> {
    raw.iter()
        .filter_map(|row| {
            if row.len() < 4 {
                warn!("Skipping malformed legacy route row of length {}", row.len());
                return None;
            }
            Some((
                ipv4_from_cell(row[0]),
                row[1],
                ipv4_from_cell(row[2]),
                u32::from_be(row[3]),
            ))
        })
        .collect()
}

/// Decodes a 16-byte IPv6 address; `None` for any other length.
pub fn ipv6_from_bytes(bytes: &[u8]) -> Option<Ipv6Addr> {
    let octets: [u8; 16] = bytes.try_into().ok()?;
    Some(Ipv6Addr::from(octets))
}

/// Converts a Wi-Fi frequency in MHz to a channel number.
///
/// Supports 2.4GHz (channels 1-14), 5GHz, and 6GHz bands.
/// Returns `None` for frequencies outside known Wi-Fi bands.
pub fn channel_from_freq(mhz: u32) -> Option<u16> {
    match mhz {
        frequency::BAND_2_4_START..=frequency::BAND_2_4_END => {
            Some(((mhz - frequency::BAND_2_4_START) / frequency::CHANNEL_SPACING + 1) as u16)
        }
        frequency::BAND_2_4_CH14 => Some(14),
        frequency::BAND_5_START..=frequency::BAND_5_END => {
            Some(((mhz - 5000) / frequency::CHANNEL_SPACING) as u16)
        }
        frequency::BAND_6_START..=frequency::BAND_6_END => {
            Some(((mhz - frequency::BAND_6_START) / frequency::CHANNEL_SPACING + 1) as u16)
        }
        _ => None,
    }
}

/// Converts signal strength (0-100) to a visual bar representation.
///
/// Returns a 4-character string using Unicode block characters:
/// - 0-24%:   `▂___` (1 bar)
/// - 25-49%:  `▂▄__` (2 bars)
/// - 50-74%:  `▂▄▆_` (3 bars)
/// - 75-100%: `▂▄▆█` (4 bars)
pub fn bars_from_strength(s: u8) -> &'static str {
    match s {
        0..=signal_strength::BAR_1_MAX => "▂___",
        signal_strength::BAR_2_MIN..=signal_strength::BAR_2_MAX => "▂▄__",
        signal_strength::BAR_3_MIN..=signal_strength::BAR_3_MAX => "▂▄▆_",
        _ => "▂▄▆█",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ssid() {
        assert_eq!(decode_ssid(b"MyNetwork"), "MyNetwork");
        assert_eq!(decode_ssid("café".as_bytes()), "café");
        assert_eq!(decode_ssid(b""), "");
    }

    #[test]
    fn test_decode_ssid_invalid_utf8() {
        let decoded = decode_ssid(&[0x4d, 0x79, 0xff, 0xfe]);
        assert!(decoded.starts_with("My"));
        assert!(decoded.contains('\u{fffd}'));
    }

    #[test]
    fn test_mac_to_string() {
        assert_eq!(
            mac_to_string(&[0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22]),
            "AA:BB:CC:00:11:22"
        );
        assert_eq!(mac_to_string(&[0x01]), "01");
    }

    #[test]
    fn test_mac_from_string() {
        assert_eq!(
            mac_from_string("AA:BB:CC:00:11:22").unwrap(),
            vec![0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22]
        );
        assert_eq!(
            mac_from_string("aa:bb:cc:00:11:22").unwrap(),
            vec![0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22]
        );
        assert!(mac_from_string("not-a-mac").is_err());
        assert!(mac_from_string("").is_err());
    }

    #[test]
    fn test_mac_from_string_requires_six_octets() {
        assert!(mac_from_string("00:11:22").is_err());
        assert!(mac_from_string("AA:BB:CC:00:11:22:33").is_err());
        assert!(mac_from_string("AA::CC:00:11:22").is_err());
        assert!(mac_from_string("AA:BB:CC:00:11:22").is_ok());
    }

    #[test]
    fn test_mac_round_trip() {
        let original = "DE:AD:BE:EF:00:01";
        let bytes = mac_from_string(original).unwrap();
        assert_eq!(mac_to_string(&bytes), original);
    }

    #[test]
    fn test_ipv4_cell_conversion() {
        let addr: Ipv4Addr = "192.168.1.1".parse().unwrap();
        assert_eq!(ipv4_to_cell(addr), 0x0101_A8C0);
        assert_eq!(ipv4_from_cell(0x0101_A8C0), addr);
    }

    #[test]
    fn test_ipv4_cell_round_trip() {
        for text in ["0.0.0.0", "10.0.0.1", "255.255.255.255", "172.16.254.3"] {
            let addr: Ipv4Addr = text.parse().unwrap();
            assert_eq!(ipv4_from_cell(ipv4_to_cell(addr)), addr);
        }
    }

    #[test]
    fn test_decode_legacy_addresses() {
        let raw = vec![
            vec![ipv4_to_cell("192.168.1.5".parse().unwrap()), 24,
                 ipv4_to_cell("192.168.1.1".parse().unwrap())],
            vec![1, 2], // malformed, skipped
        ];
        let decoded = decode_legacy_ipv4_addresses(&raw);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].0.to_string(), "192.168.1.5");
        assert_eq!(decoded[0].1, 24);
        assert_eq!(decoded[0].2.to_string(), "192.168.1.1");
    }

    #[test]
    fn test_decode_legacy_routes_metric_byte_order() {
        let raw = vec![vec![
            ipv4_to_cell("10.0.0.0".parse().unwrap()),
            8,
            ipv4_to_cell("192.168.1.1".parse().unwrap()),
            100u32.to_be(),
        ]];
        let decoded = decode_legacy_ipv4_routes(&raw);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].3, 100);
    }

    #[test]
    fn test_ipv6_from_bytes() {
        let loopback = ipv6_from_bytes(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(loopback, Some(Ipv6Addr::LOCALHOST));
        assert_eq!(ipv6_from_bytes(&[1, 2, 3]), None);
    }

    #[test]
    fn test_channel_from_freq_2_4ghz() {
        assert_eq!(channel_from_freq(2412), Some(1));
        assert_eq!(channel_from_freq(2437), Some(6));
        assert_eq!(channel_from_freq(2472), Some(13));
        assert_eq!(channel_from_freq(2484), Some(14));
    }

    #[test]
    fn test_channel_from_freq_5ghz() {
        assert_eq!(channel_from_freq(5180), Some(36));
        assert_eq!(channel_from_freq(5500), Some(100));
    }

    #[test]
    fn test_channel_from_freq_invalid() {
        assert_eq!(channel_from_freq(1000), None);
        assert_eq!(channel_from_freq(9999), None);
    }

    #[test]
    fn test_bars_from_strength() {
        assert_eq!(bars_from_strength(0), "▂___");
        assert_eq!(bars_from_strength(30), "▂▄__");
        assert_eq!(bars_from_strength(60), "▂▄▆_");
        assert_eq!(bars_from_strength(90), "▂▄▆█");
    }
}
