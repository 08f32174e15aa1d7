//! Real-time monitoring through D-Bus signals.
//!
//! Typed signal streams for callers that want to drive their own event
//! loop, and callback monitors that merge the relevant streams and run
//! until the shutdown channel fires.

pub mod device;
pub mod manager;
pub mod network;

pub use manager::ManagerEvent;
pub use network::NetworkEvent;
