//! Device configuration
//!
//! Static, per-device parameters: identity, session keys and link
//! capabilities. Mutable transmission status lives in
//! [`crate::device::state`] instead.

/// Device identity and capabilities
pub mod device;

pub use device::DeviceConfig;
