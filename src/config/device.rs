/// EUI-64 (8 bytes)
pub type EUI64 = [u8; 8];
/// AES-128 key (16 bytes)
pub type AESKey = [u8; 16];
/// Device address (4 bytes)
pub type DevAddr = [u8; 4];

/// Static configuration of a simulated device
///
/// A simulated device is modelled as already activated: the address and
/// session keys are part of its configuration and are handed to the external
/// frame encoder on every encode call.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Device EUI (unique device identifier)
    pub dev_eui: EUI64,
    /// Application EUI
    pub app_eui: EUI64,
    /// Device address
    pub dev_addr: DevAddr,
    /// Network session key
    pub nwk_skey: AESKey,
    /// Application session key
    pub app_skey: AESKey,
    /// Device nonce used for join requests
    pub dev_nonce: u16,
    /// Whether the device splits oversized payloads instead of clipping them
    pub supports_fragmentation: bool,
}

impl DeviceConfig {
    /// Create a configuration for an ABP-activated device.
    pub fn new_abp(
        dev_eui: EUI64,
        app_eui: EUI64,
        dev_addr: DevAddr,
        nwk_skey: AESKey,
        app_skey: AESKey,
    ) -> Self {
        Self {
            dev_eui,
            app_eui,
            dev_addr,
            nwk_skey,
            app_skey,
            dev_nonce: 0,
            supports_fragmentation: false,
        }
    }
}
