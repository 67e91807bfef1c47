//! MON: monitoring

use crate::{
    ubx_bitfield, ubx_bundle, ubx_enum, ubx_flags_field, ubx_message, FixedString, List, Reserved,
};

/// Receiver/Software Version
#[ubx_message]
#[ubx(class = 0x0a, id = 0x04, max_payload_len = 1240)]
pub struct MonVer {
    /// Zero-terminated software version string
    software_version: FixedString<30>,
    /// Zero-terminated hardware version string
    hardware_version: FixedString<10>,
    /// Extended software information strings, as many as the payload holds
    extensions: List<FixedString<30>>,
}

impl MonVer {
    /// Extension strings that are valid UTF-8
    pub fn extension_strs(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().filter_map(FixedString::as_str)
    }
}

/// Installed Patches
#[ubx_message]
#[ubx(class = 0x0a, id = 0x27, max_payload_len = 516)] // 4 + 32 * 16
pub struct MonPatch {
    /// Message version (0x0001 for this version)
    version: u16,
    /// Number of patch entries
    n_entries: u16,
    #[ubx(count = n_entries)]
    patches: List<MonPatchEntry>,
}

#[ubx_bundle]
pub struct MonPatchEntry {
    patch_info: MonPatchInfo,
    /// Comparator number used by this patch
    comparator_number: u32,
    /// Target address of the patch
    patch_address: u32,
    /// Patch data
    patch_data: u32,
}

#[ubx_bitfield(u32)]
pub struct MonPatchInfo {
    #[ubx(bits = 1)]
    activated: bool,
    #[ubx(bits = 2, map_type = PatchLocation)]
    location: u8,
    #[ubx(bits = 29, reserved)]
    reserved: u32,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchLocation {
    Efuse = 0,
    Rom = 1,
    Bbr = 2,
    FileSystem = 3,
}

/// Information message major GNSS selection
#[ubx_message]
#[ubx(class = 0x0a, id = 0x28, fixed_payload_len = 8)]
pub struct MonGnss {
    /// Message version: 0x00
    version: u8,
    /// Supported major constellations
    supported: MonGnssConstellMask,
    /// Default major GNSS selection
    default_gnss: MonGnssConstellMask,
    /// Current major GNSS selection enabled for receiver
    enabled: MonGnssConstellMask,
    /// Maximum number of concurrent Major GNSS that can be supported by this receiver
    simultaneous: u8,
    reserved: Reserved<3>,
}

bitflags::bitflags! {
    /// Selected / available Constellation Mask
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct MonGnssConstellMask: u8 {
        const GPS = 0x01;
        const GLO = 0x02;
        const BDC = 0x04;
        const GAL = 0x08;
    }
}
ubx_flags_field!(MonGnssConstellMask: u8);
