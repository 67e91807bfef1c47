//! Message definitions, one module per UBX class.
//!
//! Field names follow the u-blox 8 / M8 receiver description with the
//! usual snake_case conversion. Scaled fields keep the raw wire integer and
//! get a physical unit accessor; enumerated fields keep the raw value and
//! get an `Option` accessor.

use crate::ubx_enum;

mod ack;
mod aid;
mod cfg;
mod datalog;
mod esf;
mod inf;
mod mga;
mod mon;
mod nav;
mod rxm;
mod tim;
mod upd;

pub use ack::*;
pub use aid::*;
pub use cfg::*;
pub use datalog::*;
pub use esf::*;
pub use inf::*;
pub use mga::*;
pub use mon::*;
pub use nav::*;
pub use rxm::*;
pub use tim::*;
pub use upd::*;

/// GNSS identifier used by several messages
#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GnssId {
    Gps = 0,
    Sbas = 1,
    Galileo = 2,
    Beidou = 3,
    Imes = 4,
    Qzss = 5,
    Glonass = 6,
}

/// UTC standard a receiver aligns its time to
#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UtcStandard {
    NotAvailable = 0,
    /// Communications Research Labratory, Tokyo
    Crl = 1,
    /// National Institute of Standards and Technology
    Nist = 2,
    /// U.S. Naval Observatory
    Usno = 3,
    /// International Bureau of Weights and Measures
    Bipm = 4,
    /// European laboratory
    Eu = 5,
    /// Former Soviet Union
    Su = 6,
    /// National Time Service Center, China
    Ntsc = 7,
    /// National Physics Laboratory, India
    Npli = 8,
    Unknown = 15,
}

/// Health of a satellite as known to the receiver
#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SvHealth {
    Unknown = 0,
    Healthy = 1,
    Unhealthy = 2,
}
