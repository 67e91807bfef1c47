//! Message sets per protocol profile.
//!
//! Each set is an enum with one variant per message and an `Unknown`
//! variant for ids outside of the set, see `define_message_set!`.

#[cfg(feature = "ubx_input")]
pub use self::input::Input;
#[cfg(feature = "ubx_regular")]
pub use self::regular::Regular;
#[cfg(feature = "ubx_ublox8")]
pub use self::ublox8::Ublox8;

#[cfg(feature = "ubx_input")]
mod input {
    use crate::{define_message_set, messages::*};

    define_message_set! {
        /// Messages a receiver accepts
        pub enum Input {
            CfgPrtUart,
            CfgMsg,
            CfgRst,
            CfgRate,
            CfgGnss,
            CfgEsrc,
            CfgGeofence,
            AidIni,
            MgaIniTimeUtc,
            MgaGalEph,
        }
    }
}

#[cfg(feature = "ubx_regular")]
mod regular {
    use crate::{define_message_set, messages::*};

    define_message_set! {
        /// Messages a receiver outputs during normal operation
        pub enum Regular {
            AckAck,
            AckNak,
            NavPosEcef,
            NavPosLlh,
            NavStatus,
            NavDop,
            NavVelNed,
            NavTimeGps,
            NavTimeUtc,
            NavClock,
            NavSvinfo,
            NavDgps,
            NavSbas,
            NavOrb,
            NavSat,
            NavGeofence,
            RxmRawx,
            RxmSvsi,
            InfError,
            InfWarning,
            InfNotice,
            InfTest,
            InfDebug,
            MonVer,
            MonPatch,
            MonGnss,
            TimTp,
            TimSvin,
            EsfStatus,
            MgaAck,
            UpdSos,
            LogInfo,
        }
    }
}

#[cfg(feature = "ubx_ublox8")]
mod ublox8 {
    use crate::{define_message_set, messages::*};

    define_message_set! {
        /// Every message of u-blox 8 firmware known to this crate
        pub enum Ublox8 {
            AckAck,
            AckNak,
            AidIni,
            CfgPrtUart,
            CfgMsg,
            CfgRst,
            CfgRate,
            CfgGnss,
            CfgEsrc,
            CfgGeofence,
            EsfStatus,
            InfError,
            InfWarning,
            InfNotice,
            InfTest,
            InfDebug,
            LogInfo,
            MgaAck,
            MgaIniTimeUtc,
            MgaGalEph,
            MonVer,
            MonPatch,
            MonGnss,
            NavPosEcef,
            NavPosLlh,
            NavStatus,
            NavDop,
            NavVelNed,
            NavTimeGps,
            NavTimeUtc,
            NavClock,
            NavSvinfo,
            NavDgps,
            NavSbas,
            NavOrb,
            NavSat,
            NavGeofence,
            RxmRawx,
            RxmSvsi,
            TimTp,
            TimSvin,
            UpdSos,
        }
    }
}
