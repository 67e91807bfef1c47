//! Property based round trips.
//!
//! Payloads are serialized by hand with `byteorder`, decoded with the codec,
//! compared field by field and encoded again.

use byteorder::{LittleEndian, WriteBytesExt};
use proptest::prelude::*;
use ubx_codec::*;

#[derive(Debug, Clone)]
struct NavPosEcefPayload {
    itow: u32,
    ecef_x: i32,
    ecef_y: i32,
    ecef_z: i32,
    p_acc: u32,
}

impl NavPosEcefPayload {
    fn to_bytes(&self) -> Vec<u8> {
        let mut wtr = Vec::with_capacity(20);
        wtr.write_u32::<LittleEndian>(self.itow).unwrap();
        wtr.write_i32::<LittleEndian>(self.ecef_x).unwrap();
        wtr.write_i32::<LittleEndian>(self.ecef_y).unwrap();
        wtr.write_i32::<LittleEndian>(self.ecef_z).unwrap();
        wtr.write_u32::<LittleEndian>(self.p_acc).unwrap();
        wtr
    }
}

fn nav_pos_ecef_strategy() -> impl Strategy<Value = NavPosEcefPayload> {
    (
        any::<u32>(),
        any::<i32>(),
        any::<i32>(),
        any::<i32>(),
        any::<u32>(),
    )
        .prop_map(|(itow, ecef_x, ecef_y, ecef_z, p_acc)| NavPosEcefPayload {
            itow,
            ecef_x,
            ecef_y,
            ecef_z,
            p_acc,
        })
}

#[derive(Debug, Clone)]
struct DgpsChannel {
    svid: i8,
    channel: u8,
    dgps_used: bool,
    age_c: u16,
    prc: f32,
    prrc: f32,
}

#[derive(Debug, Clone)]
struct NavDgpsPayload {
    itow: u32,
    age: i32,
    base_id: i16,
    base_health: i16,
    status: u8,
    channels: Vec<DgpsChannel>,
}

impl NavDgpsPayload {
    fn to_bytes(&self) -> Vec<u8> {
        let mut wtr = Vec::with_capacity(16 + 12 * self.channels.len());
        wtr.write_u32::<LittleEndian>(self.itow).unwrap();
        wtr.write_i32::<LittleEndian>(self.age).unwrap();
        wtr.write_i16::<LittleEndian>(self.base_id).unwrap();
        wtr.write_i16::<LittleEndian>(self.base_health).unwrap();
        wtr.write_u8(self.channels.len() as u8).unwrap();
        wtr.write_u8(self.status).unwrap();
        wtr.write_u16::<LittleEndian>(0).unwrap();
        for ch in &self.channels {
            wtr.write_i8(ch.svid).unwrap();
            wtr.write_u8(ch.channel | (u8::from(ch.dgps_used) << 4)).unwrap();
            wtr.write_u16::<LittleEndian>(ch.age_c).unwrap();
            wtr.write_f32::<LittleEndian>(ch.prc).unwrap();
            wtr.write_f32::<LittleEndian>(ch.prrc).unwrap();
        }
        wtr
    }
}

fn dgps_channel_strategy() -> impl Strategy<Value = DgpsChannel> {
    (
        any::<i8>(),
        0u8..16,
        any::<bool>(),
        any::<u16>(),
        -1e4f32..1e4,
        -1e2f32..1e2,
    )
        .prop_map(|(svid, channel, dgps_used, age_c, prc, prrc)| DgpsChannel {
            svid,
            channel,
            dgps_used,
            age_c,
            prc,
            prrc,
        })
}

fn nav_dgps_strategy() -> impl Strategy<Value = NavDgpsPayload> {
    (
        any::<u32>(),
        any::<i32>(),
        any::<i16>(),
        any::<i16>(),
        0u8..=1,
        prop::collection::vec(dgps_channel_strategy(), 0..40),
    )
        .prop_map(
            |(itow, age, base_id, base_health, status, channels)| NavDgpsPayload {
                itow,
                age,
                base_id,
                base_health,
                status,
                channels,
            },
        )
}

fn nav_sat_sv_strategy() -> impl Strategy<Value = NavSatSvInfo> {
    (
        0u8..=6,
        any::<u8>(),
        any::<u8>(),
        -90i8..=90,
        0i16..360,
        any::<i16>(),
        any::<u32>(),
        0u8..=2,
    )
        .prop_map(|(gnss_id, sv_id, cno, elev, azim, pr_res, flags, health)| {
            let raw = flags & !NavSatSvFlags::RESERVED_MASK & !0x30;
            NavSatSvInfo {
                gnss_id,
                sv_id,
                cno,
                elev,
                azim,
                pr_res,
                flags: NavSatSvFlags::from_raw(raw | (u32::from(health) << 4)),
            }
        })
}

proptest! {
    #[test]
    fn nav_pos_ecef_round_trip(p in nav_pos_ecef_strategy()) {
        let bytes = p.to_bytes();
        let msg = NavPosEcef::from_payload(&bytes).unwrap();
        prop_assert_eq!(msg.itow, p.itow);
        prop_assert_eq!(msg.ecef_x, p.ecef_x);
        prop_assert_eq!(msg.ecef_y, p.ecef_y);
        prop_assert_eq!(msg.ecef_z, p.ecef_z);
        prop_assert_eq!(msg.p_acc, p.p_acc);
        prop_assert_eq!(msg.to_payload().unwrap(), bytes);
    }

    #[test]
    fn nav_dgps_round_trip(p in nav_dgps_strategy()) {
        let bytes = p.to_bytes();
        let mut msg = NavDgps::from_payload(&bytes).unwrap();
        prop_assert_eq!(msg.itow, p.itow);
        prop_assert_eq!(msg.age, p.age);
        prop_assert_eq!(msg.base_id, p.base_id);
        prop_assert_eq!(msg.base_health, p.base_health);
        prop_assert_eq!(msg.num_ch as usize, p.channels.len());
        prop_assert_eq!(msg.data.len(), p.channels.len());
        for (decoded, expected) in msg.data.iter().zip(&p.channels) {
            prop_assert_eq!(decoded.svid, expected.svid);
            prop_assert_eq!(decoded.flags.channel(), expected.channel);
            prop_assert_eq!(decoded.flags.dgps_used(), expected.dgps_used);
            prop_assert_eq!(decoded.age_c, expected.age_c);
            prop_assert_eq!(decoded.prc, expected.prc);
            prop_assert_eq!(decoded.prrc, expected.prrc);
        }
        prop_assert!(msg.valid());
        prop_assert!(!msg.refresh());
        prop_assert_eq!(msg.length(), bytes.len());
        prop_assert_eq!(msg.to_payload().unwrap(), bytes);
    }

    #[test]
    fn nav_sat_refresh_then_round_trip(
        itow in any::<u32>(),
        svs in prop::collection::vec(nav_sat_sv_strategy(), 0..64),
        stale in any::<u8>(),
    ) {
        let mut msg = NavSat {
            itow,
            version: 1,
            num_svs: stale,
            svs: svs.into(),
            ..Default::default()
        };
        let mismatch = usize::from(stale) != msg.svs.len();
        prop_assert_eq!(msg.refresh(), mismatch);
        prop_assert!(!msg.refresh());
        prop_assert_eq!(usize::from(msg.num_svs), msg.svs.len());
        prop_assert!(msg.valid());

        let bytes = msg.to_payload().unwrap();
        prop_assert_eq!(bytes.len(), 8 + 12 * msg.svs.len());
        let back = NavSat::from_payload(&bytes).unwrap();
        prop_assert_eq!(back, msg);
    }

    #[test]
    fn truncated_nav_dgps_never_panics(p in nav_dgps_strategy(), cut in any::<prop::sample::Index>()) {
        let bytes = p.to_bytes();
        let len = cut.index(bytes.len());
        let err = NavDgps::from_payload(&bytes[..len]).unwrap_err();
        prop_assert!(err.is_incomplete());
    }
}
