use ubx_codec::*;

#[test]
fn truncated_payload_is_not_enough_data() {
    let msg = NavPosEcef {
        itow: 1,
        ecef_x: 2,
        ecef_y: 3,
        ecef_z: 4,
        p_acc: 5,
    };
    let payload = msg.to_payload().unwrap();
    for len in 0..payload.len() {
        let err = NavPosEcef::from_payload(&payload[..len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotEnoughData, "len {}", len);
        assert!(err.is_incomplete());
    }
    assert_eq!(
        NavPosEcef::from_payload(&payload[..10]),
        Err(CodecError::NotEnoughData { need: 4, got: 2 })
    );
}

#[test]
fn truncated_list_is_not_enough_data() {
    let mut msg = NavOrb::default();
    for sv_id in 1..=3 {
        msg.svs.push(NavOrbSv {
            sv_id,
            ..Default::default()
        });
    }
    msg.refresh();
    let payload = msg.to_payload().unwrap();
    assert_eq!(payload.len(), 8 + 3 * 6);

    for len in 0..payload.len() {
        let mut decoded = NavOrb::default();
        let mut cursor = &payload[..len];
        let err = decoded.read(&mut cursor).unwrap_err();
        assert!(err.is_incomplete(), "len {}", len);
        // Cursor stays where it was
        assert_eq!(cursor.len(), len);
    }
    assert_eq!(
        NavOrb::from_payload(&payload[..20]),
        Err(CodecError::NotEnoughData { need: 18, got: 12 })
    );
}

fn nav_dgps_payload(flags: u8) -> Vec<u8> {
    let mut payload = vec![0u8; 16];
    payload[12] = 1; // num_ch
    payload[13] = 0x01; // status
    payload.extend_from_slice(&[0x05, flags, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    payload
}

#[test]
fn reserved_bytes_reject_frame() {
    let mut payload = nav_dgps_payload(0x02);
    assert!(NavDgps::from_payload(&payload).unwrap().valid());

    payload[14] = 0xaa;
    let err = NavDgps::from_payload(&payload).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidContent {
            message: "NavDgps",
            field: "reserved",
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidContent);

    let mut decoded = NavDgps::default();
    let mut cursor = &payload[..];
    assert!(decoded.read(&mut cursor).is_err());
    assert_eq!(cursor.len(), payload.len());
}

#[test]
fn reserved_bits_in_list_element_reject_frame() {
    let err = NavDgps::from_payload(&nav_dgps_payload(0xe2)).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidContent {
            message: "NavDgpsCh",
            field: "flags",
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidContent);

    let flags = NavDgpsFlags::from_raw(0xe2);
    assert_eq!(flags.channel(), 2);
    assert!(!flags.dgps_used());
    assert!(flags.has_reserved_bits());
    assert_eq!(flags.raw() & NavDgpsFlags::RESERVED_MASK, 0xe0);
}

#[test]
fn reserved_bits_in_bitfield_reject_frame() {
    let mut payload = NavStatus::default().to_payload().unwrap();
    payload[6] = 0x3d; // fix_stat
    let err = NavStatus::from_payload(&payload).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidContent {
            message: "NavStatus",
            field: "fix_stat",
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidContent);

    payload[6] = 0x01;
    assert!(NavStatus::from_payload(&payload).unwrap().fix_stat.diff_corr());
}

#[ubx_message]
#[ubx(class = 0x0a, id = 0x7f, fixed_payload_len = 4)]
struct Lenient {
    value: u8,
    #[ubx(ignore_reserved)]
    reserved1: Reserved<2>,
    flags: LenientFlags,
}

#[ubx_bitfield(u8)]
struct LenientFlags {
    #[ubx(bits = 1)]
    on: bool,
    #[ubx(bits = 7, reserved)]
    reserved: u8,
}

#[test]
fn ignored_reserved_data_is_only_flagged() {
    let payload = [7, 0x12, 0x34, 0x01];
    let msg = Lenient::from_payload(&payload).unwrap();
    assert_eq!(msg.reserved1.0, [0x12, 0x34]);
    assert_eq!(msg.invalid_field(), Some("reserved1"));
    // Write keeps the value that was read
    assert_eq!(msg.to_payload().unwrap(), payload);

    // Only the field declared to ignore reserved data is lenient
    assert_eq!(
        Lenient::from_payload(&[7, 0, 0, 0x81]),
        Err(CodecError::InvalidContent {
            message: "Lenient",
            field: "flags",
        })
    );
}

#[test]
fn undeclared_enum_value_is_flagged() {
    let mut msg = NavStatus::default();
    assert!(msg.valid());
    msg.gps_fix = 9;
    assert_eq!(msg.gps_fix(), None);
    assert_eq!(msg.invalid_field(), Some("gps_fix"));

    msg.set_gps_fix(GpsFix::Fix3D);
    assert_eq!(msg.gps_fix, 3);
    assert!(msg.valid());
}

#[test]
fn range_checks() {
    let mut rate = CfgRate::default();
    assert!(rate.valid());
    rate.nav_rate = 128;
    assert_eq!(rate.invalid_field(), Some("nav_rate"));
    rate.nav_rate = 0;
    assert_eq!(rate.invalid_field(), Some("nav_rate"));

    // Out of range values are still decoded
    let decoded = CfgRate::from_payload(&[0x0a, 0x00, 0x01, 0x00, 0x00, 0x00]).unwrap();
    assert_eq!(decoded.measure_rate_ms, 10);
    assert_eq!(decoded.invalid_field(), Some("measure_rate_ms"));
}

#[test]
fn fail_on_invalid_rejects_frame() {
    let msg = MgaGalEph {
        sv_id: 3,
        ..Default::default()
    };
    let mut payload = msg.to_payload().unwrap();
    assert_eq!(payload[0], 0x01);

    payload[0] = 0x02;
    let err = MgaGalEph::from_payload(&payload).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidContent {
            message: "MgaGalEph",
            field: "msg_type",
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidContent);

    let mut decoded = MgaGalEph::default();
    let mut cursor = &payload[..];
    assert!(decoded.read(&mut cursor).is_err());
    assert_eq!(cursor.len(), 76);
}

#[test]
fn slice_writer_overflow() {
    let msg = NavClock::default();
    let mut buf = [0u8; 19];
    let mut out = SliceWriter::new(&mut buf);
    assert_eq!(
        msg.write(&mut out),
        Err(CodecError::BufferOverflow {
            need: 20,
            capacity: 19,
        })
    );
    assert_eq!(out.position(), 0);

    let mut buf = [0u8; 20];
    let mut out = SliceWriter::new(&mut buf);
    msg.write(&mut out).unwrap();
    assert_eq!(out.position(), 20);
}
