use ubx_codec::*;

/// Exercise refresh and the forced read of one message with an external count
macro_rules! check_counted_list {
    ($msg:ty, $count:ident, $list:ident, $len:expr) => {{
        let mut msg = <$msg>::default();
        for _ in 0..$len {
            msg.$list.push(Default::default());
        }
        assert_eq!(msg.refresh(), $len != 0, "{}", <$msg>::NAME);
        assert_eq!(msg.$count as usize, $len, "{}", <$msg>::NAME);
        assert!(!msg.refresh(), "{}", <$msg>::NAME);
        assert!(msg.valid(), "{}", <$msg>::NAME);

        let payload = msg.to_payload().unwrap();
        assert_eq!(payload.len(), msg.length());
        let back = <$msg>::from_payload(&payload).unwrap();
        assert_eq!(back.$list.len(), $len, "{}", <$msg>::NAME);
        assert_eq!(back, msg);
    }};
}

#[test]
fn every_counted_list_refreshes_and_reads_back() {
    let _ = env_logger::builder().is_test(true).try_init();
    for len in [0usize, 1, 3, 17] {
        check_counted_list!(NavSvinfo, num_ch, channels, len);
        check_counted_list!(NavDgps, num_ch, data, len);
        check_counted_list!(NavSbas, cnt, data, len);
        check_counted_list!(NavOrb, num_sv, svs, len);
        check_counted_list!(NavSat, num_svs, svs, len);
        check_counted_list!(NavGeofence, num_fences, fences, len);
        check_counted_list!(RxmRawx, num_meas, measurements, len);
        check_counted_list!(RxmSvsi, num_sv, svs, len);
        check_counted_list!(CfgGnss, num_config_blocks, blocks, len);
        check_counted_list!(CfgEsrc, num_sources, sources, len);
        check_counted_list!(CfgGeofence, num_fences, fences, len);
        check_counted_list!(MonPatch, n_entries, patches, len);
        check_counted_list!(EsfStatus, num_sens, sensors, len);
    }
}

#[test]
fn refresh_reports_only_real_changes() {
    let mut msg = NavSat::default();
    msg.svs.push(NavSatSvInfo::default());
    msg.num_svs = 1;
    assert!(!msg.refresh());

    msg.svs.clear();
    assert!(msg.refresh());
    assert_eq!(msg.num_svs, 0);
    assert!(!msg.refresh());
}

#[test]
fn count_saturates_at_field_width() {
    let mut msg = NavGeofence::default();
    for _ in 0..300 {
        msg.fences.push(NavGeofenceState::default());
    }
    assert!(msg.refresh());
    assert_eq!(msg.num_fences, u8::MAX);
    // Still out of line with the list, but nothing left to change
    assert!(!msg.refresh());
    assert!(!msg.valid());
    assert_eq!(msg.invalid_field(), Some("fences"));

    let mut count = 0u16;
    let list: List<u8> = (0..70_000u32).map(|i| i as u8).collect();
    assert!(sync_count(&mut count, &list));
    assert_eq!(count, u16::MAX);
    assert!(!sync_count(&mut count, &list));
    assert!(!count_matches(&count, &list));
}

#[test]
fn stale_count_is_written_as_is() {
    let mut msg = MonPatch::default();
    msg.patches.push(MonPatchEntry::default());
    msg.patches.push(MonPatchEntry::default());
    assert_eq!(msg.n_entries, 0);
    assert_eq!(msg.invalid_field(), Some("patches"));

    // The payload carries n_entries = 0, so only the header is read back
    let payload = msg.to_payload().unwrap();
    assert_eq!(payload.len(), 4 + 2 * 16);
    assert_eq!(
        MonPatch::from_payload(&payload),
        Err(CodecError::InvalidPacketLen {
            message: "MonPatch",
            expect: 4,
            got: 36,
        })
    );

    msg.refresh();
    let back = MonPatch::from_payload(&msg.to_payload().unwrap()).unwrap();
    assert_eq!(back.patches.len(), 2);
}

#[test]
fn forced_read_stops_at_count() {
    let mut msg = NavSvinfo::default();
    for chn in 0..4 {
        msg.channels.push(NavSvinfoCh {
            chn,
            svid: chn + 10,
            ..Default::default()
        });
    }
    msg.refresh();
    let payload = msg.to_payload().unwrap();

    // Two elements announced, four on the wire
    let mut input = payload.clone();
    input[4] = 2;
    let mut short = NavSvinfo::default();
    let mut cursor = &input[..];
    short.read(&mut cursor).unwrap();
    assert_eq!(short.channels.len(), 2);
    assert_eq!(short.channels[1].svid, 11);
    assert_eq!(cursor.len(), 2 * 12);

    // The next message continues right after the announced elements
    let mut rest = NavSvinfoCh::default();
    rest.read(&mut cursor).unwrap();
    assert_eq!(rest.chn, 2);
}

#[test]
fn forced_count_applies_to_one_read() {
    let mut list: List<u16> = List::new();
    let count = 1u8;
    force_from_count(&count, &mut list);
    assert_eq!(list.forced_read_count(), Some(1));

    let mut input = &[0x01, 0x00, 0x02, 0x00][..];
    list.read(&mut input).unwrap();
    assert_eq!(list.as_slice(), &[1]);
    assert_eq!(input, &[0x02, 0x00]);
    assert_eq!(list.forced_read_count(), None);

    // Unforced, the rest of the input is taken
    let mut input = &[0x01, 0x00, 0x02, 0x00][..];
    list.read(&mut input).unwrap();
    assert_eq!(list.as_slice(), &[1, 2]);
    assert!(input.is_empty());
}
