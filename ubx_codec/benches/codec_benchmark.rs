use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ubx_codec::*;

fn nav_sat(num_svs: usize) -> NavSat {
    let mut msg = NavSat {
        itow: 345_600_000,
        version: 1,
        ..Default::default()
    };
    for i in 0..num_svs {
        msg.svs.push(NavSatSvInfo {
            gnss_id: (i % 7) as u8,
            sv_id: i as u8,
            cno: 40,
            elev: 45,
            azim: (i * 11 % 360) as i16,
            pr_res: -12,
            flags: NavSatSvFlags::from_raw(0x0000_091d),
        });
    }
    msg.refresh();
    msg
}

fn nav_dgps(num_ch: usize) -> NavDgps {
    let mut msg = NavDgps {
        itow: 345_600_000,
        age: 1200,
        base_id: 17,
        status: 1,
        ..Default::default()
    };
    for i in 0..num_ch {
        msg.data.push(NavDgpsCh {
            svid: i as i8,
            flags: NavDgpsFlags::default()
                .with_channel((i % 16) as u8)
                .with_dgps_used(true),
            age_c: 800,
            prc: 1.25,
            prrc: -0.5,
        });
    }
    msg.refresh();
    msg
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for count in &[1usize, 32, 255] {
        let msg = nav_sat(*count);
        let payload = msg.to_payload().unwrap();
        c.bench_function(&format!("nav_sat_decode_{}", count), |b| {
            b.iter(|| NavSat::from_payload(black_box(&payload)).unwrap())
        });
        c.bench_function(&format!("nav_sat_encode_{}", count), |b| {
            let mut out = Vec::with_capacity(payload.len());
            b.iter(|| {
                out.clear();
                black_box(&msg).write(&mut out).unwrap();
            })
        });
    }

    for count in &[1usize, 12, 255] {
        let msg = nav_dgps(*count);
        let payload = msg.to_payload().unwrap();
        c.bench_function(&format!("nav_dgps_decode_{}", count), |b| {
            b.iter(|| NavDgps::from_payload(black_box(&payload)).unwrap())
        });
        c.bench_function(&format!("nav_dgps_refresh_{}", count), |b| {
            b.iter(|| {
                let mut msg = msg.clone();
                msg.data.pop();
                msg.refresh()
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
