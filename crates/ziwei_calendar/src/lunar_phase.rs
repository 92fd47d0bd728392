//! New moon instants.
//!
//! Meeus, "Astronomical Algorithms", ch. 49: mean phase plus the periodic
//! terms for the new moon and the fourteen planetary arguments. Accuracy
//! is better than a minute over 1900–2100.

use crate::solar::{jd_ut_to_jde, jde_to_jd_ut};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// JDE of the mean new moon with lunation number 0 (2000-01-06).
const LUNATION_ZERO_JDE: f64 = 2_451_550.097_66;

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// JDE (TT) of the true new moon with lunation number `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = LUNATION_ZERO_JDE + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = 2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3;
    let mp = 201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4;
    let f = 160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4;
    let omega = 124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3;

    let periodic = -0.407_20 * sin_deg(mp)
        + 0.172_41 * e * sin_deg(m)
        + 0.016_08 * sin_deg(2.0 * mp)
        + 0.010_39 * sin_deg(2.0 * f)
        + 0.007_39 * e * sin_deg(mp - m)
        - 0.005_14 * e * sin_deg(mp + m)
        + 0.002_08 * e * e * sin_deg(2.0 * m)
        - 0.001_11 * sin_deg(mp - 2.0 * f)
        - 0.000_57 * sin_deg(mp + 2.0 * f)
        + 0.000_56 * e * sin_deg(2.0 * mp + m)
        - 0.000_42 * sin_deg(3.0 * mp)
        + 0.000_42 * e * sin_deg(m + 2.0 * f)
        + 0.000_38 * e * sin_deg(m - 2.0 * f)
        - 0.000_24 * e * sin_deg(2.0 * mp - m)
        - 0.000_17 * sin_deg(omega)
        - 0.000_07 * sin_deg(mp + 2.0 * m)
        + 0.000_04 * sin_deg(2.0 * mp - 2.0 * f)
        + 0.000_04 * sin_deg(3.0 * m)
        + 0.000_03 * sin_deg(mp + m - 2.0 * f)
        + 0.000_03 * sin_deg(2.0 * mp + 2.0 * f)
        - 0.000_03 * sin_deg(mp + m + 2.0 * f)
        + 0.000_03 * sin_deg(mp - m + 2.0 * f)
        - 0.000_02 * sin_deg(mp - m - 2.0 * f)
        - 0.000_02 * sin_deg(3.0 * mp + m)
        + 0.000_02 * sin_deg(4.0 * mp);

    let planetary = 0.000_325 * sin_deg(299.77 + 0.107_408 * k - 0.009_173 * t2)
        + 0.000_165 * sin_deg(251.88 + 0.016_321 * k)
        + 0.000_164 * sin_deg(251.83 + 26.651_886 * k)
        + 0.000_126 * sin_deg(349.42 + 36.412_478 * k)
        + 0.000_110 * sin_deg(84.66 + 18.206_239 * k)
        + 0.000_062 * sin_deg(141.74 + 53.303_771 * k)
        + 0.000_060 * sin_deg(207.14 + 2.453_732 * k)
        + 0.000_056 * sin_deg(154.84 + 7.306_860 * k)
        + 0.000_047 * sin_deg(34.52 + 27.261_239 * k)
        + 0.000_042 * sin_deg(207.19 + 0.121_824 * k)
        + 0.000_040 * sin_deg(291.34 + 1.844_379 * k)
        + 0.000_037 * sin_deg(161.72 + 24.198_154 * k)
        + 0.000_035 * sin_deg(239.56 + 25.513_099 * k)
        + 0.000_023 * sin_deg(331.55 + 3.592_518 * k);

    mean + periodic + planetary
}

/// UT instant of the new moon with lunation number `k`.
pub fn new_moon_jd_ut(k: i64) -> f64 {
    jde_to_jd_ut(new_moon_jde(k))
}

/// Lunation number of the last new moon at or before `jd_ut`.
pub fn lunation_at_or_before(jd_ut: f64) -> i64 {
    let jde = jd_ut_to_jde(jd_ut);
    let mut k = ((jde - LUNATION_ZERO_JDE) / SYNODIC_MONTH_DAYS).floor() as i64;
    while new_moon_jd_ut(k) > jd_ut {
        k -= 1;
    }
    while new_moon_jd_ut(k + 1) <= jd_ut {
        k += 1;
    }
    k
}
