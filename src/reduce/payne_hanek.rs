//! Multi-limb reduction of huge arguments modulo π/2
//!
//! The argument is cut into three 24-bit limbs, multiplied by the binary
//! expansion of 2/π (stored as 24-bit digits) and only the digits that can
//! influence the fractional part of the product are generated. When the
//! leading fraction digits cancel, more digits of 2/π are pulled in and the
//! product is recomputed.

use crate::bits::{exponent, two_pow};
use crate::consts::{TWO_POW_24, TWO_POW_M24};

/// 2/π in 24-bit digits: 2/π = Σ TWO_OVER_PI[i] · 2^(-24(i+1)).
const TWO_OVER_PI: [i32; 66] = [
    0xA2F983, 0x6E4E44, 0x1529FC, 0x2757D1, 0xF534DD, 0xC0DB62, 0x95993C, 0x439041, 0xFE5163,
    0xABDEBB, 0xC561B7, 0x246E3A, 0x424DD2, 0xE00649, 0x2EEA09, 0xD1921C, 0xFE1DEB, 0x1CB129,
    0xA73EE8, 0x8235F5, 0x2EBB44, 0x84E99C, 0x7026B4, 0x5F7E41, 0x3991D6, 0x398353, 0x39F49C,
    0x845F8B, 0xBDF928, 0x3B1FF8, 0x97FFDE, 0x05980F, 0xEF2F11, 0x8B5A0A, 0x6D1F6D, 0x367ECF,
    0x27CB09, 0xB74F46, 0x3F669E, 0x5FEA2D, 0x7527BA, 0xC7EBE5, 0xF17B3D, 0x0739F7, 0x8A5292,
    0xEA6BFB, 0x5FB11F, 0x8D5D08, 0x560330, 0x46FC7B, 0x6BABF0, 0xCFBC20, 0x9AF436, 0x1DA9E3,
    0x91615E, 0xE61B08, 0x659985, 0x5F14A0, 0x68408D, 0xFFD880, 0x4D7327, 0x310606, 0x1556CA,
    0x73A8C9, 0x60E27B, 0xC08C6B,
];

/// π/2 in 24-bit chunks, each exactly representable.
const PIO2_CHUNKS: [f64; 8] = [
    1.57079625129699707031e+00,
    7.54978941586159635335e-08,
    5.39030252995776476554e-15,
    3.28200341580791294123e-22,
    1.27065575308067607349e-29,
    1.22933308981111328932e-36,
    2.73370053816464559624e-44,
    2.16741683877804819444e-51,
];

/// Fraction digits kept beyond the integer part (enough for a double-double).
const KEPT_DIGITS: usize = 4;

/// Scratch capacity: kept digits, input limbs and recomputation headroom.
const SCRATCH: usize = 20;

/// Reduce a finite `x >= 2^19·π/2` modulo π/2.
///
/// Returns `(n mod 8, hi, lo)` with `x ≈ n·π/2 + hi + lo` and
/// `|hi + lo| <= π/4`.
pub(super) fn rem_pio2_large(x: f64) -> (i32, f64, f64) {
    debug_assert!(x.is_finite() && x > 0.0);

    // Scale so the value sits in [2^23, 2^24), then slice into 24-bit limbs.
    let scale = exponent(x) - 23;
    let mut z = x * two_pow(-scale);
    let mut limbs = [0.0f64; 3];
    for limb in limbs.iter_mut().take(2) {
        *limb = (z as i32) as f64;
        z = (z - *limb) * TWO_POW_24;
    }
    limbs[2] = z;

    let mut len = 3;
    while limbs[len - 1] == 0.0 {
        len -= 1;
    }
    kernel(&limbs[..len], scale)
}

/// Multiply the limbs `x` (scaled by `2^e0`) by 2/π and keep the fraction.
fn kernel(x: &[f64], e0: i32) -> (i32, f64, f64) {
    let last_limb = x.len() - 1;
    // First digit of 2/π that contributes past the binary point.
    let first_digit = ((e0 - 3) / 24).max(0) as usize;
    let mut q0 = e0 - 24 * (first_digit as i32 + 1);

    let digit = |j: isize| -> f64 {
        if j < 0 { 0.0 } else { TWO_OVER_PI[j as usize] as f64 }
    };
    let mut f = [0.0f64; SCRATCH];
    for (i, slot) in f.iter_mut().enumerate().take(last_limb + KEPT_DIGITS + 1) {
        *slot = digit(first_digit as isize - last_limb as isize + i as isize);
    }

    let mut q = [0.0f64; SCRATCH];
    for (i, slot) in q.iter_mut().enumerate().take(KEPT_DIGITS + 1) {
        *slot = product_term(x, &f, last_limb + i);
    }

    let mut jz = KEPT_DIGITS;
    let mut iq = [0i32; SCRATCH];
    loop {
        // Distill q into 24-bit integer digits, most significant first.
        let mut z = q[jz];
        for i in 0..jz {
            let hi = ((TWO_POW_M24 * z) as i32) as f64;
            iq[i] = (z - TWO_POW_24 * hi) as i32;
            z = q[jz - i - 1] + hi;
        }

        // Integer part of the product, modulo 8.
        z *= two_pow(q0);
        z -= 8.0 * (z * 0.125).floor();
        let mut n = z as i32;
        z -= n as f64;

        // Fraction sign: 0 below one half, 1 or 2 at or above.
        let mut ih = 0;
        if q0 > 0 {
            let carry = iq[jz - 1] >> (24 - q0);
            n += carry;
            iq[jz - 1] -= carry << (24 - q0);
            ih = iq[jz - 1] >> (23 - q0);
        } else if q0 == 0 {
            ih = iq[jz - 1] >> 23;
        } else if z >= 0.5 {
            ih = 2;
        }

        if ih > 0 {
            // Fraction >= 1/2: take 1 - fraction and bump n.
            n += 1;
            let mut borrowed = false;
            for d in iq.iter_mut().take(jz) {
                if borrowed {
                    *d = 0xFF_FFFF - *d;
                } else if *d != 0 {
                    borrowed = true;
                    *d = 0x100_0000 - *d;
                }
            }
            match q0 {
                1 => iq[jz - 1] &= 0x7F_FFFF,
                2 => iq[jz - 1] &= 0x3F_FFFF,
                _ => {}
            }
            if ih == 2 {
                z = 1.0 - z;
                if borrowed {
                    z -= two_pow(q0);
                }
            }
        }

        // Leading fraction digits all cancelled: pull in more digits of 2/π.
        if z == 0.0 && iq[KEPT_DIGITS..jz].iter().all(|&d| d == 0) {
            let mut extra = 1;
            while iq[KEPT_DIGITS - extra] == 0 {
                extra += 1;
            }
            for i in (jz + 1)..=(jz + extra) {
                f[last_limb + i] = digit((first_digit + i) as isize);
                q[i] = product_term(x, &f, last_limb + i);
            }
            jz += extra;
            continue;
        }

        // Drop trailing zero digits, or split the last partial one.
        if z == 0.0 {
            jz -= 1;
            q0 -= 24;
            while iq[jz] == 0 {
                jz -= 1;
                q0 -= 24;
            }
        } else {
            z *= two_pow(-q0);
            if z >= TWO_POW_24 {
                let hi = ((TWO_POW_M24 * z) as i32) as f64;
                iq[jz] = (z - TWO_POW_24 * hi) as i32;
                jz += 1;
                q0 += 24;
                iq[jz] = hi as i32;
            } else {
                iq[jz] = z as i32;
            }
        }

        // Fraction digits back to floating point, then times π/2.
        let mut weight = two_pow(q0);
        for i in (0..=jz).rev() {
            q[i] = weight * iq[i] as f64;
            weight *= TWO_POW_M24;
        }
        let mut fq = [0.0f64; SCRATCH];
        for i in (0..=jz).rev() {
            let terms = KEPT_DIGITS.min(jz - i);
            fq[jz - i] = (0..=terms).map(|k| PIO2_CHUNKS[k] * q[i + k]).fold(0.0, |acc, t| acc + t);
        }

        // Compress into a double-double, smallest terms first.
        let mut hi = 0.0;
        for &t in fq[..=jz].iter().rev() {
            hi += t;
        }
        let mut lo = fq[0] - hi;
        for &t in &fq[1..=jz] {
            lo += t;
        }
        if ih != 0 {
            hi = -hi;
            lo = -lo;
        }
        return (n & 7, hi, lo);
    }
}

/// `Σ_j x[j] · f[at - j]`
#[inline]
fn product_term(x: &[f64], f: &[f64; SCRATCH], at: usize) -> f64 {
    x.iter()
        .enumerate()
        .fold(0.0, |acc, (j, &limb)| acc + limb * f[at - j])
}
