/*
    Copyright 2024 M. Devi Prasad (dp@web3pleb.org)

    Licensed under the Apache License, Version 2.0 (the "License");
    you may not use this file except in compliance with the License.
    You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

use std::cmp::Ordering;

use crate::bits::{div_wide, join, mac, sbb};
use crate::int::cmp_magnitude;
use crate::{BigInt, DoubleLimb, Limb};

// Short division of a magnitude by a single limb.
// returns (quotient, remainder); the quotient is as wide as the dividend.
pub(crate) fn divide_by_limb(u: &[Limb], d: Limb) -> (Vec<Limb>, Limb) {
    assert!(d > 0, "divide_by_limb - division by zero error");
    let mut q: Vec<Limb> = vec![0; u.len()];
    let mut r: Limb = 0;
    // walk the dividend from its most significant limb; r < d holds throughout.
    for (i, &w) in u.iter().enumerate().rev() {
        (q[i], r) = div_wide(r, w, d);
    }
    (q, r)
}

// window -= v * x
// 'window' is one limb wider than 'v'. The caller guarantees v * x <= window.
fn sub_mul(window: &mut [Limb], v: &[Limb], x: Limb) {
    let n = v.len();
    debug_assert_eq!(window.len(), n + 1);
    let mut carry: Limb = 0;
    let mut borrow: Limb = 0;
    for (w, &d) in window.iter_mut().zip(v.iter()) {
        let lo: Limb;
        (lo, carry) = mac(0, d, x, carry);
        (*w, borrow) = sbb(*w, lo, borrow);
    }
    (window[n], borrow) = sbb(window[n], carry, borrow);
    debug_assert_eq!(borrow, 0, "sub_mul - trial quotient digit overshoots the remainder");
}

// Compare the n+1 limb window against the n limb divisor.
fn cmp_window(window: &[Limb], v: &[Limb]) -> Ordering {
    let n = v.len();
    if window[n] != 0 {
        return Ordering::Greater;
    }
    window[..n].iter().rev().cmp(v.iter().rev())
}

// Long division by a divisor of two or more limbs.
// pre-conditions: v is normalized, v.len() >= 2, u.len() >= v.len().
//
// Quotient limbs are produced from the most significant position down. The trial digit
// for a position comes from the top two limbs of the current remainder window divided by
// (leading divisor limb + 1). That estimate never exceeds the true digit, so it is applied
// repeatedly until it drops to zero; at that point the window is below twice the divisor
// and one conditional subtraction finishes the digit.
fn long_divide(u: &[Limb], v: &[Limb]) -> (/* quotient */ Vec<Limb>, /* remainder */ Vec<Limb>) {
    let m = u.len();
    let n = v.len();
    assert!(n >= 2 && m >= n && v[n - 1] != 0);

    // remainder buffer: the dividend with a sentinel zero limb on top.
    let mut rem: Vec<Limb> = Vec::with_capacity(m + 1);
    rem.extend_from_slice(u);
    rem.push(0);

    let estimate: DoubleLimb = v[n - 1] as DoubleLimb + 1;
    let mut quotient: Vec<Limb> = vec![0; m - n + 1];

    for j in (0..=m - n).rev() {
        let window = &mut rem[j..=j + n];
        let mut q: Limb = 0;
        let mut rounds = 0;
        loop {
            let trial = join(window[n], window[n - 1]) / estimate;
            if trial == 0 {
                break;
            }
            debug_assert!(trial <= Limb::MAX as DoubleLimb);
            sub_mul(window, v, trial as Limb);
            q += trial as Limb;
            rounds += 1;
        }
        // the window is now below 2 * v.
        if cmp_window(window, v) != Ordering::Less {
            sub_mul(window, v, 1);
            q += 1;
        }
        log::trace!("long_divide - j = {j}, q = {q:#x} after {rounds} trial rounds");
        quotient[j] = q;
    }
    rem.truncate(n);
    (quotient, rem)
}

// Divide two magnitudes. The divisor must be non-zero.
fn divide_magnitudes(u: &[Limb], v: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    // magnitudes only; the signs are applied by the caller.
    match cmp_magnitude(u, v) {
        Ordering::Less => return (vec![0], u.to_vec()),
        Ordering::Equal => return (vec![1], vec![0]),
        Ordering::Greater => {}
    }
    if v.len() == 1 {
        let (q, r) = divide_by_limb(u, v[0]);
        (q, vec![r])
    } else {
        long_divide(u, v)
    }
}

impl BigInt {
    // Truncating division.
    // The quotient is negative when exactly one operand is; the remainder takes the sign of
    // the dividend. self == q * divisor + r and |r| < |divisor|.
    // panics when the divisor is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> (/* quotient */ BigInt, /* remainder */ BigInt) {
        self.valid();
        divisor.valid();
        assert!(!divisor.is_zero(), "BigInt::div_rem - division by zero error");

        let (q, r) = divide_magnitudes(&self.words, &divisor.words);
        (BigInt::from_parts(self.negative != divisor.negative, q),
         BigInt::from_parts(self.negative, r))
    }

    pub fn checked_div_rem(&self, divisor: &BigInt) -> Option<(BigInt, BigInt)> {
        if divisor.is_zero() {
            log::debug!("BigInt::checked_div_rem - zero divisor");
            None
        } else {
            Some(self.div_rem(divisor))
        }
    }

    pub fn quotient(&self, divisor: &BigInt) -> BigInt {
        self.div_rem(divisor).0
    }

    pub fn remainder(&self, divisor: &BigInt) -> BigInt {
        self.div_rem(divisor).1
    }
}

#[cfg(test)]
mod div_test {
    use crate::div::{divide_by_limb, long_divide};
    use crate::init_logger;
    use crate::BigInt;

    fn init() {
        init_logger(true)
    }

    fn int(v: i64) -> BigInt {
        BigInt::from_i64(v)
    }

    fn check_identity(n: &BigInt, d: &BigInt) {
        let (q, r) = n.div_rem(d);
        assert_eq!(&q.multiply(d).sum(&r), n, "{n:?} / {d:?}");
        assert!(r.abs() < d.abs(), "remainder too large: {r:?} for {n:?} / {d:?}");
        assert!(r.is_zero() || r.is_negative() == n.is_negative());
    }

    #[test]
    fn small() {
        init();
        assert_eq!(int(7).div_rem(&int(2)), (int(3), int(1)));
        assert_eq!(int(-7).div_rem(&int(2)), (int(-3), int(-1)));
        assert_eq!(int(7).div_rem(&int(-2)), (int(-3), int(1)));
        assert_eq!(int(-7).div_rem(&int(-2)), (int(3), int(-1)));
        assert_eq!(int(3).div_rem(&int(7)), (int(0), int(3)));
        assert_eq!(int(-3).div_rem(&int(7)), (int(0), int(-3)));
        assert_eq!(int(0).div_rem(&int(-7)), (int(0), int(0)));
        assert_eq!(int(-7).div_rem(&int(7)), (int(-1), int(0)));
        assert_eq!(int(-7).div_rem(&int(-7)), (int(1), int(0)));
    }

    #[test]
    fn equal_width_mixed_signs() {
        init();
        // same limb count, opposite signs, dividend larger in magnitude
        let n = BigInt::from_parts(true, vec![5, 9]);
        let d = BigInt::from_parts(false, vec![1, 4]);
        let (q, r) = n.div_rem(&d);
        assert_eq!(q, int(-2));
        assert_eq!(r, BigInt::from_parts(true, vec![3, 1]));
        check_identity(&n, &d);
        // divisor larger in magnitude
        let (q, r) = d.div_rem(&n);
        assert_eq!(q, BigInt::zero());
        assert_eq!(r, d);
    }

    #[test]
    fn by_limb() {
        init();
        {
            let (q, r) = divide_by_limb(&[0, 1], 2);
            assert_eq!(q, [1 << 31, 0]);
            assert_eq!(r, 0);
        }
        {
            // (2^64 - 1) / 10
            let (q, r) = divide_by_limb(&[u32::MAX, u32::MAX], 10);
            assert_eq!(q, [0x99999999, 0x19999999]);
            assert_eq!(r, 5);
        }
    }

    #[test]
    fn knuth_cases() {
        init();
        struct Case(Vec<u32>, Vec<u32>, Vec<u32>, Vec<u32>);
        let cases: Vec<Case> = vec![
            // 2^64 / (2^32 + 1) = 2^32 - 1, remainder 1
            Case(vec![0, 0, 1], vec![1, 1], vec![u32::MAX, 0], vec![1, 0]),
            // (2^96 - 1) / (2^64 - 1) = 2^32, remainder 2^32 - 1
            Case(vec![u32::MAX, u32::MAX, u32::MAX], vec![u32::MAX, u32::MAX], vec![0, 1], vec![u32::MAX, 0]),
            // small leading divisor limb: many trial rounds per digit
            Case(vec![0, 0, 0, 0x80000000], vec![u32::MAX, 1], vec![0x10000000, 0x20000000, 0x40000000], vec![0x10000000, 0]),
            // the top dividend window equals the divisor
            Case(vec![7, 3, 5], vec![3, 5], vec![0, 1], vec![7, 0]),
        ];
        for case in cases {
            let (q, r) = long_divide(&case.0, &case.1);
            assert_eq!(q, case.2, "quotient of {:X?} / {:X?}", case.0, case.1);
            assert_eq!(r, case.3, "remainder of {:X?} / {:X?}", case.0, case.1);
        }
    }

    #[test]
    fn identity() {
        init();
        let values = [
            BigInt::from_parts(false, vec![0x9abcdef0, 0x12345678, 0xfedcba98, 0x76543210, 0x1]),
            BigInt::from_parts(true, vec![1, 0, 0, 0, 0, 0x80000000]),
            BigInt::from_parts(false, vec![u32::MAX; 7]),
            BigInt::from_parts(true, vec![0xdeadbeef, 0xcafebabe]),
            BigInt::from_parts(false, vec![3, 0, 1]),
            int(-1),
            int(97),
        ];
        for n in values.iter() {
            for d in values.iter() {
                check_identity(n, d);
            }
        }
    }

    #[test]
    fn checked() {
        init();
        assert_eq!(int(9).checked_div_rem(&BigInt::zero()), None);
        assert_eq!(int(9).checked_div_rem(&int(4)), Some((int(2), int(1))));
        assert_eq!(int(-9).quotient(&int(4)), int(-2));
        assert_eq!(int(-9).remainder(&int(4)), int(-1));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn by_zero() {
        init();
        int(1).div_rem(&BigInt::zero());
    }
}
