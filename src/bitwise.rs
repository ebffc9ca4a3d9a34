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

//! Bitwise operations with the semantics of the native signed integers.
//!
//! The operands behave as infinitely sign-extended two's complement bit strings, so
//! `!x == -x - 1`, and `x & y`, `x | y`, `x ^ y` agree with `i64` whenever the operands fit
//! in one. For non-negative operands this is plain limb-wise combination of the magnitudes.

use crate::bits::adc;
use crate::{BigInt, Limb};

// negate a two's complement limb string in place: invert, then add one.
fn negate_limbs(limbs: &mut [Limb]) {
    let mut carry: Limb = 1;
    for w in limbs.iter_mut() {
        (*w, carry) = adc(!*w, 0, carry);
    }
}

impl BigInt {
    // Two's complement image in 'len' limbs.
    // 'len' must exceed the magnitude width so the sign bit has room.
    fn twos_complement(&self, len: usize) -> Vec<Limb> {
        debug_assert!(len > self.words.len());
        let mut limbs = self.words.clone();
        limbs.resize(len, 0);
        if self.negative {
            negate_limbs(&mut limbs);
        }
        limbs
    }

    fn from_twos_complement(mut limbs: Vec<Limb>) -> BigInt {
        let negative = limbs.last().map_or(false, |&w| w >> (Limb::BITS - 1) == 1);
        if negative {
            negate_limbs(&mut limbs);
        }
        BigInt::from_parts(negative, limbs)
    }

    fn combine_bits(&self, n2: &BigInt, op: impl Fn(Limb, Limb) -> Limb) -> BigInt {
        let len = self.words.len().max(n2.words.len()) + 1;
        let x = self.twos_complement(len);
        let y = n2.twos_complement(len);
        let limbs = x.iter().zip(y.iter()).map(|(&a, &b)| op(a, b)).collect();
        BigInt::from_twos_complement(limbs)
    }

    // negative only when both operands are.
    pub fn and(&self, n2: &BigInt) -> BigInt {
        if !self.negative && !n2.negative {
            // the shorter magnitude bounds the result
            let limbs = self.words.iter().zip(n2.words.iter()).map(|(&a, &b)| a & b).collect();
            return BigInt::from_parts(false, limbs);
        }
        self.combine_bits(n2, |a, b| a & b)
    }

    // negative when either operand is.
    pub fn or(&self, n2: &BigInt) -> BigInt {
        self.combine_bits(n2, |a, b| a | b)
    }

    // negative when exactly one operand is.
    pub fn xor(&self, n2: &BigInt) -> BigInt {
        self.combine_bits(n2, |a, b| a ^ b)
    }

    // !x == -x - 1
    pub fn invert(&self) -> BigInt {
        self.negate().subtract(&BigInt::one())
    }
}

#[cfg(test)]
mod bitwise_tests {
    use crate::{init_logger, BigInt};

    fn int(v: i64) -> BigInt {
        BigInt::from_i64(v)
    }

    #[test]
    fn matches_i64() {
        init_logger(true);
        let samples: [i64; 12] = [0, 1, -1, 2, -2, 0x5a5a, -0x5a5a, 0x7FFF00000000FFFF, -0x7EEE000011110000,
                                  i64::MAX, i64::MIN, 0xFFFFFFFF];
        for &a in samples.iter() {
            assert_eq!(int(a).invert(), int(!a), "!{a}");
            for &b in samples.iter() {
                assert_eq!(int(a).and(&int(b)), int(a & b), "{a} & {b}");
                assert_eq!(int(a).or(&int(b)), int(a | b), "{a} | {b}");
                assert_eq!(int(a).xor(&int(b)), int(a ^ b), "{a} ^ {b}");
            }
        }
    }

    #[test]
    fn wide_operands() {
        init_logger(true);
        let x = BigInt::from_parts(false, vec![0x0000FFFF, 0xFFFF0000, 0x12345678]);
        let y = BigInt::from_parts(false, vec![0xEEEE0000, 0x11110000]);
        assert_eq!(x.and(&y), BigInt::from_parts(false, vec![0x0000_0000, 0x11110000]));
        assert_eq!(x.or(&y), BigInt::from_parts(false, vec![0xEEEEFFFF, 0xFFFF0000, 0x12345678]));
        assert_eq!(x.xor(&y), BigInt::from_parts(false, vec![0xEEEEFFFF, 0xEEEE0000, 0x12345678]));
        assert_eq!(x.xor(&x), BigInt::zero());
        assert_eq!(x.and(&x), x);
        assert_eq!(x.or(&x), x);

        // -2^64 is ...1111 0000 0000 (64 zero bits): masks off the low 64 bits
        let mask = BigInt::from_parts(true, vec![0, 0, 1]);
        assert_eq!(x.and(&mask), BigInt::from_parts(false, vec![0, 0, 0x12345678]));
        assert_eq!(mask.invert().invert(), mask);
        assert_eq!(mask.invert(), BigInt::from_u64(u64::MAX));
    }

    #[test]
    fn involution() {
        init_logger(true);
        for v in [int(0), int(-1), int(0xFFFFFFFF), BigInt::from_parts(true, vec![u32::MAX; 4])] {
            assert_eq!(v.invert().invert(), v);
            assert_eq!(v.xor(&v), BigInt::zero());
            assert_eq!(v.and(&v), v);
            assert_eq!(v.or(&v), v);
        }
    }
}
