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
use std::hash::{Hash, Hasher};

use crate::bits::{adc, join, mac, sbb, split, LIMB_BASE};
use crate::{BigInt, DoubleLimb, Limb};

// Order two normalized magnitudes: more limbs means larger,
// otherwise the limbs decide from the most significant one down.
pub(crate) fn cmp_magnitude(a: &[Limb], b: &[Limb]) -> Ordering {
    a.len().cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_magnitudes(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry: Limb = 0;
    for (&x, &y) in long.iter().zip(short.iter()) {
        let limb_sum: Limb;
        (limb_sum, carry) = adc(x, y, carry);
        sum.push(limb_sum);
    }
    // carry through the rest of the longer operand
    for &x in &long[short.len()..] {
        let limb_sum: Limb;
        (limb_sum, carry) = adc(x, 0, carry);
        sum.push(limb_sum);
    }
    if carry > 0 {
        sum.push(carry);
    }
    sum
}

// pre-condition: |larger| >= |smaller|
fn sub_magnitudes(larger: &[Limb], smaller: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp_magnitude(larger, smaller) != Ordering::Less);
    let mut diff = Vec::with_capacity(larger.len());
    let mut borrow: Limb = 0;
    for (i, &x) in larger.iter().enumerate() {
        // past the end of the smaller operand only the borrow keeps rippling
        let y = smaller.get(i).copied().unwrap_or(0);
        let limb_diff: Limb;
        (limb_diff, borrow) = sbb(x, y, borrow);
        diff.push(limb_diff);
    }
    debug_assert_eq!(borrow, 0, "sub_magnitudes - borrow out of the leading limb");
    diff
}

// Signed addition of two sign-magnitude operands.
// Subtraction is the same operation with the sign of the right operand flipped.
fn combine(a_negative: bool, a: &[Limb], b_negative: bool, b: &[Limb]) -> BigInt {
    if a_negative == b_negative {
        return BigInt::from_parts(a_negative, add_magnitudes(a, b));
    }
    match cmp_magnitude(a, b) {
        Ordering::Less => BigInt::from_parts(b_negative, sub_magnitudes(b, a)),
        _ => BigInt::from_parts(a_negative, sub_magnitudes(a, b)),
    }
}

// acc += row * x
// returns the carry out of the last column.
fn add_mul_row(row: &[Limb], x: Limb, acc: &mut [Limb]) -> Limb {
    debug_assert_eq!(row.len(), acc.len(), "add_mul_row - length mismatch.");
    let mut carry: Limb = 0;
    for (a, &r) in acc.iter_mut().zip(row.iter()) {
        (*a, carry) = mac(*a, r, x, carry);
    }
    carry
}

impl BigInt {
    pub const LIMB_BITS: u32 = Limb::BITS;
    pub const LIMB_BASE: DoubleLimb = LIMB_BASE;

    pub(crate) fn valid(&self) {
        #[cfg(any(debug_assertions, release_test))]
        {
            assert!(!self.words.is_empty(), "BigInt::valid - empty magnitude");
            assert!(self.words.len() == 1 || self.words[self.words.len() - 1] != 0,
                    "BigInt::valid - leading zero limb in {:X?}", self.words);
            assert!(!(self.negative && self.words == [0]), "BigInt::valid - negative zero");
        }
    }

    // The one place where a magnitude becomes a BigInt.
    // Drops leading zero limbs and clears the sign of zero.
    pub fn from_parts(negative: bool, mut words: Vec<Limb>) -> BigInt {
        while words.len() > 1 && words[words.len() - 1] == 0 {
            words.pop();
        }
        if words.is_empty() {
            words.push(0);
        }
        let negative = negative && words != [0];
        let n = BigInt { negative, words };
        n.valid();
        n
    }

    fn from_magnitude(negative: bool, mag: u64) -> BigInt {
        let (lo, hi) = split(mag);
        BigInt::from_parts(negative, vec![lo, hi])
    }

    pub fn from_i64(v: i64) -> BigInt {
        BigInt::from_magnitude(v < 0, v.unsigned_abs())
    }

    pub fn from_u64(v: u64) -> BigInt {
        BigInt::from_magnitude(false, v)
    }

    pub fn from_i128(v: i128) -> BigInt {
        BigInt::from_wide_magnitude(v < 0, v.unsigned_abs())
    }

    pub fn from_u128(v: u128) -> BigInt {
        BigInt::from_wide_magnitude(false, v)
    }

    fn from_wide_magnitude(negative: bool, mag: u128) -> BigInt {
        let words = (0..4).map(|i| (mag >> (i * Limb::BITS)) as Limb).collect();
        BigInt::from_parts(negative, words)
    }

    pub fn zero() -> BigInt {
        BigInt { negative: false, words: vec![0] }
    }

    pub fn one() -> BigInt {
        BigInt { negative: false, words: vec![1] }
    }

    // Little-endian limbs of the magnitude.
    pub fn words(&self) -> &[Limb] {
        &self.words
    }

    pub fn width(&self) -> usize {
        self.words.len()
    }

    pub fn is_zero(&self) -> bool {
        self.words == [0]
    }

    pub fn is_one(&self) -> bool {
        !self.negative && self.words == [1]
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    // -1, 0 or 1
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn negate(&self) -> BigInt {
        BigInt::from_parts(!self.negative, self.words.clone())
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_parts(false, self.words.clone())
    }

    pub fn compare(&self, t: &BigInt) -> Ordering {
        match (self.negative, t.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(&self.words, &t.words),
            // the larger magnitude is the smaller negative value
            (true, true) => cmp_magnitude(&t.words, &self.words),
        }
    }

    // Position sensitive multiply-accumulate over the sign and every limb.
    pub fn hash_value(&self) -> u64 {
        self.words.iter().fold(self.negative as u64, |h, &w| {
            h.wrapping_mul(31).wrapping_add(w as u64)
        })
    }

    pub fn sum(&self, n2: &BigInt) -> BigInt {
        combine(self.negative, &self.words, n2.negative, &n2.words)
    }

    pub fn subtract(&self, n2: &BigInt) -> BigInt {
        combine(self.negative, &self.words, !n2.negative, &n2.words)
    }

    // elementary school-book multiplication
    pub fn multiply(&self, n2: &BigInt) -> BigInt {
        let (long, short) = if self.words.len() >= n2.words.len() {
            (&self.words, &n2.words)
        } else {
            (&n2.words, &self.words)
        };
        let n = long.len();
        // allocate space for the product accumulator.
        let mut acc: Vec<Limb> = vec![0; n + short.len()];
        for (i, &x) in short.iter().enumerate() {
            if x == 0 {
                continue;
            }
            let carry = add_mul_row(long, x, &mut acc[i..i + n]);
            // the carry must be added to the column 'left' of i + n - 1
            acc[i + n] = carry;
        }
        BigInt::from_parts(self.negative != n2.negative, acc)
    }

    // square-and-multiply; x.pow(0) == 1 for every x, zero included.
    pub fn pow(&self, exp: u32) -> BigInt {
        let mut result = BigInt::one();
        let mut square = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.multiply(&square);
            }
            e >>= 1;
            if e > 0 {
                square = square.multiply(&square);
            }
        }
        result
    }

    pub fn to_i64(&self) -> Option<i64> {
        if self.words.len() > 2 {
            return None;
        }
        let mag = join(self.words.get(1).copied().unwrap_or(0), self.words[0]);
        if self.negative {
            // i64::MIN has no positive counterpart; its magnitude is exactly 2^63
            if mag <= 1 << 63 {
                Some((mag as i64).wrapping_neg())
            } else {
                None
            }
        } else {
            i64::try_from(mag).ok()
        }
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.negative || self.words.len() > 2 {
            return None;
        }
        Some(join(self.words.get(1).copied().unwrap_or(0), self.words[0]))
    }

    // Precision is lost past 53 significant bits; infinite past f64::MAX.
    pub fn to_f64(&self) -> f64 {
        let mag = self.words.iter().rev().fold(0.0_f64, |acc, &w| {
            acc * LIMB_BASE as f64 + w as f64
        });
        if self.negative { -mag } else { mag }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}
