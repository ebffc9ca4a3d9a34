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

use crate::{DoubleLimb, Limb};

pub const LIMB_BASE: DoubleLimb = 1 << Limb::BITS;
pub const LIMB_MASK: DoubleLimb = LIMB_BASE - 1;

// adc calculates: sum = x + y + carry.
// The carry input must be 0 or 1.
// The carry_out is guaranteed to be 0 or 1.
pub fn adc(x: Limb, y: Limb, carry: Limb) -> (/* sum */ Limb, /* carry_out */ Limb) {
    debug_assert!(carry <= 1);
    let acc: DoubleLimb = x as DoubleLimb + y as DoubleLimb + carry as DoubleLimb;
    (acc as Limb, (acc >> Limb::BITS) as Limb)
}

// sbb calculates: diff = x - y - borrow.
// The difference is taken in a 64-bit window offset by the limb base, so the
// subtraction wraps around the base instead of underflowing.
// The borrow input must be 0 or 1. The borrow_out is 0 or 1.
pub fn sbb(x: Limb, y: Limb, borrow: Limb) -> (/* diff */ Limb, /* borrow_out */ Limb) {
    debug_assert!(borrow <= 1);
    let acc: DoubleLimb = LIMB_BASE + x as DoubleLimb - y as DoubleLimb - borrow as DoubleLimb;
    (acc as Limb, (acc < LIMB_BASE) as Limb)
}

// mac calculates: acc + x * y + carry, split into (low limb, high limb).
// The result always fits: (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1.
pub fn mac(acc: Limb, x: Limb, y: Limb, carry: Limb) -> (/* lo */ Limb, /* hi */ Limb) {
    let t: DoubleLimb = x as DoubleLimb * y as DoubleLimb + acc as DoubleLimb + carry as DoubleLimb;
    (t as Limb, (t >> Limb::BITS) as Limb)
}

// Divide the two-limb value (hi, lo) by a single limb.
// pre-condition: hi < divisor, so that the quotient fits in one limb.
pub fn div_wide(hi: Limb, lo: Limb, divisor: Limb) -> (/* quotient */ Limb, /* remainder */ Limb) {
    assert!(divisor > 0, "div_wide - divide by zero error");
    debug_assert!(hi < divisor, "div_wide - quotient overflow error");
    let n: DoubleLimb = ((hi as DoubleLimb) << Limb::BITS) | lo as DoubleLimb;
    ((n / divisor as DoubleLimb) as Limb, (n % divisor as DoubleLimb) as Limb)
}

// Join two limbs into one 64-bit value.
pub fn join(hi: Limb, lo: Limb) -> DoubleLimb {
    ((hi as DoubleLimb) << Limb::BITS) | lo as DoubleLimb
}

// Split a 64-bit value into (lo, hi) limbs.
pub fn split(v: DoubleLimb) -> (Limb, Limb) {
    (v as Limb, (v >> Limb::BITS) as Limb)
}
