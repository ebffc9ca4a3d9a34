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

//! Operator and conversion glue so `BigInt` reads like a native integer.
//! Everything here forwards to the inherent operations.

use std::iter::{Product, Sum};
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Sub};

use crate::error::TryFromBigIntError;
use crate::BigInt;

// Implements a binary operator for every owned/borrowed operand combination.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $op:ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$op(self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$op(self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$op(&self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$op(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, sum);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);
// truncating, like the native integers; both panic on a zero divisor
forward_binop!(Div, div, quotient);
forward_binop!(Rem, rem, remainder);
forward_binop!(BitAnd, bitand, and);
forward_binop!(BitOr, bitor, or);
forward_binop!(BitXor, bitxor, xor);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.invert()
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.invert()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| &acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| &acc * &x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| &acc * x)
    }
}

impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::zero()
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for BigInt {
            fn from(v: $t) -> BigInt {
                BigInt::from_i64(v as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for BigInt {
            fn from(v: $t) -> BigInt {
                BigInt::from_u64(v as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<i128> for BigInt {
    fn from(v: i128) -> BigInt {
        BigInt::from_i128(v)
    }
}

impl From<u128> for BigInt {
    fn from(v: u128) -> BigInt {
        BigInt::from_u128(v)
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = TryFromBigIntError;

    fn try_from(n: &BigInt) -> Result<i64, Self::Error> {
        n.to_i64().ok_or(TryFromBigIntError)
    }
}

impl TryFrom<BigInt> for i64 {
    type Error = TryFromBigIntError;

    fn try_from(n: BigInt) -> Result<i64, Self::Error> {
        i64::try_from(&n)
    }
}

impl TryFrom<&BigInt> for u64 {
    type Error = TryFromBigIntError;

    fn try_from(n: &BigInt) -> Result<u64, Self::Error> {
        n.to_u64().ok_or(TryFromBigIntError)
    }
}

impl TryFrom<BigInt> for u64 {
    type Error = TryFromBigIntError;

    fn try_from(n: BigInt) -> Result<u64, Self::Error> {
        u64::try_from(&n)
    }
}

impl From<&BigInt> for f64 {
    fn from(n: &BigInt) -> f64 {
        n.to_f64()
    }
}

/// The integer operations a generic numeric type (a rational, say) needs from its
/// component type. Implemented for `BigInt` and for the native `i64`.
pub trait SignedInteger: Clone + Ord {
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn is_one(&self) -> bool;
    fn is_negative(&self) -> bool;
    fn sum(&self, other: &Self) -> Self;
    fn subtract(&self, other: &Self) -> Self;
    fn multiply(&self, other: &Self) -> Self;
    // truncating; the remainder has the sign of the dividend
    fn div_rem(&self, divisor: &Self) -> (Self, Self);
    fn negate(&self) -> Self;
}

impl SignedInteger for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn one() -> Self {
        BigInt::one()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }

    fn is_one(&self) -> bool {
        BigInt::is_one(self)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }

    fn sum(&self, other: &Self) -> Self {
        BigInt::sum(self, other)
    }

    fn subtract(&self, other: &Self) -> Self {
        BigInt::subtract(self, other)
    }

    fn multiply(&self, other: &Self) -> Self {
        BigInt::multiply(self, other)
    }

    fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        BigInt::div_rem(self, divisor)
    }

    fn negate(&self) -> Self {
        BigInt::negate(self)
    }
}

impl SignedInteger for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_one(&self) -> bool {
        *self == 1
    }

    fn is_negative(&self) -> bool {
        *self < 0
    }

    fn sum(&self, other: &Self) -> Self {
        self + other
    }

    fn subtract(&self, other: &Self) -> Self {
        self - other
    }

    fn multiply(&self, other: &Self) -> Self {
        self * other
    }

    fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        (self / divisor, self % divisor)
    }

    fn negate(&self) -> Self {
        -self
    }
}
