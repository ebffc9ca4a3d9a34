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

//! Arbitrary-precision signed integers.
//!
//! `BigInt` keeps a sign and a magnitude made of 32-bit limbs, least significant first.
//! Values are immutable: every operation hands back a new `BigInt`.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a = BigInt::parse("12345678901234567890", 10).unwrap();
//! let b = BigInt::from(-23);
//! let (q, r) = a.div_rem(&b);
//! assert_eq!(&q * &b + &r, a);
//! ```

use std::io::Write;

use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;

pub mod base;
pub mod bits;
pub mod bitwise;
pub mod div;
pub mod error;
pub mod int;
pub mod ops;
pub mod radix;
pub mod sqrt;

pub use base::Base;
pub use error::{ParseBigIntError, TryFromBigIntError};
pub use ops::SignedInteger;

// Installs the env_logger backend once per process; later calls are no-ops.
// RUST_LOG overrides the default 'info' filter.
pub fn init_logger(is_test: bool) {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                     "{} [{}] - {}",
                     Local::now().format("%Y-%m-%dT%H:%M:%S"),
                     record.level(),
                     record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .is_test(is_test)
        .try_init();
}

pub type Limb = u32;
pub type DoubleLimb = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    // true for values below zero. Zero itself is never negative.
    // This invariant is maintained by all operations.
    negative: bool,
    // The magnitude of the integer.
    // A sequence of 32-bit limbs stored in little-endian order.
    // Never empty, and the leading limb is non-zero unless the value is zero, in which
    // case the magnitude is exactly [0].
    words: Vec<Limb>,
}
