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

use crate::Limb;

const NO_DIGIT: u8 = 0xFF;
const GLYPHS: &[u8; 16] = b"0123456789abcdef";

/// A numeral system used to parse and format `BigInt` values.
///
/// Only four descriptors exist: [`BINARY`], [`OCTAL`], [`DECIMAL`] and [`HEXADECIMAL`].
/// They are built at compile time and never change.
#[derive(Debug, PartialEq, Eq)]
pub struct Base {
    radix: u32,
    // glyph for each digit value, indexed by the value
    glyphs: &'static [u8],
    // digit value of each ASCII byte; NO_DIGIT when the byte is not a glyph of this base
    values: [u8; 256],
    // largest power of the radix that fits in a limb, and its exponent
    chunk_power: Limb,
    chunk_digits: usize,
}

pub const BINARY: Base = Base::new(2);
pub const OCTAL: Base = Base::new(8);
pub const DECIMAL: Base = Base::new(10);
pub const HEXADECIMAL: Base = Base::new(16);

static BASES: [&Base; 4] = [&BINARY, &OCTAL, &DECIMAL, &HEXADECIMAL];

impl Base {
    const fn new(radix: u32) -> Base {
        let glyphs: &'static [u8] = GLYPHS.split_at(radix as usize).0;

        let mut values = [NO_DIGIT; 256];
        let mut d = 0;
        while d < glyphs.len() {
            let g = glyphs[d];
            values[g as usize] = d as u8;
            // hex letters are accepted in either case
            if g.is_ascii_lowercase() {
                values[g.to_ascii_uppercase() as usize] = d as u8;
            }
            d += 1;
        }

        let mut chunk_power: u64 = 1;
        let mut chunk_digits = 0;
        while chunk_power * radix as u64 <= Limb::MAX as u64 {
            chunk_power *= radix as u64;
            chunk_digits += 1;
        }

        Base {
            radix,
            glyphs,
            values,
            chunk_power: chunk_power as Limb,
            chunk_digits,
        }
    }

    // Look up the descriptor of a supported radix.
    // panics on anything but 2, 8, 10 and 16; callers validate the radix first.
    pub fn of(radix: u32) -> &'static Base {
        match BASES.iter().find(|b| b.radix == radix) {
            Some(&base) => base,
            None => panic!("Base::of - unsupported radix {radix}"),
        }
    }

    pub fn is_supported(radix: u32) -> bool {
        BASES.iter().any(|b| b.radix == radix)
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn digit_value(&self, c: u8) -> Option<u8> {
        match self.values[c as usize] {
            NO_DIGIT => None,
            v => Some(v),
        }
    }

    pub fn glyph(&self, d: u8) -> char {
        assert!((d as u32) < self.radix, "Base::glyph - digit {d} out of range for radix {}", self.radix);
        self.glyphs[d as usize] as char
    }

    pub fn chunk_power(&self) -> Limb {
        self.chunk_power
    }

    pub fn chunk_digits(&self) -> usize {
        self.chunk_digits
    }
}
