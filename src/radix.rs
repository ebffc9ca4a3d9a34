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

use std::fmt;
use std::str::FromStr;

use crate::base::{Base, BINARY, DECIMAL, HEXADECIMAL, OCTAL};
use crate::bits::LIMB_MASK;
use crate::div::divide_by_limb;
use crate::error::ParseBigIntError;
use crate::{BigInt, DoubleLimb, Limb};

// Append the digits of one chunk. Padded chunks are widened with leading zeros to the
// number of radix digits a limb holds.
fn push_chunk(out: &mut String, chunk: Limb, base: &Base, padded: bool) {
    let radix = base.radix();
    let mut digits = [0u8; Limb::BITS as usize];
    let mut len = 0;
    let mut c = chunk;
    while c > 0 {
        digits[len] = (c % radix) as u8;
        c /= radix;
        len += 1;
    }
    if padded {
        len = base.chunk_digits();
    }
    for &d in digits[..len].iter().rev() {
        out.push(base.glyph(d));
    }
}

impl BigInt {
    // Builds a value from digits in the given base, most significant digit first.
    // panics when a digit is not below the radix.
    //
    // Each pass divides the digit sequence by 2^32: the pass remainder is the next limb and
    // the pass quotient, still in base-radix digits, feeds the following pass.
    pub fn from_digits(negative: bool, digits: &[u8], base: &Base) -> BigInt {
        let radix = base.radix() as DoubleLimb;
        if let Some(&bad) = digits.iter().find(|&&d| d as DoubleLimb >= radix) {
            panic!("BigInt::from_digits - digit {bad} out of range for radix {radix}");
        }

        let mut pending: Vec<u8> = digits.iter().copied().skip_while(|&d| d == 0).collect();
        let mut words: Vec<Limb> = Vec::new();
        while !pending.is_empty() {
            let mut acc: DoubleLimb = 0;
            let mut quotient: Vec<u8> = Vec::with_capacity(pending.len());
            for &d in pending.iter() {
                // acc < 2^32 on entry, so acc * 16 + 15 cannot overflow
                acc = acc * radix + d as DoubleLimb;
                let q = acc >> Limb::BITS;
                acc &= LIMB_MASK;
                if !quotient.is_empty() || q != 0 {
                    quotient.push(q as u8);
                }
            }
            words.push(acc as Limb);
            pending = quotient;
        }
        BigInt::from_parts(negative, words)
    }

    // Parses an optionally signed numeral in one of the supported radices.
    // Surrounding whitespace is ignored. Returns None for anything else.
    // panics on an unsupported radix.
    pub fn parse(text: &str, radix: u32) -> Option<BigInt> {
        BigInt::parse_in(text, Base::of(radix)).ok()
    }

    pub fn parse_in(text: &str, base: &Base) -> Result<BigInt, ParseBigIntError> {
        let s = text.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if body.is_empty() {
            log::debug!("BigInt::parse - no digits in {text:?}");
            return Err(ParseBigIntError::Empty);
        }

        let digits: Vec<u8> = body.bytes().map_while(|c| base.digit_value(c)).collect();
        if let Some(bad) = body[digits.len()..].chars().next() {
            log::debug!("BigInt::parse - reject '{bad}' in {text:?} for radix {}", base.radix());
            return Err(ParseBigIntError::InvalidDigit(bad));
        }
        Ok(BigInt::from_digits(negative, &digits, base))
    }

    pub fn to_str_radix(&self, radix: u32) -> String {
        self.format(Base::of(radix))
    }

    pub fn format(&self, base: &Base) -> String {
        let digits = self.magnitude_str(base);
        if self.negative {
            "-".to_string() + digits.as_str()
        } else {
            digits
        }
    }

    // Digits of |self|. The magnitude is divided by the largest radix power that fits in
    // a limb, so every division yields one fixed-width chunk of digits.
    fn magnitude_str(&self, base: &Base) -> String {
        if self.is_zero() {
            return base.glyph(0).to_string();
        }
        let mut chunks: Vec<Limb> = Vec::new();
        let mut mag: Vec<Limb> = self.words.clone();
        while !mag.is_empty() {
            let (mut q, r) = divide_by_limb(&mag, base.chunk_power());
            chunks.push(r);
            while q.last() == Some(&0) {
                q.pop();
            }
            mag = q;
        }

        let mut s = String::with_capacity(chunks.len() * base.chunk_digits());
        // the leading chunk is not padded; the others are.
        for (i, &chunk) in chunks.iter().rev().enumerate() {
            push_chunk(&mut s, chunk, base, i > 0);
        }
        s
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse_in(s, &DECIMAL)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_str(&DECIMAL))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0b", &self.magnitude_str(&BINARY))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0o", &self.magnitude_str(&OCTAL))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.magnitude_str(&HEXADECIMAL))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude_str(&HEXADECIMAL).to_ascii_uppercase();
        f.pad_integral(!self.negative, "0x", &digits)
    }
}

#[cfg(test)]
mod radix_tests {
    use crate::base::{Base, DECIMAL, HEXADECIMAL, OCTAL};
    use crate::error::ParseBigIntError;
    use crate::{init_logger, BigInt};

    fn init() {
        init_logger(true)
    }

    #[test]
    fn decimal_round_trip() {
        init();
        let s = "12345678901234567890";
        let n = BigInt::parse(s, 10).unwrap();
        assert_eq!(n.words(), [0xeb1f0ad2, 0xab54a98c]);
        assert_eq!(n.to_str_radix(10), s);
        assert_eq!(n.to_string(), s);

        // a zero chunk in the middle must keep its padding
        let s = "1000000000000000000000000000001";
        assert_eq!(BigInt::parse(s, 10).unwrap().to_string(), s);
    }

    #[test]
    fn from_digits() {
        init();
        assert_eq!(BigInt::from_digits(false, &[], &DECIMAL), BigInt::zero());
        assert_eq!(BigInt::from_digits(true, &[0, 0, 0], &DECIMAL), BigInt::zero());
        assert_eq!(BigInt::from_digits(true, &[4, 2], &DECIMAL), BigInt::from_i64(-42));
        // 2^32 in hex
        assert_eq!(BigInt::from_digits(false, &[1, 0, 0, 0, 0, 0, 0, 0, 0], &HEXADECIMAL).words(), [0, 1]);
        assert_eq!(BigInt::from_digits(false, &[7, 7, 7], &OCTAL), BigInt::from_i64(0o777));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn from_digits_bad_digit() {
        BigInt::from_digits(false, &[1, 10], &DECIMAL);
    }

    #[test]
    fn parse() {
        init();
        assert_eq!(BigInt::parse("  -00123  ", 10), Some(BigInt::from_i64(-123)));
        assert_eq!(BigInt::parse("+42", 10), Some(BigInt::from_i64(42)));
        assert_eq!(BigInt::parse("-0", 10), Some(BigInt::zero()));
        assert_eq!(BigInt::parse("0000", 10), Some(BigInt::zero()));
        assert_eq!(BigInt::parse("DeadBeef", 16), Some(BigInt::from_u64(0xdeadbeef)));
        assert_eq!(BigInt::parse("-101", 2), Some(BigInt::from_i64(-5)));
        assert_eq!(BigInt::parse("777", 8), Some(BigInt::from_i64(511)));

        assert_eq!(BigInt::parse("12x", 10), None);
        assert_eq!(BigInt::parse("", 10), None);
        assert_eq!(BigInt::parse("   ", 10), None);
        assert_eq!(BigInt::parse("-", 10), None);
        assert_eq!(BigInt::parse("+-1", 10), None);
        assert_eq!(BigInt::parse("1 2", 10), None);
        assert_eq!(BigInt::parse("12", 2), None);
        assert_eq!(BigInt::parse("ff", 10), None);

        assert_eq!(BigInt::parse_in("12x", &DECIMAL), Err(ParseBigIntError::InvalidDigit('x')));
        assert_eq!(BigInt::parse_in("-", &DECIMAL), Err(ParseBigIntError::Empty));
        assert_eq!("987".parse::<BigInt>(), Ok(BigInt::from_i64(987)));
        assert!("9a".parse::<BigInt>().is_err());
    }

    #[test]
    #[should_panic(expected = "unsupported radix")]
    fn parse_bad_radix() {
        BigInt::parse("1", 36);
    }

    #[test]
    fn format() {
        init();
        assert_eq!(BigInt::zero().to_str_radix(2), "0");
        assert_eq!(BigInt::zero().to_str_radix(16), "0");
        assert_eq!(BigInt::from_i64(-255).to_str_radix(16), "-ff");
        assert_eq!(BigInt::from_i64(-255).to_str_radix(2), "-11111111");
        assert_eq!(BigInt::from_i64(8).to_str_radix(8), "10");
        assert_eq!(BigInt::from_u64(u64::MAX).to_str_radix(10), "18446744073709551615");
        assert_eq!(BigInt::from_u64(u64::MAX).to_str_radix(16), "ffffffffffffffff");
        assert_eq!(BigInt::from_u64(u64::MAX).to_str_radix(8), "1777777777777777777777");
        assert_eq!(BigInt::from_u64(1 << 63).to_str_radix(2), format!("1{}", "0".repeat(63)));
        assert_eq!(BigInt::from_i64(i64::MIN).format(Base::of(10)), "-9223372036854775808");
    }

    #[test]
    fn fmt_traits() {
        init();
        let n = BigInt::from_i64(-255);
        assert_eq!(format!("{n}"), "-255");
        assert_eq!(format!("{n:x}"), "-ff");
        assert_eq!(format!("{n:#X}"), "-0xFF");
        assert_eq!(format!("{n:#b}"), "-0b11111111");
        assert_eq!(format!("{n:o}"), "-377");
        assert_eq!(format!("{:>8}", BigInt::from_i64(42)), "      42");
        assert_eq!(format!("{:+}", BigInt::from_i64(42)), "+42");
        assert_eq!(format!("{:06}", BigInt::from_i64(-42)), "-00042");
    }

    #[test]
    fn all_bases_round_trip() {
        init();
        let n = BigInt::from_parts(true, vec![0x00000001, 0x80000000, 0, 0x7fffffff, 0xdeadbeef]);
        for radix in [2, 8, 10, 16] {
            let s = n.to_str_radix(radix);
            assert_eq!(BigInt::parse(&s, radix), Some(n.clone()), "radix {radix}: {s}");
        }
    }
}
