// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Address parsing/formatting and base conversion between textual,
//! binary-string and decimal representations.

use crate::{CalcError, IPV4_BITS, IPV6_BITS};
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

lazy_static! {
    /// gate for [Addr::from_binary] once group separators are stripped
    static ref BINARY_RE: Regex = Regex::new("^[01]*$").unwrap();
}

/// IP address family
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IpFam {
    V4,
    V6,
}

impl IpFam {
    /// Address width in bits.
    pub const fn bits(&self) -> u8 {
        match self {
            IpFam::V4 => IPV4_BITS,
            IpFam::V6 => IPV6_BITS,
        }
    }

    /// Numeric IP version (4 or 6).
    pub const fn version(&self) -> u8 {
        match self {
            IpFam::V4 => 4,
            IpFam::V6 => 6,
        }
    }

    /// Largest address value representable in this family.
    pub const fn max_value(&self) -> u128 {
        match self {
            IpFam::V4 => u32::MAX as u128,
            IpFam::V6 => u128::MAX,
        }
    }
}

/**
A single IP address: family tag plus a fixed-width unsigned value.

Invariant: `value` fits within the bit width implied by `fam`; every
public constructor enforces this. Immutable once constructed.
*/
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Addr {
    fam: IpFam,
    value: u128,
}

impl Addr {
    /// Construct from an integer value, checking the family width.
    pub fn new(fam: IpFam, value: u128) -> Result<Self, CalcError> {
        if value > fam.max_value() {
            return Err(CalcError::ValueOutOfRange {
                value,
                max: fam.max_value(),
            });
        }
        Ok(Addr { fam, value })
    }

    /// Internal constructor for values already known to fit the width.
    pub(crate) const fn from_parts(fam: IpFam, value: u128) -> Self {
        Addr { fam, value }
    }

    pub const fn fam(&self) -> IpFam {
        self.fam
    }

    pub const fn value(&self) -> u128 {
        self.value
    }

    pub const fn bits(&self) -> u8 {
        self.fam.bits()
    }

    pub fn from_ip(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(a) => Addr {
                fam: IpFam::V4,
                value: u32::from(a) as u128,
            },
            IpAddr::V6(a) => Addr {
                fam: IpFam::V6,
                value: u128::from(a),
            },
        }
    }

    pub fn to_ip(&self) -> IpAddr {
        match self.fam {
            IpFam::V4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            IpFam::V6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }

    /**
    Full-width binary digits, grouped per family convention: four 8-bit
    groups joined by `.` for v4, eight 16-bit groups joined by `:` for v6.
    */
    pub fn to_binary(&self) -> String {
        match self.fam {
            IpFam::V4 => {
                let digits: String = format!("{:032b}", self.value as u32);
                (0..4)
                    .map(|i| &digits[i * 8..(i + 1) * 8])
                    .collect::<Vec<&str>>()
                    .join(".")
            }
            IpFam::V6 => {
                let digits: String = format!("{:0128b}", self.value);
                (0..8)
                    .map(|i| &digits[i * 16..(i + 1) * 16])
                    .collect::<Vec<&str>>()
                    .join(":")
            }
        }
    }

    /**
    Parse a full-width binary string into an address of the given family.

    Group separators (`.` and `:`) are stripped first; the remainder must
    be exactly 32 (v4) or 128 (v6) `0`/`1` digits.
    */
    pub fn from_binary(text: &str, fam: IpFam) -> Result<Self, CalcError> {
        let clean: String = text.trim().replace(['.', ':'], "");

        if !BINARY_RE.is_match(&clean) {
            let bad: char = clean
                .chars()
                .find(|&c| c != '0' && c != '1')
                .unwrap_or('?');
            return Err(CalcError::InvalidBinaryDigit(bad));
        }

        let expected: usize = fam.bits() as usize;
        if clean.len() != expected {
            return Err(CalcError::InvalidBinaryLength {
                expected,
                got: clean.len(),
            });
        }

        let value: u128 = u128::from_str_radix(&clean, 2)
            .map_err(|_| CalcError::InvalidBinaryDigit('?'))?;
        Addr::new(fam, value)
    }

    /// The address as a plain unsigned integer.
    pub const fn to_decimal(&self) -> u128 {
        self.value
    }

    /// Construct from a plain unsigned integer, checking the family width.
    pub fn from_decimal(value: u128, fam: IpFam) -> Result<Self, CalcError> {
        Addr::new(fam, value)
    }
}

impl fmt::Display for Addr {
    /// Canonical textual form: dotted quad for v4, lowercase compressed
    /// colon-hex for v6 (longest zero run collapsed).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ip())
    }
}

impl FromStr for Addr {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ip: IpAddr = s
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| CalcError::InvalidAddress(s.to_string()))?;
        Ok(Addr::from_ip(ip))
    }
}

impl From<IpAddr> for Addr {
    fn from(ip: IpAddr) -> Self {
        Addr::from_ip(ip)
    }
}

/* ---------------------------------- */

/**
Returns a u128 with `prefix` high bits set within a `bits`-wide field,
remaining low bits zero.

bits: 32 or 128, prefix: `0..=bits`
*/
#[inline]
pub(crate) fn mask_bits(bits: u8, prefix: u8) -> u128 {
    let all: u128 = if bits == IPV6_BITS {
        !0u128
    } else {
        (1u128 << bits) - 1
    };
    if prefix == 0 {
        return 0;
    }
    if prefix >= bits {
        return all;
    }
    let low: u8 = bits - prefix;
    all & !((1u128 << low) - 1)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_V4: &str = "192.168.1.100";
    const TEST_V4_BIN: &str = "11000000.10101000.00000001.01100100";
    const TEST_V4_DEC: u128 = 3232235876;
    const TEST_V6: &str = "2001:db8::1";
    const TEST_V6_FULL: &str = "2001:0db8:0000:0000:0000:0000:0000:0001";

    #[test]
    fn test_parse_and_format_v4() {
        let addr: Addr = TEST_V4.parse().unwrap();
        assert_eq!(addr.fam(), IpFam::V4);
        assert_eq!(addr.to_string(), TEST_V4);
    }

    #[test]
    fn test_parse_and_format_v6() {
        // non-canonical input formats to the compressed lowercase form
        let addr: Addr = TEST_V6_FULL.parse().unwrap();
        assert_eq!(addr.fam(), IpFam::V6);
        assert_eq!(addr.to_string(), TEST_V6);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("256.0.0.1".parse::<Addr>().is_err());
        assert!("1.2.3".parse::<Addr>().is_err());
        assert!("2001:db8:::1".parse::<Addr>().is_err());
        assert!("".parse::<Addr>().is_err());
    }

    #[test]
    fn test_to_binary_v4() {
        let addr: Addr = TEST_V4.parse().unwrap();
        assert_eq!(addr.to_binary(), TEST_V4_BIN);
    }

    #[test]
    fn test_binary_roundtrip_v4() {
        let addr: Addr = TEST_V4.parse().unwrap();
        let back: Addr = Addr::from_binary(&addr.to_binary(), IpFam::V4).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_binary_roundtrip_v6() {
        let addr: Addr = TEST_V6.parse().unwrap();
        let bin: String = addr.to_binary();
        assert_eq!(bin.len(), 128 + 7); // 8 groups + 7 separators
        let back: Addr = Addr::from_binary(&bin, IpFam::V6).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_from_binary_bad_length() {
        let err = Addr::from_binary("1010", IpFam::V4).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidBinaryLength {
                expected: 32,
                got: 4
            }
        );
    }

    #[test]
    fn test_from_binary_bad_digit() {
        let bad: String = "2".to_string() + &"0".repeat(31);
        let err = Addr::from_binary(&bad, IpFam::V4).unwrap_err();
        assert_eq!(err, CalcError::InvalidBinaryDigit('2'));
    }

    #[test]
    fn test_decimal_conversions() {
        let addr: Addr = TEST_V4.parse().unwrap();
        assert_eq!(addr.to_decimal(), TEST_V4_DEC);
        let back: Addr = Addr::from_decimal(TEST_V4_DEC, IpFam::V4).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_decimal_out_of_range() {
        let result = Addr::from_decimal(u32::MAX as u128 + 1, IpFam::V4);
        assert!(matches!(result, Err(CalcError::ValueOutOfRange { .. })));
        // v6 accepts the full u128 width
        assert!(Addr::from_decimal(u128::MAX, IpFam::V6).is_ok());
    }

    #[test]
    fn test_mask_bits() {
        assert_eq!(mask_bits(32, 0), 0);
        assert_eq!(mask_bits(32, 8), 0xFF000000);
        assert_eq!(mask_bits(32, 24), 0xFFFFFF00);
        assert_eq!(mask_bits(32, 32), 0xFFFFFFFF);
        assert_eq!(mask_bits(128, 128), u128::MAX);
        assert_eq!(mask_bits(128, 64), !0u128 << 64);
    }
}
