// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CIDR block representation and subnet description.

use crate::{
    addr::{mask_bits, Addr, IpFam},
    strings::*,
    CalcError,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, net::IpAddr, str::FromStr};
use tracing::debug;

/// How CIDR parsing treats host bits set below the prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseMode {
    /// zero out host bits (the usual calculator behavior, and the default)
    Lenient,
    /// reject input whose host bits are not already zero
    Strict,
}

/**
A CIDR block: network base address plus prefix length.

Invariant: the low `bits - prefix` bits of `base` are zero and
`prefix <= bits`. Operations never mutate; they return new blocks.
*/
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cidr {
    base: Addr,
    prefix: u8,
}

impl Cidr {
    /// Construct from an address and prefix length.
    pub fn new(addr: Addr, prefix: u8, mode: ParseMode) -> Result<Self, CalcError> {
        let bits: u8 = addr.bits();
        if prefix > bits {
            return Err(CalcError::InvalidPrefix { prefix, max: bits });
        }
        let masked: u128 = addr.value() & mask_bits(bits, prefix);
        if masked != addr.value() {
            match mode {
                ParseMode::Strict => {
                    return Err(CalcError::InvalidNetwork(format!(
                        "{addr}/{prefix}: {ERR_HOST_BITS}"
                    )));
                }
                ParseMode::Lenient => {
                    debug!("zeroing host bits of {addr}/{prefix}");
                }
            }
        }
        Ok(Cidr {
            base: Addr::from_parts(addr.fam(), masked),
            prefix,
        })
    }

    /// Parse "address/prefix" text with the given host-bit policy.
    pub fn parse_with(s: &str, mode: ParseMode) -> Result<Self, CalcError> {
        let s: &str = s.trim();
        let (addr_str, prefix_str) = s
            .split_once('/')
            .ok_or_else(|| CalcError::InvalidNetwork(s.to_string()))?;

        let addr: Addr = addr_str
            .trim()
            .parse()
            .map_err(|_| CalcError::InvalidNetwork(s.to_string()))?;
        let prefix: u8 = prefix_str
            .trim()
            .parse()
            .map_err(|_| CalcError::InvalidNetwork(s.to_string()))?;

        Cidr::new(addr, prefix, mode)
    }

    /// Internal constructor for callers that already hold an aligned base.
    pub(crate) fn from_parts(fam: IpFam, value: u128, prefix: u8) -> Self {
        debug_assert!(prefix <= fam.bits());
        let masked: u128 = value & mask_bits(fam.bits(), prefix);
        debug_assert_eq!(masked, value, "base has host bits set");
        Cidr {
            base: Addr::from_parts(fam, masked),
            prefix,
        }
    }

    pub const fn base(&self) -> Addr {
        self.base
    }

    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    pub const fn fam(&self) -> IpFam {
        self.base.fam()
    }

    pub const fn bits(&self) -> u8 {
        self.base.bits()
    }

    /// The subnet mask as an address of the same family.
    pub fn netmask(&self) -> Addr {
        Addr::from_parts(self.fam(), mask_bits(self.bits(), self.prefix))
    }

    /// Bitwise complement of the netmask (IPv4 only).
    pub fn wildcard_mask(&self) -> Option<Addr> {
        match self.fam() {
            IpFam::V4 => {
                let full: u128 = mask_bits(self.bits(), self.bits());
                Some(Addr::from_parts(
                    IpFam::V4,
                    full & !mask_bits(self.bits(), self.prefix),
                ))
            }
            IpFam::V6 => None,
        }
    }

    /// Highest address value in the block (the broadcast address for v4).
    pub(crate) fn last_value(&self) -> u128 {
        let full: u128 = mask_bits(self.bits(), self.bits());
        self.base.value() | (full & !mask_bits(self.bits(), self.prefix))
    }

    /// Broadcast address. IPv6 has no broadcast concept, hence `None`.
    pub fn broadcast(&self) -> Option<Addr> {
        match self.fam() {
            IpFam::V4 => Some(Addr::from_parts(IpFam::V4, self.last_value())),
            IpFam::V6 => None,
        }
    }

    /// Number of addresses in the block. Saturates at [u128::MAX] for `::/0`.
    pub fn total_addresses(&self) -> u128 {
        let host_bits: u8 = self.bits() - self.prefix;
        if host_bits == 128 {
            return u128::MAX;
        }
        1u128 << host_bits
    }

    /// Usable host count: v4 reserves network + broadcast, v6 reserves nothing.
    pub fn usable_addresses(&self) -> u128 {
        let total: u128 = self.total_addresses();
        match self.fam() {
            IpFam::V4 if total > 2 => total - 2,
            IpFam::V4 => 0,
            IpFam::V6 => total,
        }
    }

    /// True iff the address shares this block's top `prefix` bits.
    pub fn contains(&self, addr: Addr) -> bool {
        if addr.fam() != self.fam() {
            return false;
        }
        addr.value() & mask_bits(self.bits(), self.prefix) == self.base.value()
    }

    /// Classful-addressing label for the first octet (v4 only).
    pub fn address_class(&self) -> &'static str {
        if self.fam() != IpFam::V4 {
            return NA;
        }
        match (self.base.value() >> 24) as u8 {
            1..=126 => "A",
            128..=191 => "B",
            192..=223 => "C",
            224..=239 => "D (Multicast)",
            240..=255 => "E (Experimental)",
            _ => "Invalid",
        }
    }

    pub fn is_private(&self) -> bool {
        match self.base.to_ip() {
            IpAddr::V4(a) => a.is_private() || a.is_loopback() || a.is_link_local(),
            // unique local fc00::/7 or loopback ::1
            IpAddr::V6(_) => {
                let v: u128 = self.base.value();
                (v >> 121) == 0x7E || v == 1
            }
        }
    }

    pub fn is_multicast(&self) -> bool {
        self.base.to_ip().is_multicast()
    }

    pub fn is_reserved(&self) -> bool {
        match self.fam() {
            // class E, 240.0.0.0/4
            IpFam::V4 => (self.base.value() >> 28) == 0xF,
            IpFam::V6 => false,
        }
    }

    /// Full subnet description.
    pub fn describe(&self) -> SubnetInfo {
        let total: u128 = self.total_addresses();
        let (first_usable, last_usable) = self.usable_bounds(total);

        SubnetInfo {
            network_address: self.base.to_string(),
            broadcast_address: match self.broadcast() {
                Some(b) => b.to_string(),
                None => NA_V6.to_string(),
            },
            netmask: self.netmask().to_string(),
            prefix_length: self.prefix,
            total_addresses: total,
            usable_addresses: self.usable_addresses(),
            first_usable,
            last_usable,
            network_class: self.address_class().to_string(),
            is_private: self.is_private(),
            is_multicast: self.is_multicast(),
            is_reserved: self.is_reserved(),
            version: self.fam().version(),
        }
    }

    /// First/last usable addresses as presentation strings.
    fn usable_bounds(&self, total: u128) -> (String, String) {
        match self.fam() {
            IpFam::V4 => {
                if total > 2 {
                    let first = Addr::from_parts(IpFam::V4, self.base.value() + 1);
                    let last = Addr::from_parts(IpFam::V4, self.last_value() - 1);
                    (first.to_string(), last.to_string())
                } else {
                    (NA.to_string(), NA.to_string())
                }
            }
            IpFam::V6 => {
                // enumeration is only safe for tiny blocks (<= 256 addresses)
                if self.prefix < 120 {
                    return (NA_TOO_LARGE.to_string(), NA_TOO_LARGE.to_string());
                }
                // the network address doubles as the Subnet-Router anycast
                // and is excluded, except in /127 and /128 blocks
                let first_value: u128 = if self.prefix >= 127 {
                    self.base.value()
                } else {
                    self.base.value() + 1
                };
                let first = Addr::from_parts(IpFam::V6, first_value);
                let last = Addr::from_parts(IpFam::V6, self.last_value());
                (first.to_string(), last.to_string())
            }
        }
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

impl FromStr for Cidr {
    type Err = CalcError;

    /// Lenient parse: host bits below the prefix are zeroed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::parse_with(s, ParseMode::Lenient)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Cidr>().map_err(de::Error::custom)
    }
}

/* ---------------------------------- */

/// Presentation-ready description of a CIDR block.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SubnetInfo {
    pub network_address: String,
    pub broadcast_address: String,
    pub netmask: String,
    pub prefix_length: u8,
    pub total_addresses: u128,
    pub usable_addresses: u128,
    pub first_usable: String,
    pub last_usable: String,
    pub network_class: String,
    pub is_private: bool,
    pub is_multicast: bool,
    pub is_reserved: bool,
    pub version: u8,
}

/* -------------------------------------------------------------------------- */
