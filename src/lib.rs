// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IP address and subnet arithmetic: validation, base conversion
(address <-> binary <-> decimal), CIDR subnet description, subnet
splitting, supernet summarization, containment testing, host-count
arithmetic and IP-range-to-CIDR inference.

Everything operates on fixed-width unsigned integers (`u32` semantics
for IPv4, `u128` for IPv6) carried in an [Addr] tagged with its
[IpFam]; no operation performs I/O or blocks.
*/

mod addr;
mod calculator;
mod collapse;
mod history;
mod network;
mod range;
mod reference;
mod strings;
mod subnets;

use std::{error, fmt};
use strings::*;

pub use addr::{Addr, IpFam};
pub use calculator::{HostCount, IpCalculator};
pub use collapse::collapse_cidrs;
pub use history::{CalcLog, HISTORY_CAPACITY};
pub use network::{Cidr, ParseMode, SubnetInfo};
pub use range::{analyze_range, RangeSummary};
pub use reference::{
    DYNAMIC_PORT_RANGE, REGISTERED_PORT_RANGE, TOTAL_PORTS, WELL_KNOWN_NETWORKS,
    WELL_KNOWN_PORTS, WELL_KNOWN_PORT_RANGE,
};
pub use subnets::{next_sibling, previous_sibling, split};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV6_BITS: u8 = 128;
/// max number of blocks a single split is allowed to materialize
pub(crate) const MAX_SPLIT_BLOCKS: u128 = 65536;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CalcError {
    /// malformed textual IP address
    InvalidAddress(String),
    InvalidBinaryLength { expected: usize, got: usize },
    InvalidBinaryDigit(char),
    ValueOutOfRange { value: u128, max: u128 },
    /// malformed "address/prefix" text, or host bits set in strict mode
    InvalidNetwork(String),
    InvalidPrefix { prefix: u8, max: u8 },
    PrefixNotNarrower { current: u8, requested: u8 },
    /// no same-size neighbor within the parent supernet
    NoAdjacentNetwork(String),
    /// family mismatch or start does not precede end
    InvalidRange { beg: String, end: String },
    SplitTooLarge(u128),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidAddress(ip) => {
                write!(f, "{ERR_INVALID_ADDR}: '{ip}'")
            }
            CalcError::InvalidBinaryLength { expected, got } => {
                write!(f, "{ERR_BIN_LEN}: expected {expected} digits, got {got}")
            }
            CalcError::InvalidBinaryDigit(digit) => {
                write!(f, "{ERR_BIN_DIGIT}: '{digit}'")
            }
            CalcError::ValueOutOfRange { value, max } => {
                write!(f, "{ERR_VAL_RANGE} {value} (max {max})")
            }
            CalcError::InvalidNetwork(net) => {
                write!(f, "{ERR_INVALID_NET}: '{net}'")
            }
            CalcError::InvalidPrefix { prefix, max } => {
                write!(f, "{ERR_PREFIX} /{prefix} (max /{max})")
            }
            CalcError::PrefixNotNarrower { current, requested } => {
                write!(f, "{ERR_NOT_NARROWER} (/{requested} <= /{current})")
            }
            CalcError::NoAdjacentNetwork(net) => {
                write!(f, "{ERR_NO_ADJACENT}: {net}")
            }
            CalcError::InvalidRange { beg, end } => {
                write!(f, "{ERR_BAD_RANGE}: {beg} - {end}")
            }
            CalcError::SplitTooLarge(count) => {
                write!(f, "{ERR_SPLIT_TOOLARGE}: {count} blocks (max {MAX_SPLIT_BLOCKS})")
            }
        }
    }
}

impl error::Error for CalcError {}
