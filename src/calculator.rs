// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calculator session facade: textual entry points over the engine,
//! each successful operation recorded in the session history.

use crate::{
    addr::{Addr, IpFam},
    collapse::collapse_cidrs,
    history::CalcLog,
    network::{Cidr, ParseMode, SubnetInfo},
    range::{analyze_range, RangeSummary},
    strings::*,
    subnets::{next_sibling, previous_sibling, split},
    CalcError,
};
use serde::{Deserialize, Serialize};

/// Host-count arithmetic for a single prefix length.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HostCount {
    pub prefix_length: u8,
    pub host_bits: u8,
    pub total_addresses: u128,
    pub usable_hosts: u128,
}

/**
One calculator session. Takes textual or numeric arguments, returns
structured results or a typed [CalcError], and appends one line to the
session history per successful operation - never on failure.

Sessions are independent; the history is not shared between them.
*/
#[derive(Debug, Default)]
pub struct IpCalculator {
    log: CalcLog,
}

impl IpCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session history, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.log.snapshot()
    }

    pub fn clear_history(&self) {
        self.log.clear();
    }

    /// Whether the string parses as an IP address. Not logged.
    pub fn validate_ip(&self, text: &str) -> bool {
        text.parse::<Addr>().is_ok()
    }

    pub fn ip_to_binary(&self, text: &str) -> Result<String, CalcError> {
        let addr: Addr = text.parse()?;
        let out: String = addr.to_binary();
        self.log.append(&format!("IP {addr} to binary"), &out);
        Ok(out)
    }

    pub fn binary_to_ip(&self, binary: &str, fam: IpFam) -> Result<Addr, CalcError> {
        let addr: Addr = Addr::from_binary(binary, fam)?;
        self.log.append(
            &format!("Binary {binary} to IPv{}", fam.version()),
            &addr.to_string(),
        );
        Ok(addr)
    }

    pub fn ip_to_decimal(&self, text: &str) -> Result<u128, CalcError> {
        let addr: Addr = text.parse()?;
        let decimal: u128 = addr.to_decimal();
        self.log
            .append(&format!("IP {addr} to decimal"), &decimal.to_string());
        Ok(decimal)
    }

    pub fn decimal_to_ip(&self, value: u128, fam: IpFam) -> Result<Addr, CalcError> {
        let addr: Addr = Addr::from_decimal(value, fam)?;
        self.log.append(
            &format!("Decimal {value} to IPv{}", fam.version()),
            &addr.to_string(),
        );
        Ok(addr)
    }

    /// Full subnet description for "address/prefix" text (lenient parse).
    pub fn subnet_info(&self, network: &str) -> Result<SubnetInfo, CalcError> {
        let cidr: Cidr = Cidr::parse_with(network, ParseMode::Lenient)?;
        let info: SubnetInfo = cidr.describe();
        self.log.append(
            &format!("Subnet info for {network}"),
            &format!("Network: {cidr}"),
        );
        Ok(info)
    }

    pub fn subnet_split(&self, network: &str, new_prefix: u8) -> Result<Vec<Cidr>, CalcError> {
        let cidr: Cidr = Cidr::parse_with(network, ParseMode::Lenient)?;
        let parts: Vec<Cidr> = split(&cidr, new_prefix)?;
        self.log.append(
            &format!("Split {cidr} into /{new_prefix}"),
            &format!("{} subnets", parts.len()),
        );
        Ok(parts)
    }

    /// Summarize several networks into the minimal covering set.
    pub fn subnet_summary(&self, networks: &[impl AsRef<str>]) -> Result<Vec<Cidr>, CalcError> {
        let mut cidrs: Vec<Cidr> = Vec::with_capacity(networks.len());
        for net in networks {
            cidrs.push(Cidr::parse_with(net.as_ref(), ParseMode::Lenient)?);
        }
        let out: Vec<Cidr> = collapse_cidrs(&cidrs);
        let joined: String = out
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        self.log
            .append(&format!("Summarize {} networks", cidrs.len()), &joined);
        Ok(out)
    }

    pub fn ip_in_subnet(&self, ip: &str, network: &str) -> Result<bool, CalcError> {
        let addr: Addr = ip.parse()?;
        let cidr: Cidr = Cidr::parse_with(network, ParseMode::Lenient)?;
        let result: bool = cidr.contains(addr);
        self.log
            .append(&format!("Is {addr} in {cidr}?"), &result.to_string());
        Ok(result)
    }

    /// Host-count arithmetic for a prefix length in the given family.
    pub fn calculate_hosts(&self, prefix: u8, fam: IpFam) -> Result<HostCount, CalcError> {
        let bits: u8 = fam.bits();
        if prefix > bits {
            return Err(CalcError::InvalidPrefix { prefix, max: bits });
        }
        let host_bits: u8 = bits - prefix;
        let total: u128 = if host_bits == 128 {
            u128::MAX
        } else {
            1u128 << host_bits
        };
        let usable: u128 = match fam {
            IpFam::V4 if total > 2 => total - 2,
            IpFam::V4 => 0,
            IpFam::V6 => total,
        };
        let out = HostCount {
            prefix_length: prefix,
            host_bits,
            total_addresses: total,
            usable_hosts: usable,
        };
        self.log
            .append(&format!("Hosts for /{prefix}"), &format!("{usable} usable hosts"));
        Ok(out)
    }

    /// Bitwise complement of a dotted-quad netmask (IPv4 only).
    pub fn wildcard_mask(&self, netmask: &str) -> Result<Addr, CalcError> {
        let mask: Addr = netmask.parse()?;
        if mask.fam() != IpFam::V4 {
            return Err(CalcError::InvalidAddress(netmask.to_string()));
        }
        let wildcard: Addr =
            Addr::from_parts(IpFam::V4, !mask.value() & u32::MAX as u128);
        self.log
            .append(&format!("Wildcard mask for {mask}"), &wildcard.to_string());
        Ok(wildcard)
    }

    /// The same-size network immediately after this one.
    pub fn next_network(&self, network: &str) -> Result<Cidr, CalcError> {
        let cidr: Cidr = Cidr::parse_with(network, ParseMode::Lenient)?;
        let next: Cidr = next_sibling(&cidr)?;
        self.log
            .append(&format!("Next network after {cidr}"), &next.to_string());
        Ok(next)
    }

    /// The same-size network immediately before this one.
    pub fn previous_network(&self, network: &str) -> Result<Cidr, CalcError> {
        let cidr: Cidr = Cidr::parse_with(network, ParseMode::Lenient)?;
        let prev: Cidr = previous_sibling(&cidr)?;
        self.log
            .append(&format!("Previous network before {cidr}"), &prev.to_string());
        Ok(prev)
    }

    pub fn analyze_ip_range(&self, beg: &str, end: &str) -> Result<RangeSummary, CalcError> {
        let beg_addr: Addr = beg.parse()?;
        let end_addr: Addr = end.parse()?;
        let out: RangeSummary = analyze_range(beg_addr, end_addr)?;
        self.log.append(
            &format!("Analyze range {beg_addr}-{end_addr}"),
            &format!("{} addresses", out.total_addresses),
        );
        Ok(out)
    }

    /// Presentation form of [RangeSummary::suggested].
    pub fn suggested_label(summary: &RangeSummary) -> String {
        match &summary.suggested {
            Some(cidr) => cidr.to_string(),
            None => MULTIPLE_SUBNETS.to_string(),
        }
    }
}

/* -------------------------------------------------------------------------- */
