// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Supernet summarization: merging a set of CIDR blocks into the
//! minimal covering set.

use crate::{
    addr::IpFam,
    network::Cidr,
    IPV6_BITS,
};

/// Inclusive span of address values within one family.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Span {
    fam: IpFam,
    beg: u128,
    /// inclusive
    end: u128,
}

impl Span {
    fn cmp_key(&self) -> (u8, u128, u128) {
        (self.fam.version(), self.beg, self.end)
    }
}

/**
Collapse a list of CIDR blocks into the minimal equivalent set:
- duplicate and fully-contained blocks are absorbed
- adjacent/overlapping same-family blocks merge into their common parent

Returned blocks are in ascending base-address order (v4 before v6).
The result covers exactly the same address set as the input.
*/
pub fn collapse_cidrs(input: &[Cidr]) -> Vec<Cidr> {
    let mut spans: Vec<Span> = input.iter().map(cidr_to_span).collect();

    // 1) sort spans
    spans.sort_by(|a, b| a.cmp_key().cmp(&b.cmp_key()));

    // 2) merge overlaps/adjacency within each family
    let merged: Vec<Span> = merge_spans(&spans);

    // 3) decompose each merged span back into minimal aligned CIDRs
    let mut out: Vec<Cidr> = Vec::new();
    for s in merged {
        out.extend(span_to_cidrs(s));
    }
    out
}

fn cidr_to_span(c: &Cidr) -> Span {
    Span {
        fam: c.fam(),
        beg: c.base().value(),
        end: c.last_value(),
    }
}

/// Merge overlapping/adjacent spans within each family. Input must be sorted.
#[inline]
fn merge_spans(sorted: &[Span]) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::with_capacity(sorted.len());
    for s in sorted.iter().copied() {
        if let Some(last) = out.last_mut() {
            if last.fam == s.fam && s.beg <= last.end.saturating_add(1) {
                if s.end > last.end {
                    last.end = s.end;
                }
                continue;
            }
        }
        out.push(s);
    }
    out
}

/// Decompose an inclusive span into the minimal set of aligned CIDRs.
fn span_to_cidrs(s: Span) -> Vec<Cidr> {
    let bits: u8 = s.fam.bits();

    // full v6 address space special-case
    if bits == IPV6_BITS && s.beg == 0 && s.end == u128::MAX {
        return vec![Cidr::from_parts(s.fam, 0, 0)];
    }

    let mut start: u128 = s.beg;
    let end: u128 = s.end;
    let mut out: Vec<Cidr> = Vec::new();

    while start <= end {
        // widest block aligned at 'start' (power-of-two size)
        let tz: u8 = start.trailing_zeros() as u8;
        let max_align_prefix: u8 = bits.saturating_sub(tz.min(bits));

        // widest block that fits in the remaining span length
        let remaining: u128 = (end - start).saturating_add(1);
        let max_fit_prefix: u8 = bits - floor_log2_u128(remaining).min(bits);

        let prefix: u8 = max_align_prefix.max(max_fit_prefix);
        out.push(Cidr::from_parts(s.fam, start, prefix));

        // prefix == 0 for v6 is the full-space case handled above;
        // keep the guard so the shift below stays in range
        if bits == IPV6_BITS && prefix == 0 {
            break;
        }

        // advance by block size = 2^(bits - prefix); overflow means the
        // span ended at the top of the address space
        let block_size: u128 = 1u128 << (bits - prefix) as u32;
        start = match start.checked_add(block_size) {
            Some(next) => next,
            None => break,
        };
    }

    out
}

/// floor(log2(x)) for x >= 1, returns in [0..127]
#[inline]
fn floor_log2_u128(x: u128) -> u8 {
    debug_assert!(x >= 1);
    127u8.saturating_sub(x.leading_zeros() as u8)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subnets::split;

    fn parse_all(input: &[&str]) -> Vec<Cidr> {
        input.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn as_strings(cidrs: &[Cidr]) -> Vec<String> {
        cidrs.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_merges_adjacent_siblings() {
        let out = collapse_cidrs(&parse_all(&["192.168.0.0/24", "192.168.1.0/24"]));
        assert_eq!(as_strings(&out), vec!["192.168.0.0/23"]);
    }

    #[test]
    fn test_adjacent_but_not_siblings_stay_apart() {
        // contiguous range, but no single aligned block covers it
        let out = collapse_cidrs(&parse_all(&["192.168.1.0/24", "192.168.2.0/24"]));
        assert_eq!(as_strings(&out), vec!["192.168.1.0/24", "192.168.2.0/24"]);
    }

    #[test]
    fn test_absorbs_contained_blocks() {
        let out = collapse_cidrs(&parse_all(&["10.0.0.0/8", "10.1.2.0/24"]));
        assert_eq!(as_strings(&out), vec!["10.0.0.0/8"]);
    }

    #[test]
    fn test_deduplicates() {
        let out = collapse_cidrs(&parse_all(&["172.16.0.0/16", "172.16.0.0/16"]));
        assert_eq!(as_strings(&out), vec!["172.16.0.0/16"]);
    }

    #[test]
    fn test_cascading_merge() {
        // four /26 blocks merge all the way up to the /24
        let out = collapse_cidrs(&parse_all(&[
            "192.168.1.192/26",
            "192.168.1.0/26",
            "192.168.1.128/26",
            "192.168.1.64/26",
        ]));
        assert_eq!(as_strings(&out), vec!["192.168.1.0/24"]);
    }

    #[test]
    fn test_collapse_inverts_split() {
        for (net, prefix) in [("10.20.0.0/16", 20u8), ("2001:db8::/48", 52u8)] {
            let cidr: Cidr = net.parse().unwrap();
            let parts = split(&cidr, prefix).unwrap();
            assert_eq!(collapse_cidrs(&parts), vec![cidr]);
        }
    }

    #[test]
    fn test_families_never_merge() {
        let out = collapse_cidrs(&parse_all(&["::/1", "0.0.0.0/1", "128.0.0.0/1"]));
        assert_eq!(as_strings(&out), vec!["0.0.0.0/0", "::/1"]);
    }

    #[test]
    fn test_v6_sibling_merge() {
        let out = collapse_cidrs(&parse_all(&["2001:db8::/65", "2001:db8:0:0:8000::/65"]));
        assert_eq!(as_strings(&out), vec!["2001:db8::/64"]);
    }

    #[test]
    fn test_output_sorted_ascending() {
        let out = collapse_cidrs(&parse_all(&[
            "10.2.0.0/16",
            "192.168.0.0/24",
            "10.0.0.0/16",
        ]));
        assert_eq!(
            as_strings(&out),
            vec!["10.0.0.0/16", "10.2.0.0/16", "192.168.0.0/24"]
        );
    }

    #[test]
    fn test_span_at_top_of_v4_space() {
        let out = collapse_cidrs(&parse_all(&["255.255.255.254/31", "255.255.255.252/31"]));
        assert_eq!(as_strings(&out), vec!["255.255.255.252/30"]);
    }

    #[test]
    fn test_full_v6_space() {
        let out = collapse_cidrs(&parse_all(&["::/1", "8000::/1"]));
        assert_eq!(as_strings(&out), vec!["::/0"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collapse_cidrs(&[]).is_empty());
    }
}
