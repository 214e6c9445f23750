// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subnet partitioning: splitting a block into smaller blocks and
//! locating sibling blocks within the parent supernet.

use crate::{network::Cidr, CalcError, MAX_SPLIT_BLOCKS};

/**
Split a block into the ordered sequence of sub-blocks at a narrower
prefix: exactly `2^(new_prefix - prefix)` contiguous blocks in ascending
base-address order, tiling the original with no gaps or overlaps.

Refuses to materialize more than [MAX_SPLIT_BLOCKS] blocks; a `::/0`
split down to /128 would otherwise try to allocate 2^128 entries.
*/
pub fn split(cidr: &Cidr, new_prefix: u8) -> Result<Vec<Cidr>, CalcError> {
    let bits: u8 = cidr.bits();
    if new_prefix > bits {
        return Err(CalcError::InvalidPrefix {
            prefix: new_prefix,
            max: bits,
        });
    }
    if new_prefix <= cidr.prefix() {
        return Err(CalcError::PrefixNotNarrower {
            current: cidr.prefix(),
            requested: new_prefix,
        });
    }

    let diff: u8 = new_prefix - cidr.prefix();
    let count: u128 = 1u128.checked_shl(diff as u32).unwrap_or(u128::MAX);
    if count > MAX_SPLIT_BLOCKS {
        return Err(CalcError::SplitTooLarge(count));
    }

    // new_prefix >= 1 here, so the shift is at most 127
    let step: u128 = 1u128 << (bits - new_prefix);
    let mut out: Vec<Cidr> = Vec::with_capacity(count as usize);
    let mut base: u128 = cidr.base().value();
    for _ in 0..count {
        out.push(Cidr::from_parts(cidr.fam(), base, new_prefix));
        base = base.saturating_add(step);
    }
    Ok(out)
}

/// The same-size block immediately after `cidr` within its parent supernet.
pub fn next_sibling(cidr: &Cidr) -> Result<Cidr, CalcError> {
    sibling(cidr, true)
}

/// The same-size block immediately before `cidr` within its parent supernet.
pub fn previous_sibling(cidr: &Cidr) -> Result<Cidr, CalcError> {
    sibling(cidr, false)
}

/**
The two children of the parent (prefix - 1) supernet differ in exactly one
bit: bit `bits - prefix` of the base address. Flipping it maps the low
child to the high child and back; anything further would leave the parent
block, which mirrors how an index search over the parent's subnet list
runs off its end.
*/
fn sibling(cidr: &Cidr, forward: bool) -> Result<Cidr, CalcError> {
    if cidr.prefix() == 0 {
        // the full address space has no parent
        return Err(CalcError::NoAdjacentNetwork(cidr.to_string()));
    }

    let flip: u128 = 1u128 << (cidr.bits() - cidr.prefix());
    let is_high: bool = cidr.base().value() & flip != 0;
    if forward == is_high {
        // the high child has no next sibling, the low child no previous
        return Err(CalcError::NoAdjacentNetwork(cidr.to_string()));
    }

    Ok(Cidr::from_parts(
        cidr.fam(),
        cidr.base().value() ^ flip,
        cidr.prefix(),
    ))
}

/* -------------------------------------------------------------------------- */
