// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

// lib.rs (CalcError)
pub(crate) static ERR_INVALID_ADDR: &str = "invalid IP address";
pub(crate) static ERR_BIN_LEN: &str = "wrong binary string length";
pub(crate) static ERR_BIN_DIGIT: &str = "invalid binary digit";
pub(crate) static ERR_VAL_RANGE: &str = "value out of range for address family:";
pub(crate) static ERR_INVALID_NET: &str = "invalid network";
pub(crate) static ERR_PREFIX: &str = "invalid prefix length";
pub(crate) static ERR_NOT_NARROWER: &str = "new prefix must be narrower than the current one";
pub(crate) static ERR_NO_ADJACENT: &str = "no adjacent network within the parent supernet";
pub(crate) static ERR_BAD_RANGE: &str = "invalid address range";
pub(crate) static ERR_SPLIT_TOOLARGE: &str = "split too large";

// network.rs
pub(crate) static ERR_HOST_BITS: &str = "host bits set";
pub(crate) static NA: &str = "N/A";
pub(crate) static NA_V6: &str = "N/A (IPv6)";
pub(crate) static NA_TOO_LARGE: &str = "N/A (too large)";

// range.rs / calculator.rs
pub(crate) static MULTIPLE_SUBNETS: &str = "Multiple subnets required";
