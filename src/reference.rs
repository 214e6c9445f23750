// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only reference tables for presentation layers: well-known
//! reserved network blocks and well-known transport ports.

use lazy_static::lazy_static;
use std::collections::BTreeMap;

// Lazily evaluated reference tables.
// Will be generated only once per program execution.
lazy_static! {
    /// Well-known reserved network blocks and their descriptions.
    pub static ref WELL_KNOWN_NETWORKS: BTreeMap<&'static str, &'static str> = {
        let mut m = BTreeMap::new();
        m.insert("10.0.0.0/8", "Private Class A (RFC 1918)");
        m.insert("172.16.0.0/12", "Private Class B (RFC 1918)");
        m.insert("192.168.0.0/16", "Private Class C (RFC 1918)");
        m.insert("127.0.0.0/8", "Loopback (RFC 3330)");
        m.insert("169.254.0.0/16", "Link-Local (RFC 3927)");
        m.insert("224.0.0.0/4", "Multicast Class D");
        m.insert("240.0.0.0/4", "Reserved Class E");
        m.insert("0.0.0.0/8", "This Network (RFC 1122)");
        m.insert("255.255.255.255/32", "Broadcast Address");
        m
    };

    /// Well-known transport ports and their service names, ascending.
    pub static ref WELL_KNOWN_PORTS: BTreeMap<u16, &'static str> = {
        let mut m = BTreeMap::new();
        m.insert(20, "FTP Data");
        m.insert(21, "FTP Control");
        m.insert(22, "SSH");
        m.insert(23, "Telnet");
        m.insert(25, "SMTP");
        m.insert(53, "DNS");
        m.insert(67, "DHCP Server");
        m.insert(68, "DHCP Client");
        m.insert(80, "HTTP");
        m.insert(110, "POP3");
        m.insert(143, "IMAP");
        m.insert(443, "HTTPS");
        m.insert(993, "IMAPS");
        m.insert(995, "POP3S");
        m
    };
}

/// IANA well-known (system) port range.
pub const WELL_KNOWN_PORT_RANGE: (u16, u16) = (0, 1023);
/// IANA registered (user) port range.
pub const REGISTERED_PORT_RANGE: (u16, u16) = (1024, 49151);
/// IANA dynamic/private port range.
pub const DYNAMIC_PORT_RANGE: (u16, u16) = (49152, 65535);
/// Total number of TCP/UDP port numbers.
pub const TOTAL_PORTS: u32 = 65536;

/* -------------------------------------------------------------------------- */
