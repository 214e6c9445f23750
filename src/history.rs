// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded calculation history.

use parking_lot::RwLock;
use std::collections::VecDeque;
use tracing::trace;

/// Maximum number of entries retained by a [CalcLog].
pub const HISTORY_CAPACITY: usize = 50;

/**
Append-only log of `operation = result` lines, capacity-bounded with
FIFO eviction. The ring buffer sits behind an [RwLock] so a session can
append through a shared reference; readers get a snapshot copy.
*/
#[derive(Debug, Default)]
pub struct CalcLog {
    entries: RwLock<VecDeque<String>>,
}

impl CalcLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one calculation. Evicts the oldest entry past capacity.
    pub fn append(&self, operation: &str, result: &str) {
        let mut entries = self.entries.write();
        entries.push_back(format!("{operation} = {result}"));
        if entries.len() > HISTORY_CAPACITY {
            let evicted: Option<String> = entries.pop_front();
            trace!("history full, evicted: {evicted:?}");
        }
    }

    /// Copy of the history, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.read().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/* -------------------------------------------------------------------------- */
