// ABOUTME: Status classification by string equality versus bitmask flags
// ABOUTME: Both agree on which statuses count as live; unknown names are never live
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Status classification by name versus by flag

use bitflags::bitflags;

bitflags! {
    /// Lifecycle status flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u8 {
        /// Accepting work
        const ACTIVE = 0b0000_0001;
        /// Created, waiting for activation
        const PENDING = 0b0000_0010;
        /// Temporarily disabled
        const SUSPENDED = 0b0000_0100;
        /// Read-only
        const ARCHIVED = 0b0000_1000;
        /// Scheduled for removal
        const DELETED = 0b0001_0000;
        /// Statuses that still take part in processing
        const LIVE = Self::ACTIVE.bits() | Self::PENDING.bits();
    }
}

/// Every known status name, paired with its flag
pub const STATUS_NAMES: [(&str, StatusFlags); 5] = [
    ("active", StatusFlags::ACTIVE),
    ("pending", StatusFlags::PENDING),
    ("suspended", StatusFlags::SUSPENDED),
    ("archived", StatusFlags::ARCHIVED),
    ("deleted", StatusFlags::DELETED),
];

/// Status names that still take part in processing
const LIVE_NAMES: [&str; 2] = ["active", "pending"];

/// Classify by string inclusion in the live set
#[must_use]
pub fn is_live_by_name(status: &str) -> bool {
    LIVE_NAMES.contains(&status)
}

impl StatusFlags {
    /// Parse a status name; unknown names yield the empty set
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        STATUS_NAMES
            .iter()
            .find(|(name, _)| *name == status)
            .map_or_else(Self::empty, |(_, flag)| *flag)
    }

    /// Classify by bitmask intersection with [`StatusFlags::LIVE`]
    #[must_use]
    pub const fn is_live(self) -> bool {
        self.intersects(Self::LIVE)
    }
}
