/*!
 * Permission Types
 * Capability flags, operation classes and gate decisions
 */

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Capability flags granted to a store instance.
    ///
    /// Flags combine additively. [`UNLOCKED`](Self::UNLOCKED) satisfies every
    /// operation class on its own.
    ///
    /// | Flag | Operations |
    /// |------|------------|
    /// | [`READ`](Self::READ) | `contains`, `index_of`, `iter`, `to_vec`, `to_list` |
    /// | [`INDEX_READ`](Self::INDEX_READ) | `get`, `try_get`, `first`, `last` |
    /// | [`ADD`](Self::ADD) | `add`, `add_all`, `insert_at`, `prepend`, growing `set` |
    /// | [`REMOVE`](Self::REMOVE) | `remove`, `remove_at` |
    /// | [`CLEARABLE`](Self::CLEARABLE) | `clear` |
    /// | [`REPLACE`](Self::REPLACE) | in-range `set` |
    /// | [`MOVE`](Self::MOVE) | `move_item` |
    /// | [`SHIFT`](Self::SHIFT) | `shift_left`, `shift_right` |
    /// | [`COPY`](Self::COPY) | `copy_range` |
    /// | [`PASTE`](Self::PASTE) | `paste_at` |
    /// | [`CONVERSION`](Self::CONVERSION) | `render`, `to_json` |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Permissions: u16 {
        const READ       = 0b0000_0000_0001;
        const INDEX_READ = 0b0000_0000_0010;
        const ADD        = 0b0000_0000_0100;
        const REMOVE     = 0b0000_0000_1000;
        const CLEARABLE  = 0b0000_0001_0000;
        const REPLACE    = 0b0000_0010_0000;
        const MOVE       = 0b0000_0100_0000;
        const SHIFT      = 0b0000_1000_0000;
        const COPY       = 0b0001_0000_0000;
        const PASTE      = 0b0010_0000_0000;
        const CONVERSION = 0b0100_0000_0000;
        /// Full access; satisfies every operation class
        const UNLOCKED   = 0b1000_0000_0000;
    }
}

impl Permissions {
    /// No flags at all. Every operation is denied.
    pub const NONE: Self = Self::empty();

    /// Read-only access: plain and indexed reads plus conversions.
    pub const READ_ONLY: Self = Self::READ
        .union(Self::INDEX_READ)
        .union(Self::CONVERSION);

    /// Everything except the privileged superset flag.
    pub const EDIT: Self = Self::READ_ONLY
        .union(Self::ADD)
        .union(Self::REMOVE)
        .union(Self::CLEARABLE)
        .union(Self::REPLACE)
        .union(Self::MOVE)
        .union(Self::SHIFT)
        .union(Self::COPY)
        .union(Self::PASTE);

    /// Every flag.
    pub const ALL: Self = Self::all();

    /// Whether the set grants `operation`.
    pub fn permits(self, operation: Operation) -> bool {
        self.contains(Self::UNLOCKED) || self.contains(operation.required_flag())
    }

    /// Human-readable flag names, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::UNLOCKED
    }
}

/// The logical operation a public entry point is about to perform.
///
/// Every entry point tags itself explicitly; shared primitives receive the
/// tag from their caller rather than working it out themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Read,
    IndexRead,
    Add,
    Remove,
    Clear,
    Replace,
    Move,
    Shift,
    Copy,
    Paste,
    Convert,
    /// Requires the UNLOCKED flag itself
    Privileged,
}

impl Operation {
    /// All operation classes
    pub const ALL: [Operation; 12] = [
        Operation::Read,
        Operation::IndexRead,
        Operation::Add,
        Operation::Remove,
        Operation::Clear,
        Operation::Replace,
        Operation::Move,
        Operation::Shift,
        Operation::Copy,
        Operation::Paste,
        Operation::Convert,
        Operation::Privileged,
    ];

    /// The flag that grants this class
    pub fn required_flag(self) -> Permissions {
        match self {
            Operation::Read => Permissions::READ,
            Operation::IndexRead => Permissions::INDEX_READ,
            Operation::Add => Permissions::ADD,
            Operation::Remove => Permissions::REMOVE,
            Operation::Clear => Permissions::CLEARABLE,
            Operation::Replace => Permissions::REPLACE,
            Operation::Move => Permissions::MOVE,
            Operation::Shift => Permissions::SHIFT,
            Operation::Copy => Permissions::COPY,
            Operation::Paste => Permissions::PASTE,
            Operation::Convert => Permissions::CONVERSION,
            Operation::Privileged => Permissions::UNLOCKED,
        }
    }

    /// Whether the class changes the store. `locked` only applies to these.
    pub fn is_mutation(self) -> bool {
        !matches!(
            self,
            Operation::Read
                | Operation::IndexRead
                | Operation::Copy
                | Operation::Convert
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Read => "read",
            Operation::IndexRead => "index_read",
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::Clear => "clear",
            Operation::Replace => "replace",
            Operation::Move => "move",
            Operation::Shift => "shift",
            Operation::Copy => "copy",
            Operation::Paste => "paste",
            Operation::Convert => "convert",
            Operation::Privileged => "privileged",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The permission set lacks the required flag
    MissingFlag,
    /// A chained policy refused the request
    Policy,
    /// The store is locked
    Locked,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::MissingFlag => f.write_str("required permission flag not granted"),
            DenialReason::Policy => f.write_str("refused by policy"),
            DenialReason::Locked => f.write_str("store is locked"),
        }
    }
}

/// Gate decision for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "decision", content = "reason")]
pub enum AccessDecision {
    Allow,
    Deny(DenialReason),
}

impl AccessDecision {
    /// Check if allowed
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}
