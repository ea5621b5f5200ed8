//! Maximum payload size of a family.
//!
//! INVARIANTS:
//! - `max_size()` equals the largest size ever recorded (0 before any)
//! - `max_size()` never decreases

/// Running maximum of the payload sizes of a family's concrete types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeAuthority {
    max_size: usize,
    recorded: usize,
}

impl SizeAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one concrete type's natural payload size into the maximum.
    pub fn record_size(&mut self, bytes: usize) {
        self.max_size = self.max_size.max(bytes);
        self.recorded += 1;
    }

    /// Current maximum payload size in bytes.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of sizes recorded so far.
    pub fn recorded(&self) -> usize {
        self.recorded
    }
}
