//! Snowflake ID Generator
//!
//! Twitter-style unique ID generation for users and messages. A snowflake
//! packs a millisecond timestamp, a machine id and a per-millisecond
//! sequence, so ids are unique for the process lifetime and roughly
//! time-ordered.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Custom epoch (2024-01-01T00:00:00.000Z)
const RELAY_EPOCH: u64 = 1704067200000;

/// Bits reserved for the per-millisecond sequence
const SEQUENCE_BITS: u64 = 12;

/// Bits reserved for the machine id
const MACHINE_BITS: u64 = 5;

/// Snowflake ID generator
pub struct SnowflakeGenerator {
    machine_id: u64,
    state: Mutex<GeneratorState>,
}

struct GeneratorState {
    last_timestamp: u64,
    sequence: u64,
}

impl SnowflakeGenerator {
    /// Create a new snowflake generator
    pub fn new(machine_id: u64) -> Self {
        Self {
            machine_id: machine_id & ((1 << MACHINE_BITS) - 1),
            state: Mutex::new(GeneratorState {
                last_timestamp: 0,
                sequence: 0,
            }),
        }
    }

    /// Generate a new snowflake ID
    pub fn generate(&self) -> i64 {
        let mut state = self.state.lock();
        let mut timestamp = current_timestamp();

        // Clock went backwards: reuse the last timestamp so ids stay unique
        if timestamp < state.last_timestamp {
            timestamp = state.last_timestamp;
        }

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & ((1 << SEQUENCE_BITS) - 1);
            if state.sequence == 0 {
                // Sequence exhausted within this millisecond
                timestamp = state.last_timestamp + 1;
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        let id = ((timestamp - RELAY_EPOCH) << (SEQUENCE_BITS + MACHINE_BITS))
            | (self.machine_id << SEQUENCE_BITS)
            | state.sequence;

        id as i64
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(RELAY_EPOCH)
}

/// Extract timestamp from snowflake ID
pub fn extract_timestamp(snowflake: i64) -> u64 {
    ((snowflake as u64) >> (SEQUENCE_BITS + MACHINE_BITS)) + RELAY_EPOCH
}

/// Parse snowflake from string
pub fn from_string(s: &str) -> Result<i64, std::num::ParseIntError> {
    s.parse()
}
