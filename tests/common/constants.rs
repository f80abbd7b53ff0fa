//! Shared constants for end-to-end tests
//!
//! When the fixture corpus changes, update only this file and `fixtures.rs`.

#![allow(dead_code)]

// ============================================================================
// Test Corpus Song IDs
// ============================================================================

pub const SONG_A: &str = "spotify:track:A";
pub const SONG_B: &str = "spotify:track:B";
pub const SONG_C: &str = "spotify:track:C";
pub const SONG_D: &str = "spotify:track:D";
pub const SONG_E: &str = "spotify:track:E";

/// Only ever appears alone in its playlist
pub const SONG_LONELY: &str = "spotify:track:lonely";

/// Not part of the corpus
pub const SONG_UNKNOWN: &str = "spotify:track:unknown";

/// Number of playlists in the fixture corpus
pub const TEST_PLAYLISTS_COUNT: usize = 5;

/// Number of distinct songs in the fixture corpus
pub const TEST_SONGS_COUNT: usize = 6;

/// Server-side default for top_n in tests
pub const TEST_DEFAULT_TOP_N: usize = 3;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
