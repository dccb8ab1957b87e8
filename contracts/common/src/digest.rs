//! # SHA-256 Commitments
//!
//! Commitment digests are exchanged as lowercase hex strings so they can be
//! compared directly against digests produced off-chain (`sha256sum`,
//! `crypto.createHash("sha256")`, ...).

use soroban_sdk::{Bytes, Env, String};

/// Length of a hex-encoded SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encode a raw 32-byte digest as lowercase hex.
pub fn encode_hex(digest: &[u8; 32]) -> [u8; SHA256_HEX_LEN] {
    let mut out = [0u8; SHA256_HEX_LEN];
    for (i, byte) in digest.iter().enumerate() {
        out[i * 2] = HEX_DIGITS[(byte >> 4) as usize];
        out[i * 2 + 1] = HEX_DIGITS[(byte & 0x0f) as usize];
    }
    out
}

/// SHA-256 of `data`, hex encoded.
pub fn sha256_hex(env: &Env, data: &Bytes) -> String {
    let digest = env.crypto().sha256(data).to_array();
    String::from_bytes(env, &encode_hex(&digest))
}

/// SHA-256 of a byte slice, hex encoded.
pub fn sha256_hex_slice(env: &Env, data: &[u8]) -> String {
    sha256_hex(env, &Bytes::from_slice(env, data))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
