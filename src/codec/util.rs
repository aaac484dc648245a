// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Bytes of padding PKCS#1 v1.5 adds to every encrypted block:
/// `0x00 || 0x02 || PS (>= 8 non-zero bytes) || 0x00`.
pub const PKCS1_V15_OVERHEAD: usize = 11;

/// Largest plaintext chunk a single PKCS#1 v1.5 block can carry.
///
/// Returns `None` when the modulus leaves no room for data.
#[inline]
pub(crate) fn encrypt_block_size(key_size: usize) -> Option<usize> {
    key_size.checked_sub(PKCS1_V15_OVERHEAD).filter(|&size| size > 0)
}

/// Number of blocks `len` bytes split into, the last one possibly short.
#[inline]
pub(crate) fn block_count(len: usize, block_size: usize) -> usize {
    debug_assert!(block_size > 0, "block size must be non-zero");
    len.div_ceil(block_size)
}
