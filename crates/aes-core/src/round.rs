//! AES round transformations over a column-major 16-byte state.

use crate::block::Block;
use crate::sbox::{inv_sbox, sbox};

// `SHIFT_ROWS[i]` is the source index of output byte `i`.
const SHIFT_ROWS: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];
const INV_SHIFT_ROWS: [usize; 16] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

#[inline]
fn permute(state: &mut Block, table: &[usize; 16]) {
    let src = *state;
    for (dst, &from) in state.iter_mut().zip(table.iter()) {
        *dst = src[from];
    }
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    state.iter_mut().for_each(|b| *b = sbox(*b));
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    state.iter_mut().for_each(|b| *b = inv_sbox(*b));
}

/// Performs ShiftRows in place.
#[inline]
pub fn shift_rows(state: &mut Block) {
    permute(state, &SHIFT_ROWS);
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    permute(state, &INV_SHIFT_ROWS);
}

fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ if byte & 0x80 != 0 { 0x1b } else { 0 }
}

fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

fn mix_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        xtime(a0) ^ xtime(a1) ^ a1 ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ xtime(a2) ^ a2 ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ xtime(a3) ^ a3,
        xtime(a0) ^ a0 ^ a1 ^ a2 ^ xtime(a3),
    ]
}

fn inv_mix_column(col: [u8; 4]) -> [u8; 4] {
    const ROW: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];
    std::array::from_fn(|r| {
        (0..4).fold(0u8, |acc, c| acc ^ gmul(col[c], ROW[(c + 4 - r) % 4]))
    })
}

fn map_columns(state: &mut Block, f: fn([u8; 4]) -> [u8; 4]) {
    for column in state.chunks_exact_mut(4) {
        let mixed = f([column[0], column[1], column[2], column[3]]);
        column.copy_from_slice(&mixed);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    map_columns(state, mix_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    map_columns(state, inv_mix_column);
}

/// Inverse MixColumns applied to a single big-endian schedule word.
///
/// Used to derive the decryption schedule of the equivalent inverse cipher.
pub fn inv_mix_column_word(word: u32) -> u32 {
    u32::from_be_bytes(inv_mix_column(word.to_be_bytes()))
}

/// XORs four big-endian schedule words into the state, one per column.
#[inline]
pub fn add_round_key(state: &mut Block, words: &[u32]) {
    for (column, word) in state.chunks_exact_mut(4).zip(words.iter()) {
        for (d, k) in column.iter_mut().zip(word.to_be_bytes()) {
            *d ^= k;
        }
    }
}
