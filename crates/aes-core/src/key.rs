//! AES key sizes and the FIPS-197 key schedule.

use core::fmt;

use crate::round::inv_mix_column_word;
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Every supported key size, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => 16,
            KeySize::Aes192 => 24,
            KeySize::Aes256 => 32,
        }
    }

    /// Number of cipher rounds.
    pub const fn rounds(self) -> usize {
        match self {
            KeySize::Aes128 => 10,
            KeySize::Aes192 => 12,
            KeySize::Aes256 => 14,
        }
    }

    /// Length of one expanded schedule in 32-bit words.
    pub const fn schedule_words(self) -> usize {
        4 * (self.rounds() + 1)
    }

    /// Looks up the key size for a raw key length in bytes.
    pub fn from_key_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.key_len() == len)
    }

    /// Looks up the key size whose schedule has `words` entries.
    pub fn from_schedule_words(words: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.schedule_words() == words)
    }
}

/// Returned when a key is not 16, 24 or 32 bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyLengthError {
    /// Length of the rejected key in bytes.
    pub len: usize,
}

impl fmt::Display for KeyLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid AES key length {} (expected 16, 24 or 32 bytes)",
            self.len
        )
    }
}

impl std::error::Error for KeyLengthError {}

/// Returned when a schedule is not 44, 52 or 60 words long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleLengthError {
    /// Length of the rejected schedule in words.
    pub len: usize,
}

impl fmt::Display for ScheduleLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid AES schedule length {} (expected 44, 52 or 60 words)",
            self.len
        )
    }
}

impl std::error::Error for ScheduleLengthError {}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Fills `enc` with the expanded encryption schedule for `key`.
///
/// `enc.len()` must equal the schedule width of the key size.
pub(crate) fn expand_encryption(key: &[u8], enc: &mut [u32]) {
    let nk = key.len() / 4;
    for (word, chunk) in enc.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in nk..enc.len() {
        let mut temp = enc[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        enc[i] = enc[i - nk] ^ temp;
    }
}

/// Derives the equivalent-inverse-cipher schedule: rounds in reverse order,
/// with InvMixColumns applied to every round key except the outer two.
pub(crate) fn invert_schedule(enc: &[u32], dec: &mut [u32]) {
    let n = enc.len();
    for i in (0..n).step_by(4) {
        let src = n - i - 4;
        let inner = i > 0 && i + 4 < n;
        for j in 0..4 {
            let word = enc[src + j];
            dec[i + j] = if inner { inv_mix_column_word(word) } else { word };
        }
    }
}

/// Expanded encryption and decryption schedules for one AES key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    enc: Vec<u32>,
    dec: Vec<u32>,
}

impl KeySchedule {
    /// Runs key expansion for a 16, 24 or 32 byte key.
    pub fn expand(key: &[u8]) -> Result<Self, KeyLengthError> {
        let size = KeySize::from_key_len(key.len()).ok_or(KeyLengthError { len: key.len() })?;
        let mut enc = vec![0u32; size.schedule_words()];
        let mut dec = vec![0u32; size.schedule_words()];
        expand_encryption(key, &mut enc);
        invert_schedule(&enc, &mut dec);
        Ok(Self { enc, dec })
    }

    /// Encryption round keys.
    pub fn enc(&self) -> &[u32] {
        &self.enc
    }

    /// Decryption round keys.
    pub fn dec(&self) -> &[u32] {
        &self.dec
    }
}
