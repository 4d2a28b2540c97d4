//! Target layout descriptors for reconstruction.

use core::fmt;
use core::str::FromStr;

use aes_core::KeySize;
use serde::{Deserialize, Serialize};

use crate::error::InjectionError;

/// Identity of a reconstructable cipher layout.
///
/// A round-key table does not say which algorithm produced it, so the caller
/// supplies a shape when turning a record back into a cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CipherShape {
    /// AES with a 128-bit key.
    Aes128,
    /// AES with a 192-bit key.
    Aes192,
    /// AES with a 256-bit key.
    Aes256,
}

impl CipherShape {
    /// Every supported shape.
    pub const ALL: [CipherShape; 3] = [
        CipherShape::Aes128,
        CipherShape::Aes192,
        CipherShape::Aes256,
    ];

    /// Underlying AES key size.
    pub const fn key_size(self) -> KeySize {
        match self {
            CipherShape::Aes128 => KeySize::Aes128,
            CipherShape::Aes192 => KeySize::Aes192,
            CipherShape::Aes256 => KeySize::Aes256,
        }
    }

    /// Number of words each of `enc` and `dec` must hold.
    pub const fn schedule_words(self) -> usize {
        self.key_size().schedule_words()
    }

    /// Shape for a key of `bits` bits.
    pub fn from_key_bits(bits: usize) -> Result<Self, InjectionError> {
        KeySize::from_key_len(bits / 8)
            .filter(|_| bits % 8 == 0)
            .map(Self::from)
            .ok_or_else(|| InjectionError::InvalidShape(format!("{bits}-bit key")))
    }

    /// Shape whose schedules hold exactly `words` entries.
    pub fn from_schedule_len(words: usize) -> Result<Self, InjectionError> {
        KeySize::from_schedule_words(words)
            .map(Self::from)
            .ok_or_else(|| InjectionError::InvalidShape(format!("{words}-word schedule")))
    }
}

impl From<KeySize> for CipherShape {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Aes128 => CipherShape::Aes128,
            KeySize::Aes192 => CipherShape::Aes192,
            KeySize::Aes256 => CipherShape::Aes256,
        }
    }
}

impl fmt::Display for CipherShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherShape::Aes128 => "AES-128",
            CipherShape::Aes192 => "AES-192",
            CipherShape::Aes256 => "AES-256",
        };
        f.write_str(name)
    }
}

impl FromStr for CipherShape {
    type Err = InjectionError;

    /// Accepts `aes-128`, `AES_192`, `aes256`, or a bare key size such as `128`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        let bits = normalized.strip_prefix("aes").unwrap_or(normalized.as_str());
        match bits {
            "128" => Ok(CipherShape::Aes128),
            "192" => Ok(CipherShape::Aes192),
            "256" => Ok(CipherShape::Aes256),
            _ => Err(InjectionError::InvalidShape(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        for name in ["aes-128", "AES128", "aes_128", "128", " AES 128 "] {
            assert_eq!(name.parse::<CipherShape>().unwrap(), CipherShape::Aes128, "{name}");
        }
        assert_eq!("AES-256".parse::<CipherShape>().unwrap(), CipherShape::Aes256);
    }

    #[test]
    fn rejects_unknown_descriptors() {
        for name in ["", "aes", "aes-512", "des", "twofish-128"] {
            assert_eq!(
                name.parse::<CipherShape>().unwrap_err(),
                InjectionError::InvalidShape(name.to_owned())
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for shape in CipherShape::ALL {
            assert_eq!(shape.to_string().parse::<CipherShape>().unwrap(), shape);
        }
    }

    #[test]
    fn key_bits_and_schedule_length() {
        assert_eq!(CipherShape::from_key_bits(192).unwrap(), CipherShape::Aes192);
        assert!(CipherShape::from_key_bits(64).is_err());
        assert!(CipherShape::from_key_bits(129).is_err());
        assert_eq!(CipherShape::from_schedule_len(60).unwrap(), CipherShape::Aes256);
        assert!(CipherShape::from_schedule_len(0).is_err());
        assert_eq!(CipherShape::Aes128.schedule_words(), 44);
    }

    #[test]
    fn serde_uses_kebab_names() {
        let json = serde_json::to_string(&CipherShape::Aes192).unwrap();
        assert_eq!(json, "\"aes192\"");
    }
}
