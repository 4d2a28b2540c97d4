//! Capabilities for reading and seeding expanded round-key schedules.
//!
//! A cipher opts into persistence by implementing [`ExposeRoundKeys`] (read
//! side) and [`FromRoundKeys`] (write side). Smart pointers and references
//! forward [`ExposeRoundKeys`] to their pointee, so a handle wrapped in any
//! number of `Box`/`Rc`/`Arc`/`&` layers exposes the schedules of the
//! innermost cipher.

use core::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Read access to a cipher's expanded round-key schedules.
pub trait ExposeRoundKeys {
    /// Encryption schedule, or `None` if this instance does not carry one.
    fn enc_round_keys(&self) -> Option<&[u32]>;

    /// Decryption schedule, or `None` if this instance does not carry one.
    fn dec_round_keys(&self) -> Option<&[u32]>;
}

/// Construction of a cipher directly from already-expanded schedules.
pub trait FromRoundKeys: Sized {
    /// Required length of both schedules in 32-bit words.
    const SCHEDULE_WORDS: usize;

    /// Builds a cipher from `enc` and `dec` without running key expansion.
    fn from_round_keys(enc: &[u32], dec: &[u32]) -> Result<Self, LayoutError>;
}

/// Returned when schedules do not match a cipher's fixed width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutError {
    /// Width the target cipher requires.
    pub expected: usize,
    /// Length of the supplied encryption schedule.
    pub enc: usize,
    /// Length of the supplied decryption schedule.
    pub dec: usize,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round-key schedules of {}/{} words do not fit a {}-word layout",
            self.enc, self.dec, self.expected
        )
    }
}

impl std::error::Error for LayoutError {}

macro_rules! forward_expose {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: ExposeRoundKeys + ?Sized> ExposeRoundKeys for $ptr {
                #[inline]
                fn enc_round_keys(&self) -> Option<&[u32]> {
                    (**self).enc_round_keys()
                }

                #[inline]
                fn dec_round_keys(&self) -> Option<&[u32]> {
                    (**self).dec_round_keys()
                }
            }
        )*
    };
}

forward_expose!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
