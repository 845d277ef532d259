//! Wrapper for secret scalars
//!
//! Coefficients and received shares are held as [`Secret`] so they can be
//! wiped with `zeroize`, which uses volatile writes the optimiser cannot
//! drop, and so `Debug` never prints them.

use core::fmt;

use zeroize::DefaultIsZeroes;

use crate::group::DkgScalar;

/// A secret scalar
#[derive(Clone, Copy, PartialEq)]
pub struct Secret<S: DkgScalar>(S);

impl<S: DkgScalar> Secret<S> {
    pub fn new(value: S) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &S {
        &self.0
    }
}

impl<S: DkgScalar> From<S> for Secret<S> {
    fn from(value: S) -> Self {
        Self(value)
    }
}

impl<S: DkgScalar> Default for Secret<S> {
    fn default() -> Self {
        Self(S::zero())
    }
}

// zeroize overwrites with Default, which is the zero scalar
impl<S: DkgScalar> DefaultIsZeroes for Secret<S> {}

impl<S: DkgScalar> fmt::Debug for Secret<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}
