//! Lossless interop with `core::result::Result`
//!
//! `Outcome` sits next to `?`-based code in practice, so the boundary is a
//! pair of `From` impls that re-tag the union without touching either
//! payload.

use crate::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Err(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(err) => Err(err),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts into the standard library's `Result`, preserving the active
    /// variant and its payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::Ok(5);
    /// assert_eq!(ok.into_result(), Ok(5));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}
