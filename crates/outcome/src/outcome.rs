//! The success/failure union and its combinator set

use core::fmt;

/// A value that is either a success payload or a failure payload.
///
/// Exactly one variant is active at any time. `T` and `E` are independent
/// generic parameters; no bound relates them, and the type never inspects
/// either payload. All combinators consume `self` and return a new value,
/// possibly at a different generic parameterization.
///
/// Comparison and hashing are available whenever the payload types provide
/// them, via conditional derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Success, carrying the success payload
    Ok(T),
    /// Failure, carrying the failure payload
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // ==================== Predicates ====================

    /// Returns `true` if this is the `Ok` variant
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is the `Err` variant
    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    // ==================== Accessors ====================

    /// Converts into an `Option` over the success payload, discarding the
    /// failure payload if any. Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(ok.ok(), Some(2));
    ///
    /// let err: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(err.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into an `Option` over the failure payload, discarding the
    /// success payload if any. Never panics.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(err) => Some(err),
        }
    }

    // ==================== Transformation ====================

    /// Applies `f` to the success payload, leaving a failure untouched.
    ///
    /// `f` is invoked exactly once, and only when this is `Ok`. The failure
    /// payload and its type pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let line: Outcome<i32, &str> = Outcome::Ok(21);
    /// assert_eq!(line.map(|n| n * 2), Outcome::Ok(42));
    ///
    /// let bad: Outcome<i32, &str> = Outcome::Err("unreadable");
    /// assert_eq!(bad.map(|n| n * 2), Outcome::Err("unreadable"));
    /// ```
    #[inline]
    pub fn map<V, F>(self, f: F) -> Outcome<V, E>
    where
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Applies `f` to the failure payload, leaving a success untouched.
    ///
    /// The mirror image of [`map`](Self::map): `f` is invoked exactly once,
    /// and only when this is `Err`.
    #[inline]
    pub fn map_err<V, F>(self, f: F) -> Outcome<T, V>
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(f(err)),
        }
    }

    // ==================== Chaining ====================

    /// Chains a fallible continuation onto the success payload.
    ///
    /// If this is `Ok(t)`, returns `f(t)`; if this is `Err(e)`, returns
    /// `Err(e)` and `f` is never invoked. Sequencing several fallible steps
    /// with `and_then` propagates the first failure and evaluates nothing
    /// after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 { Outcome::Ok(n / 2) } else { Outcome::Err("odd") }
    /// }
    ///
    /// assert_eq!(Outcome::Ok(16).and_then(half).and_then(half), Outcome::Ok(4));
    /// assert_eq!(Outcome::Ok(6).and_then(half).and_then(half), Outcome::Err("odd"));
    /// ```
    #[inline]
    pub fn and_then<V, F>(self, f: F) -> Outcome<V, E>
    where
        F: FnOnce(T) -> Outcome<V, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Chains a recovery computation onto the failure payload.
    ///
    /// If this is `Err(e)`, returns `f(e)` (which may recover with `Ok` or
    /// fail again); if this is `Ok(t)`, returns `Ok(t)` and `f` is never
    /// invoked.
    #[inline]
    pub fn or_else<V, F>(self, f: F) -> Outcome<T, V>
    where
        F: FnOnce(E) -> Outcome<T, V>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => f(err),
        }
    }

    // ==================== Combination ====================

    /// Returns `other` if this is `Ok`, otherwise returns this `Err`.
    ///
    /// Short-circuit logical AND over outcomes: in a left-associative chain
    /// `a.and(b).and(c)`, the left-most `Err` is the one retained; if every
    /// operand is `Ok`, the right-most success payload wins.
    ///
    /// `other` is evaluated eagerly by the caller, before the call. Use
    /// [`and_then`](Self::and_then) when the second operand should only be
    /// computed on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// type O = Outcome<i32, &'static str>;
    ///
    /// assert_eq!(O::Ok(2).and(Outcome::Ok(20)), Outcome::Ok(20));
    /// assert_eq!(O::Ok(2).and(Outcome::Err("late")), Outcome::<i32, _>::Err("late"));
    /// assert_eq!(O::Err("early").and(Outcome::Ok(20)), Outcome::<i32, _>::Err("early"));
    /// ```
    #[inline]
    pub fn and<V>(self, other: Outcome<V, E>) -> Outcome<V, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Returns this `Ok` unchanged, otherwise returns `other`.
    ///
    /// Short-circuit logical OR over outcomes: the first success wins; two
    /// failures yield the right-hand failure.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(_) => other,
        }
    }

    // ==================== Unwrapping ====================

    /// Returns the success payload, panicking on `Err`.
    ///
    /// This is a programmer assertion, not a recoverable error path: call it
    /// only where prior control flow has already established `Ok`-ness. The
    /// panic message embeds the failure payload's `Debug` rendering.
    ///
    /// # Panics
    ///
    /// Panics if this is the `Err` variant.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => {
                panic!("called `Outcome::unwrap()` on an `Err` value: {err:?}")
            }
        }
    }

    /// Returns the success payload, panicking on `Err` with `msg`.
    ///
    /// Unlike [`unwrap`](Self::unwrap), the diagnostic is entirely the
    /// caller's: the failure payload is dropped from the message, so no
    /// `Debug` bound is required of `E`.
    ///
    /// # Panics
    ///
    /// Panics if this is the `Err` variant.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{msg}"),
        }
    }

    /// Returns the success payload, or `default` on `Err`.
    ///
    /// The total, panic-free sibling of [`unwrap`](Self::unwrap). `default`
    /// is evaluated eagerly by the caller.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let err: Outcome<i32, &str> = Outcome::Err("E");

        assert!(ok.is_ok());
        assert!(!ok.is_err());
        assert!(err.is_err());
        assert!(!err.is_ok());
    }

    #[test]
    fn test_accessors_are_exclusive() {
        let ok: Outcome<i32, &str> = Outcome::Ok(7);
        let err: Outcome<i32, &str> = Outcome::Err("E");

        assert_eq!(ok.ok(), Some(7));
        assert_eq!(ok.err(), None);
        assert_eq!(err.ok(), None);
        assert_eq!(err.err(), Some("E"));
    }

    #[test]
    fn test_map_touches_only_ok() {
        let ok: Outcome<i32, &str> = Outcome::Ok(3);
        assert_eq!(ok.map(|n| n + 1).ok(), Some(4));

        let err: Outcome<i32, &str> = Outcome::Err("E");
        let mapped = err.map(|n| n + 1);
        assert_eq!(mapped.ok(), None);
        assert_eq!(mapped.err(), Some("E"));
    }

    #[test]
    fn test_map_changes_success_type() {
        let ok: Outcome<i32, &str> = Outcome::Ok(3);
        let text: Outcome<&'static str, &str> = ok.map(|_| "three");
        assert_eq!(text, Outcome::Ok("three"));
    }

    #[test]
    fn test_map_err_touches_only_err() {
        let err: Outcome<i32, i32> = Outcome::Err(40);
        assert_eq!(err.map_err(|e| e + 2).err(), Some(42));

        let ok: Outcome<i32, i32> = Outcome::Ok(5);
        let mapped = ok.map_err(|e| e + 2);
        assert_eq!(mapped.err(), None);
        assert_eq!(mapped.ok(), Some(5));
    }

    #[test]
    fn test_and_then_short_circuits() {
        fn checked_div(n: i32, d: i32) -> Outcome<i32, &'static str> {
            if d == 0 { Outcome::Err("div by zero") } else { Outcome::Ok(n / d) }
        }

        assert_eq!(
            Outcome::Ok(100).and_then(|n| checked_div(n, 5)).and_then(|n| checked_div(n, 2)),
            Outcome::Ok(10)
        );
        assert_eq!(
            Outcome::Ok(100).and_then(|n| checked_div(n, 0)).and_then(|n| checked_div(n, 2)),
            Outcome::Err("div by zero")
        );

        // f is never invoked for Err
        let err: Outcome<i32, &str> = Outcome::Err("E");
        let chained = err.and_then(|_| -> Outcome<i32, &str> { unreachable!() });
        assert_eq!(chained, Outcome::Err("E"));
    }

    #[test]
    fn test_or_else_recovers() {
        let err: Outcome<i32, &str> = Outcome::Err("E");
        assert_eq!(err.or_else(|_| Outcome::<i32, &str>::Ok(0)), Outcome::Ok(0));

        // f is never invoked for Ok
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let kept = ok.or_else(|_| -> Outcome<i32, &str> { unreachable!() });
        assert_eq!(kept, Outcome::Ok(1));
    }

    #[test]
    fn test_and_left_error_wins() {
        type O = Outcome<i32, &'static str>;

        assert_eq!(O::Ok(10).and(O::Ok(20)).and(O::Ok(20)), O::Ok(20));
        assert_eq!(O::Err("E1").and(O::Ok(20)).and(O::Ok(20)), O::Err("E1"));
        assert_eq!(O::Ok(2).and(O::Err("E2")).and(O::Ok(20)), O::Err("E2"));
        assert_eq!(O::Ok(2).and(O::Err("E2")).and(O::Err("E3")), O::Err("E2"));
    }

    #[test]
    fn test_or_first_success_wins() {
        type O = Outcome<i32, &'static str>;

        assert_eq!(O::Ok(10).or(O::Ok(20)), O::Ok(10));
        assert_eq!(O::Ok(10).or(O::Err("E")), O::Ok(10));
        assert_eq!(O::Err("E").or(O::Ok(20)), O::Ok(20));
        assert_eq!(O::Err("E1").or(O::Err("E2")), O::Err("E2"));
    }

    #[test]
    fn test_unwrap_or() {
        let ok: Outcome<i32, &str> = Outcome::Ok(10);
        let err: Outcome<i32, &str> = Outcome::Err("E");

        assert_eq!(ok.unwrap_or(1000), 10);
        assert_eq!(err.unwrap_or(1000), 1000);
    }

    #[test]
    fn test_unwrap_ok() {
        let ok: Outcome<i32, &str> = Outcome::Ok(10);
        assert_eq!(ok.unwrap(), 10);
        let named: Outcome<i32, &str> = Outcome::Ok(11);
        assert_eq!(named.expect("must hold"), 11);
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value: \"E\"")]
    fn test_unwrap_err_panics_with_payload() {
        let err: Outcome<i32, &str> = Outcome::Err("E");
        let _ = err.unwrap();
    }

    #[test]
    #[should_panic(expected = "port must already be validated")]
    fn test_expect_err_panics_with_caller_message() {
        let err: Outcome<i32, &str> = Outcome::Err("E");
        let _ = err.expect("port must already be validated");
    }

    #[test]
    fn test_expect_needs_no_debug_bound() {
        struct Opaque;
        let ok: Outcome<i32, Opaque> = Outcome::Ok(3);
        assert_eq!(ok.expect("ok by construction"), 3);
    }
}
