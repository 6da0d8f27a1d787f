//! Success/failure union with a closed combinator set
//!
//! [`Outcome<T, E>`] is a two-variant tagged union: [`Ok`](Outcome::Ok)
//! carries a success payload of type `T`, [`Err`](Outcome::Err) carries a
//! failure payload of type `E`. The two generic parameters are independent;
//! the type never interprets either payload.
//!
//! The combinator set is deliberately closed and pure: predicates
//! ([`is_ok`](Outcome::is_ok) / [`is_err`](Outcome::is_err)), accessors
//! ([`ok`](Outcome::ok) / [`err`](Outcome::err)), transformations
//! ([`map`](Outcome::map) / [`map_err`](Outcome::map_err)), monadic
//! chaining ([`and_then`](Outcome::and_then) / [`or_else`](Outcome::or_else)),
//! boolean-style combination ([`and`](Outcome::and) / [`or`](Outcome::or)),
//! and the unwrapping escape hatches ([`unwrap`](Outcome::unwrap) /
//! [`expect`](Outcome::expect) / [`unwrap_or`](Outcome::unwrap_or)).
//!
//! Every combinator consumes its receiver and returns a fresh value; nothing
//! is mutated in place, nothing blocks, nothing logs. `unwrap` and `expect`
//! are the one intentional partiality: they panic on `Err`, and the panic is
//! a programmer-assertion fault rather than a recoverable condition.
//!
//! ```
//! use outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::Ok(port),
//!         Err(e) => Outcome::Err(e.to_string()),
//!     }
//! }
//!
//! let port = parse_port("8080")
//!     .map(|p| p + 1)
//!     .unwrap_or(80);
//! assert_eq!(port, 8081);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::all)]

mod convert;
mod outcome;

pub use crate::outcome::Outcome;

/// Prelude for common imports
pub mod prelude {
    pub use crate::Outcome;
}
