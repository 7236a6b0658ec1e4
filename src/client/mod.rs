//! Requester and resource client
//!
//! [`HttpRequester`] turns `(method, path, body)` triples into HTTP calls
//! against the configured base URL, running every call through the retry
//! executor. [`Supacrud`] is the convenience layer on top, mapping CRUD and
//! RPC verbs onto PostgREST path conventions.
//!
//! The [`Requester`] trait is the seam between the two: tests (and anything
//! else that wants to) can hand [`Supacrud`] a scripted implementation
//! instead of a live transport.

mod requester;
mod resource;

pub use requester::{HttpRequester, Requester};
pub use resource::Supacrud;
