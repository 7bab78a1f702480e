//! # ipsift Core
//!
//! The five stages of the address pipeline, run strictly in sequence:
//!
//! * **[`generate`]**: random private and public IPv4 address strings.
//! * **[`classify`]**: private-vs-public membership for a dotted quad.
//! * **[`document`]**: the persisted JSON document and its (de)serialization.
//! * **[`store`]**: write, re-read and delete the transient artifact.
//! * **[`extract`]**: sift address-shaped substrings back out of raw text.
//!
//! [`pipeline`] drives the stages and owns the abort-on-first-failure policy.

pub mod classify;
pub mod document;
pub mod extract;
pub mod generate;
pub mod pipeline;
pub mod store;
