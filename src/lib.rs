//! # Reglookup - Company registration number lookup helper
//!
//! This library resolves company registration numbers against a bundled
//! lookup table of registration metadata, for enriching procurement data
//! with the registration date of the winning company.
//!
//! ## Overview
//!
//! Callers hand over a credential pair and a list of registration numbers;
//! every requested number comes back mapped to its known metadata record,
//! or to an empty record when the table holds nothing for it. Resolution is
//! a single deterministic pass over an immutable in-memory table — there is
//! no persistence, no caching, and no live registry connection. The
//! credentials exist for interface compatibility with credentialed registry
//! clients and have no effect on resolution.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - `registry`: the bundled registration table and its record type
//! - `request`: decoding and validation of the JSON input payload
//! - `resolver`: single-pass resolution of numbers against the table
//!
//! ## Example Usage
//!
//! ```rust
//! use reglookup::registry::Registry;
//! use reglookup::resolver::{Credentials, LookupResolver};
//!
//! let resolver = LookupResolver::new(
//!     Registry::bundled(),
//!     Credentials {
//!         username: "user".to_string(),
//!         password: "secret".to_string(),
//!     },
//! );
//!
//! let results = resolver.resolve(&["40003026637".to_string()]);
//! assert!(results.contains_key("40003026637"));
//! ```
//!
//! ## Error Handling
//!
//! Boundary decoding returns typed `request::RequestError` values; the
//! binary surfaces them through `color_eyre` reports. Resolution itself is
//! infallible — unknown numbers are not errors, they resolve to empty
//! records.

pub mod registry;
pub mod request;
pub mod resolver;
