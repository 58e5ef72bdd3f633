//! adminkit - display, introspection and request helpers for admin interfaces
//!
//! adminkit is the glue an admin UI over an ORM needs around arbitrary host
//! record types: a label for every object, the record type behind any
//! collection, tag-option parsing, and the request-side helpers (URL
//! patching, cookie policy, locale and time hooks).
//!
//! # Quick Start
//!
//! ```
//! use adminkit::{parse_tag_options, stringify, Row};
//!
//! let order = Row::new("Order").with_primary_key("ID", 42i64);
//! assert_eq!(stringify(&order), "Order#42");
//!
//! let options = parse_tag_options("SIZE:10; REQUIRED");
//! assert_eq!(options.get("SIZE"), Some("10"));
//! assert!(options.contains("REQUIRED"));
//! ```
//!
//! # Architecture
//!
//! - `adminkit-core`: host-type-agnostic logic (stringify, model types, tags)
//! - `adminkit-web`: request-facing helpers and configuration
//!
//! Both are re-exported here.

pub use adminkit_core::*;
pub use adminkit_web::*;
