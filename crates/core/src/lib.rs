//! Core helpers for adminkit
//!
//! This crate holds the pieces of the admin layer that work on arbitrary
//! host values without knowing their concrete types:
//! - Value: primitive column values
//! - Record capabilities: Object, Record, Field, Describe, DbValue
//! - Row: a record assembled at runtime
//! - Introspect: model type resolution through pointers and collections
//! - Stringify: one display label per object
//! - Tag options: `KEY:value;FLAG` parsing
//! - Error: error type shared with the web crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod introspect;
pub mod record;
pub mod row;
pub mod stringify;
pub mod tag_option;
pub mod value;

pub use error::{Error, Result};
pub use introspect::{resolve_model_type, Introspect, TypeDescriptor};
pub use record::{DbValue, Describe, Field, Object, Record};
pub use row::Row;
pub use stringify::{stringify, DISPLAY_FIELDS, PRIMARY_KEY_SEPARATOR};
pub use tag_option::{parse_tag_options, TagOptions};
pub use value::Value;
