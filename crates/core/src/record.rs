//! Capability traits for host values
//!
//! The admin layer never knows the concrete record types it renders. It sees
//! every host value through [`Object`], and asks that value for optional
//! capabilities from a small closed set:
//!
//! | Capability | Accessor | Meaning |
//! |------------|----------|---------|
//! | [`Describe`] | [`Object::as_describe`] | value renders its own label |
//! | [`Record`] | [`Object::as_record`] | value is a row with named fields |
//! | [`DbValue`] | [`Field::as_db_value`] | field reduces itself to a [`Value`] |
//!
//! Capability absence is a normal branch, never an error.
//!
//! Smart pointers (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`) delegate to their
//! pointee, so one layer of indirection is always transparent.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::Result;
use crate::value::Value;

/// A value that renders its own display label
pub trait Describe {
    /// The label for this value
    fn describe(&self) -> String;
}

/// A field value that knows how to reduce itself to a primitive
pub trait DbValue {
    /// Reduce to a primitive value
    ///
    /// # Errors
    ///
    /// Implementations return an error when the reduction is not possible;
    /// callers fall back to formatting the field directly.
    fn db_value(&self) -> Result<Value>;
}

/// The current value of one field of a record
pub trait Field {
    /// Format the field value as label text
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Whether the field holds its zero/default value
    fn is_zero(&self) -> bool;

    /// Primitive-reduction capability, if this field type has one
    fn as_db_value(&self) -> Option<&dyn DbValue> {
        None
    }
}

impl fmt::Display for dyn Field + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_text(f)
    }
}

/// Schema view of a record type
///
/// This is the metadata provider the stringifier queries. Implementations
/// must be read-only; every method may be called concurrently.
pub trait Record {
    /// Declared name of the record type (e.g. `"Order"`)
    fn model_name(&self) -> &str;

    /// Look up a field by its exact, case-sensitive name
    fn field(&self, name: &str) -> Option<&dyn Field>;

    /// The designated primary-key field, if the type has one
    fn primary_key(&self) -> Option<&dyn Field>;

    /// Whether the primary key is absent or in its zero state
    fn is_primary_key_zero(&self) -> bool {
        self.primary_key().map_or(true, |pk| pk.is_zero())
    }
}

/// Any host value the admin layer can render
pub trait Object: fmt::Debug {
    /// Self-description capability
    fn as_describe(&self) -> Option<&dyn Describe> {
        None
    }

    /// Record capability
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    /// Format the value itself, with no capability involved
    ///
    /// Defaults to the `Debug` representation; scalars use `Display`.
    fn fmt_raw(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ============================================================================
// Scalar implementations
// ============================================================================

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Field for $ty {
                fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }

                fn is_zero(&self) -> bool {
                    *self == <$ty>::default()
                }
            }

            impl Object for $ty {
                fn fmt_raw(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_scalar!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String);

impl Field for str {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Object for str {
    fn fmt_raw(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl DbValue for Value {
    fn db_value(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl Field for Value {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }

    fn is_zero(&self) -> bool {
        Value::is_zero(self)
    }

    fn as_db_value(&self) -> Option<&dyn DbValue> {
        Some(self)
    }
}

impl Object for Value {
    fn fmt_raw(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Nullable field: `None` is the zero state and renders as `null`
impl<T: Field> Field for Option<T> {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(inner) => inner.fmt_text(f),
            None => f.write_str("null"),
        }
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn as_db_value(&self) -> Option<&dyn DbValue> {
        self.as_ref().and_then(Field::as_db_value)
    }
}

impl<T: Object> Object for Option<T> {
    fn as_describe(&self) -> Option<&dyn Describe> {
        self.as_ref().and_then(Object::as_describe)
    }

    fn as_record(&self) -> Option<&dyn Record> {
        self.as_ref().and_then(Object::as_record)
    }

    fn fmt_raw(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(inner) => inner.fmt_raw(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: fmt::Debug> Object for Vec<T> {}

impl<T: fmt::Debug> Object for [T] {}

// ============================================================================
// Pointer implementations: one layer of indirection is transparent
// ============================================================================

macro_rules! impl_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Object + ?Sized> Object for $ptr<T> {
                fn as_describe(&self) -> Option<&dyn Describe> {
                    (**self).as_describe()
                }

                fn as_record(&self) -> Option<&dyn Record> {
                    (**self).as_record()
                }

                fn fmt_raw(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).fmt_raw(f)
                }
            }

            impl<T: Field + ?Sized> Field for $ptr<T> {
                fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).fmt_text(f)
                }

                fn is_zero(&self) -> bool {
                    (**self).is_zero()
                }

                fn as_db_value(&self) -> Option<&dyn DbValue> {
                    (**self).as_db_value()
                }
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);

impl<T: Object + ?Sized> Object for &T {
    fn as_describe(&self) -> Option<&dyn Describe> {
        (**self).as_describe()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }

    fn fmt_raw(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_raw(f)
    }
}

impl<T: Field + ?Sized> Field for &T {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_text(f)
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn as_db_value(&self) -> Option<&dyn DbValue> {
        (**self).as_db_value()
    }
}
