//! Model type resolution
//!
//! Admin resources are registered against a value (`&Order`, `&Vec<Order>`,
//! `&Vec<Box<Order>>`, ...) but always need the underlying record type. This
//! module describes Rust types as [`TypeDescriptor`] trees and collapses the
//! indirection layers down to that record type.
//!
//! ## Unwrapping rule
//!
//! 1. The value is passed by reference, which removes one layer.
//! 2. While the descriptor is a reference or a sequence, step to its element.
//!
//! Nesting in any order collapses: `Vec<Option<Box<[Order]>>>` resolves to
//! `Order`. Resolution never fails; a type with no indirection resolves to
//! itself.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::row::Row;
use crate::value::Value;

/// Shape of a Rust type, as far as model resolution cares
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A concrete, non-indirect type (record or scalar)
    Named(Cow<'static, str>),
    /// A pointer-like wrapper around the inner type
    Reference(Box<TypeDescriptor>),
    /// An ordered collection of the inner type
    Sequence(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Descriptor for a concrete type
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    /// Descriptor for a reference to `inner`
    pub fn reference(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Reference(Box::new(inner))
    }

    /// Descriptor for a sequence of `inner`
    pub fn sequence(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence(Box::new(inner))
    }

    /// Name of a concrete type; `None` for references and sequences
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Named(name) => Some(&**name),
            _ => None,
        }
    }

    /// Element type of a reference or sequence
    pub fn elem(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Reference(inner) | TypeDescriptor::Sequence(inner) => Some(&**inner),
            TypeDescriptor::Named(_) => None,
        }
    }

    /// Check if this is a reference or sequence
    pub fn is_indirect(&self) -> bool {
        self.elem().is_some()
    }

    /// Strip every reference and sequence layer
    ///
    /// Idempotent: the result is always `Named`.
    pub fn model_type(&self) -> TypeDescriptor {
        let mut current = self;
        while let Some(inner) = current.elem() {
            current = inner;
        }
        current.clone()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Named(name) => f.write_str(name),
            TypeDescriptor::Reference(inner) => write!(f, "&{}", inner),
            TypeDescriptor::Sequence(inner) => write!(f, "[{}]", inner),
        }
    }
}

/// Types that can describe their own shape
///
/// Record types implement this with [`impl_introspect!`](crate::impl_introspect).
pub trait Introspect {
    /// Descriptor of `Self`
    fn type_descriptor() -> TypeDescriptor;
}

/// Implement [`Introspect`] for concrete types
///
/// The descriptor carries the declared type name: module prefixes are
/// dropped, so `impl_introspect!(models::Order)` is named `Order`.
///
/// ```
/// use adminkit_core::{impl_introspect, resolve_model_type};
///
/// #[derive(Debug)]
/// struct Order;
/// impl_introspect!(Order);
///
/// let orders = vec![Box::new(Order)];
/// assert_eq!(resolve_model_type(&orders).name(), Some("Order"));
/// ```
#[macro_export]
macro_rules! impl_introspect {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::introspect::Introspect for $ty {
                fn type_descriptor() -> $crate::introspect::TypeDescriptor {
                    $crate::introspect::TypeDescriptor::named(
                        $crate::introspect::declared_name(stringify!($ty)),
                    )
                }
            }
        )*
    };
}

impl_introspect!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String, Value, Row
);

/// Strip the module path from a stringified type, keeping generic arguments
#[doc(hidden)]
pub fn declared_name(path: &'static str) -> Cow<'static, str> {
    let split = path.find('<').unwrap_or(path.len());
    let (base, generics) = path.split_at(split);
    let name = base.rsplit("::").next().unwrap_or(base).trim();
    if generics.is_empty() {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{}{}", name, generics.trim()))
    }
}

macro_rules! impl_wrapper {
    ($kind:ident => $($ty:ty),* $(,)?) => {
        $(
            impl<T: Introspect + ?Sized> Introspect for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::$kind(T::type_descriptor())
                }
            }
        )*
    };
}

impl_wrapper!(reference => &T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T: Introspect> Introspect for [T] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::type_descriptor())
    }
}

impl<T: Introspect> Introspect for Option<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::reference(T::type_descriptor())
    }
}

impl<T: Introspect> Introspect for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::type_descriptor())
    }
}

impl<T: Introspect> Introspect for VecDeque<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::type_descriptor())
    }
}

impl<T: Introspect, const N: usize> Introspect for [T; N] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::type_descriptor())
    }
}

/// Resolve the record type underlying `value`
///
/// The borrow removes one reference layer; every remaining reference or
/// sequence layer is then stripped.
pub fn resolve_model_type<T: Introspect + ?Sized>(_value: &T) -> TypeDescriptor {
    T::type_descriptor().model_type()
}
