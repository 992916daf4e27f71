//! Element types for exercising `StatusOr<T>` over awkward payloads.

use std::fmt;

/// Integer sample value.
pub const INT_ELEMENT: i32 = 42;

/// String sample value.
pub const STRING_ELEMENT: &str =
    "The Answer to the Ultimate Question of Life, the Universe, and Everything";

/// Message used with [`status_or::StatusCode::InvalidArgument`] in fixtures.
pub const ERROR_MESSAGE: &str = "Invalid argument";

/// A payload type with a canonical sample value.
pub trait Element: Clone + PartialEq + fmt::Debug {
    /// Builds the sample value.
    fn sample() -> Self;
}

impl Element for i32 {
    fn sample() -> Self {
        INT_ELEMENT
    }
}

impl Element for String {
    fn sample() -> Self {
        STRING_ELEMENT.to_owned()
    }
}

impl Element for Vec<String> {
    fn sample() -> Self {
        vec![STRING_ELEMENT.to_owned(), ERROR_MESSAGE.to_owned()]
    }
}

/// A type without a `Default` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foo {
    /// Integer field.
    pub bar: i32,
    /// String field.
    pub baz: String,
}

impl Foo {
    /// Builds a `Foo` with `value` and the sample string.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self {
            bar: value,
            baz: STRING_ELEMENT.to_owned(),
        }
    }
}

impl Element for Foo {
    fn sample() -> Self {
        Self::new(INT_ELEMENT)
    }
}

/// A type owning a heap allocation, with a hand-written deep `Clone`.
///
/// Equality compares the pointed-to values, not the allocations.
#[derive(Debug, PartialEq, Eq)]
pub struct HeapAllocatedObject {
    value: Box<i32>,
}

impl HeapAllocatedObject {
    /// Allocates a new object holding `value`.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self {
            value: Box::new(value),
        }
    }

    /// The held value.
    #[must_use]
    pub fn value(&self) -> i32 {
        *self.value
    }

    /// Address of the owned allocation, for checking independence of copies.
    #[must_use]
    pub fn address(&self) -> *const i32 {
        &raw const *self.value
    }
}

impl Clone for HeapAllocatedObject {
    fn clone(&self) -> Self {
        Self::new(*self.value)
    }
}

impl Element for HeapAllocatedObject {
    fn sample() -> Self {
        Self::new(INT_ELEMENT)
    }
}
