//! Boxed values: an immutable value behind an identity-bearing handle.
//!
//! A [`Boxed`] owns its value through an `Rc`, so every construction
//! allocates a new instance with its own identity. [`Boxed::alias`] hands out
//! a second handle to the *same* instance. Rebinding a name to a fresh
//! `Boxed` never touches the instance the name used to denote.
//!
//! Two comparisons are exposed and never conflated:
//! - [`Boxed::value_eq`] (also `==`) compares the wrapped values.
//! - [`Boxed::identity_eq`] compares the instances.

use std::fmt;
use std::rc::Rc;

/// An immutable value wrapped in a reference-identity-bearing container.
#[derive(Debug)]
pub struct Boxed<T> {
    inner: Rc<T>,
}

/// A boxed 64-bit signed integer.
pub type BoxedNumber = Boxed<i64>;

impl<T> Boxed<T> {
    /// Construct a new instance. Never shares identity with any other.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }

    /// Bind a second handle to this same instance.
    pub fn alias(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Borrow the wrapped value.
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// True when both handles denote the same instance.
    pub fn identity_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this instance.
    pub fn alias_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<T: PartialEq> Boxed<T> {
    /// True when the wrapped values are equal, regardless of identity.
    pub fn value_eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<T: Copy> Boxed<T> {
    /// Copy the wrapped value out.
    pub fn value(&self) -> T {
        *self.inner
    }
}

impl<T: PartialEq> PartialEq for Boxed<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

impl<T: Eq> Eq for Boxed<T> {}

impl<T: fmt::Display> fmt::Display for Boxed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl<T> From<T> for Boxed<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Separately constructed instances are never identical, even when equal.
        #[test]
        fn prop_fresh_instances_differ_in_identity(n in any::<i64>()) {
            let v1 = BoxedNumber::new(n);
            let v2 = BoxedNumber::new(n);
            prop_assert!(v1.value_eq(&v2));
            prop_assert!(!v1.identity_eq(&v2));
        }

        /// An alias always agrees on both value and identity.
        #[test]
        fn prop_alias_is_identical(n in any::<i64>()) {
            let a = BoxedNumber::new(n);
            let b = a.alias();
            prop_assert!(a.value_eq(&b));
            prop_assert!(a.identity_eq(&b));
        }

        /// Rebinding one name leaves the other name's value intact.
        #[test]
        fn prop_rebind_is_non_destructive(x in any::<i64>(), y in any::<i64>()) {
            let a = BoxedNumber::new(x);
            let mut b = a.alias();
            prop_assert_eq!(b.value(), x);
            b = BoxedNumber::new(y);
            prop_assert_eq!(a.value(), x);
            prop_assert_eq!(b.value(), y);
            prop_assert!(!a.identity_eq(&b));
        }
    }
}
