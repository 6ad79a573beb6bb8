// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Edge Type Descriptors
//!
//! A minimal structural type system for validating that a producer's declared
//! output type can flow into a consumer's declared input type. Mirrors Python's
//! `typing.get_origin`/`get_args` walk: a `Generic` carries an origin name (e.g.
//! `"List"`, `"Dict"`) plus type arguments, compared recursively with `Any`
//! acting as a wildcard at any position.

use std::fmt;

/// A declared edge type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// Matches anything, and is matched by anything.
    Any,
    /// A plain named type, e.g. `"str"`, `"int"`, `"DataFrame"`.
    Named(String),
    /// A parameterized type, e.g. `List[str]` as `Generic { origin: "List",
    /// args: vec![Named("str")] }`.
    Generic {
        origin: String,
        args: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    pub fn generic(origin: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Generic {
            origin: origin.into(),
            args,
        }
    }

    /// Returns whether a value declared as `output` may be delivered to an
    /// input declared as `input`.
    ///
    /// `Any` on either side always matches. Two `Generic`s match only if their
    /// origins are equal and every argument pair is compatible in turn (also
    /// wildcarded by `Any`). Two `Named`s match only if equal.
    pub fn are_compatible(output: &TypeDescriptor, input: &TypeDescriptor) -> bool {
        match (output, input) {
            (TypeDescriptor::Any, _) | (_, TypeDescriptor::Any) => true,
            (TypeDescriptor::Named(a), TypeDescriptor::Named(b)) => a == b,
            (
                TypeDescriptor::Generic {
                    origin: o1,
                    args: a1,
                },
                TypeDescriptor::Generic {
                    origin: o2,
                    args: a2,
                },
            ) => {
                o1 == o2
                    && a1.len() == a2.len()
                    && a1.iter().zip(a2.iter()).all(|(x, y)| Self::are_compatible(x, y))
            }
            _ => false,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Any => write!(f, "Any"),
            TypeDescriptor::Named(n) => write!(f, "{n}"),
            TypeDescriptor::Generic { origin, args } => {
                write!(f, "{origin}[")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, "]")
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_type() -> impl Strategy<Value = TypeDescriptor> {
        let leaf = prop_oneof![
            Just(TypeDescriptor::Any),
            "[a-z]{1,8}".prop_map(TypeDescriptor::named),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            ("[A-Z][a-z]{0,6}", prop::collection::vec(inner, 0..4))
                .prop_map(|(origin, args)| TypeDescriptor::generic(origin, args))
        })
    }

    proptest! {
        /// Any type is compatible with itself.
        #[test]
        fn compatibility_is_reflexive(t in arb_type()) {
            prop_assert!(TypeDescriptor::are_compatible(&t, &t));
        }

        /// `Any` on either side always matches, regardless of the other side.
        #[test]
        fn any_is_a_universal_wildcard(t in arb_type()) {
            prop_assert!(TypeDescriptor::are_compatible(&TypeDescriptor::Any, &t));
            prop_assert!(TypeDescriptor::are_compatible(&t, &TypeDescriptor::Any));
        }

        /// Compatibility between two `Named`s depends only on string equality.
        #[test]
        fn named_compatibility_matches_string_equality(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
            let expected = a == b;
            prop_assert_eq!(
                TypeDescriptor::are_compatible(&TypeDescriptor::named(&a), &TypeDescriptor::named(&b)),
                expected
            );
        }
    }
}
