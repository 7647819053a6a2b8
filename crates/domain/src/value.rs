// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared shape of the string-backed value objects.

/// Declares an immutable string value object guarded by a validation predicate.
///
/// The generated type can only be obtained through `new`, which rejects any
/// value failing the predicate with the type's `MESSAGE_CONSTRAINTS`.
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $name:ident {
            field: $field:literal,
            constraints: $constraints:literal,
            validator: $validator:path $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            value: String,
        }

        impl $name {
            /// Describes the values this type accepts.
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            /// Returns true if `value` satisfies this type's constraints.
            #[must_use]
            pub fn is_valid(value: &str) -> bool {
                $validator(value)
            }

            #[doc = concat!("Creates a new `", stringify!($name), "` from a validated value.")]
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidField` carrying `MESSAGE_CONSTRAINTS`
            /// if the value is not valid.
            pub fn new(value: &str) -> Result<Self, $crate::error::DomainError> {
                if !Self::is_valid(value) {
                    return Err($crate::error::DomainError::invalid(
                        $field,
                        Self::MESSAGE_CONSTRAINTS,
                    ));
                }
                Ok(Self {
                    value: value.to_string(),
                })
            }

            /// Returns the wrapped value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.value
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }
    };
}

pub(crate) use validated_string;
