//! Macros for declaring state ids.

/// Generate a `StateId` enum with the derives a table needs.
///
/// # Example
///
/// ```
/// use statetable::core::StateId;
/// use statetable::state_ids;
///
/// state_ids! {
///     pub enum TurnstileState {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// assert_eq!(TurnstileState::Locked.name(), "Locked");
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::StateId::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    state_ids! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_ids_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.to_string(), "Complete");
    }

    #[test]
    fn state_ids_supports_visibility() {
        state_ids! {
            /// Documented ids
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn generated_ids_serialize_by_name() {
        let json = serde_json::to_string(&TestState::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");
    }
}
