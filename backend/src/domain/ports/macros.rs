//! Macro declaring the failure enums raised by store adapters.
//!
//! Every store failure carries a free-text `message` and is opaque to
//! clients, so the generated enum gets:
//!
//! - a snake-case constructor per variant taking `impl Into<String>`;
//! - `message()` returning the adapter's text;
//! - `From<_> for Error`, mapping every variant to an internal error so
//!   services can propagate with `?` or `map_err(Error::from)`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { message: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                }
            )*

            /// Adapter-supplied detail, never shown to clients.
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } )|* => message.as_str(),
                }
            }
        }

        impl From<$name> for $crate::domain::Error {
            fn from(error: $name) -> Self {
                $crate::domain::Error::internal(error.to_string())
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::{Error, ErrorCode};

    define_port_error! {
        pub enum ScoreStoreError {
            Offline => "score store offline: {message}",
            Corrupt => "score row unreadable: {message}",
        }
    }

    #[test]
    fn constructors_accept_str() {
        let err = ScoreStoreError::offline("pool exhausted");
        assert_eq!(err.to_string(), "score store offline: pool exhausted");
        assert_eq!(err.message(), "pool exhausted");
    }

    #[test]
    fn constructors_work_as_map_err_targets() {
        let failed: Result<(), String> = Err("bad row 7".to_owned());
        let err = failed.map_err(ScoreStoreError::corrupt).expect_err("mapped");
        assert_eq!(err, ScoreStoreError::Corrupt { message: "bad row 7".to_owned() });
    }

    #[test]
    fn store_failures_become_internal_errors() {
        let err = Error::from(ScoreStoreError::offline("refused"));
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "score store offline: refused");
    }
}
