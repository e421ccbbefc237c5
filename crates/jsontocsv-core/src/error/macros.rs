//! Error macros for jsontocsv

/// Macro for creating invalid input errors
#[macro_export]
macro_rules! bail_invalid_input {
    ($reason:expr) => {
        return Err($crate::error::ConvertError::invalid_input($reason))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ConvertError::UsageError($msg.to_string()))
    };
}
