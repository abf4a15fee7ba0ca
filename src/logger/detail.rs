//! Data and error payload accepted by `warn` and `error`.

use std::error::Error;

use crate::logger::error_data::{merge_error_data, ErrorInfo};
use crate::logger::record::Fields;

/// What accompanies a warning or error record.
///
/// Either shape of call (data plus error, or an error on its own) maps onto one
/// variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Detail {
    #[default]
    Empty,
    Data(Fields),
    Error(ErrorInfo),
    DataWithError { data: Fields, error: ErrorInfo },
}

impl Detail {
    /// Build from separate optional data and error arguments.
    pub fn from_parts(data: Option<Fields>, error: Option<ErrorInfo>) -> Self {
        match (data, error) {
            (None, None) => Detail::Empty,
            (Some(data), None) => Detail::Data(data),
            (None, Some(error)) => Detail::Error(error),
            (Some(data), Some(error)) => Detail::DataWithError { data, error },
        }
    }

    /// Record data with any error details merged in.
    ///
    /// A lone error is merged into an empty mapping.
    pub fn into_data(self) -> Option<Fields> {
        match self {
            Detail::Empty => None,
            Detail::Data(data) => Some(data),
            Detail::Error(error) => merge_error_data(Some(&Fields::new()), Some(&error)),
            Detail::DataWithError { data, error } => merge_error_data(Some(&data), Some(&error)),
        }
    }
}

impl From<Fields> for Detail {
    fn from(data: Fields) -> Self {
        Detail::Data(data)
    }
}

impl From<Option<Fields>> for Detail {
    fn from(data: Option<Fields>) -> Self {
        Detail::from_parts(data, None)
    }
}

impl From<ErrorInfo> for Detail {
    fn from(error: ErrorInfo) -> Self {
        Detail::Error(error)
    }
}

impl<E: Error + ?Sized> From<&E> for Detail {
    fn from(err: &E) -> Self {
        Detail::Error(ErrorInfo::from_error(err))
    }
}
