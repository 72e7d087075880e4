//! # fieldsync-actions
//!
//! Executes the operator's choice for each review item against an
//! [`IFieldStore`](fieldsync_core::traits::IFieldStore). Calls are awaited
//! one at a time and the first persistence error aborts the batch.

pub mod processor;
pub mod records;

pub use processor::{ActionProcessor, FieldAddedCallback};
