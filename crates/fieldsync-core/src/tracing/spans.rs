//! Span definitions for the two passes: matching and import.

/// Create a matching-pass span.
#[macro_export]
macro_rules! matching_span {
    ($year:expr, $local_count:expr, $remote_count:expr) => {
        tracing::info_span!(
            "fieldsync.matching",
            year = %$year,
            local_fields = $local_count,
            remote_fields = $remote_count
        )
    };
}

/// Create an import-pass span.
#[macro_export]
macro_rules! import_span {
    ($farm_id:expr, $year:expr, $item_count:expr) => {
        tracing::info_span!(
            "fieldsync.import",
            farm_id = %$farm_id,
            year = %$year,
            items = $item_count
        )
    };
}
