/// Emits a `tracing::debug!` event if the `tracing` feature is enabled and
/// expands to nothing otherwise.
macro_rules! debug_log {
    ( $( $arg:tt )* ) => {
        #[cfg(feature = "tracing")]
        tracing::debug!( $( $arg )* );
    };
}
