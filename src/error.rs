//! The error taxonomy shared by the builder and its collaborators.
//!
//! Built with `error-chain` so that a failure deep in a `DescriptorsIndex`
//! implementation keeps both its low-level cause and the operation the
//! builder was attempting when it surfaced, matching the "reported with the
//! originating operation preserved in a chain" requirement on `GetFailed` /
//! `SetFailed` / `AppendFailed`.

error_chain::error_chain! {
    errors {
        /// A null/invalid input handle, a result slot already set, or a
        /// negative/too-large recursion depth at entry.
        InvalidArgument(detail: String) {
            description("invalid argument")
            display("invalid argument: {}", detail)
        }
        /// A destination output already carries a value. Also used when a
        /// second self-parented descriptor appears under the fatal policy.
        AlreadySet(detail: String) {
            description("destination already set")
            display("already set: {}", detail)
        }
        /// The recursion bound was exceeded, or an identifier did not fit
        /// in 32 bits.
        OutOfBounds(detail: String) {
            description("operation exceeded a hard bound")
            display("out of bounds: {}", detail)
        }
        /// An expected value was absent where an invariant requires it.
        Missing(detail: String) {
            description("expected value is missing")
            display("missing: {}", detail)
        }
        /// A collaborator's constructor returned an error.
        InitializationFailed(detail: String) {
            description("collaborator initialization failed")
            display("initialization failed: {}", detail)
        }
        /// A collaborator `get`-shaped operation failed.
        GetFailed(detail: String) {
            description("collaborator get operation failed")
            display("get failed: {}", detail)
        }
        /// A collaborator `set`-shaped operation failed.
        SetFailed(detail: String) {
            description("collaborator set operation failed")
            display("set failed: {}", detail)
        }
        /// A collaborator `append`-shaped operation failed.
        AppendFailed(detail: String) {
            description("collaborator append operation failed")
            display("append failed: {}", detail)
        }
        /// Allocation failed.
        OutOfMemory {
            description("out of memory")
            display("out of memory")
        }
    }
}
