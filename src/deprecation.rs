//! Runtime deprecation warnings for renamed APIs
//!
//! [`Deprecated`] wraps a callable so each invocation emits an advisory
//! warning naming the old/new API pair, then delegates with arguments and
//! return value untouched. The crate never configures logging itself:
//! warnings go through the `log` facade, and a host that wants them visible
//! opts in by installing a backend during its own startup.

use std::sync::Arc;

/// Delivery seam for deprecation warnings.
///
/// Production code uses [`LogSink`]; tests inject a recording sink to
/// observe emissions.
pub trait WarningSink {
    /// Deliver one deprecation notice.
    fn deprecation(&self, notice: &str);
}

/// Forwards warnings to `log::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn deprecation(&self, notice: &str) {
        log::warn!(target: "figbridge::deprecation", "{notice}");
    }
}

/// A callable marked as deprecated.
///
/// Calling convention is preserved: [`Deprecated::call`] passes arguments
/// through and returns exactly what the wrapped callable returns.
///
/// # Example
///
/// ```
/// use figbridge::Deprecated;
///
/// let double = Deprecated::new(|x: i32| x * 2, "twice", "double");
/// assert_eq!(double.call(21), 42);
/// ```
pub struct Deprecated<F> {
    inner: F,
    old_name: String,
    new_name: String,
    sink: Arc<dyn WarningSink + Send + Sync>,
}

impl<F> Deprecated<F> {
    /// Mark `inner` as deprecated under its old name, pointing callers at
    /// the new one. Warnings go to the `log` facade.
    pub fn new(inner: F, old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self::with_sink(inner, old_name, new_name, Arc::new(LogSink))
    }

    /// Same as [`Deprecated::new`] with an explicit warning sink.
    pub fn with_sink(
        inner: F,
        old_name: impl Into<String>,
        new_name: impl Into<String>,
        sink: Arc<dyn WarningSink + Send + Sync>,
    ) -> Self {
        Self {
            inner,
            old_name: old_name.into(),
            new_name: new_name.into(),
            sink,
        }
    }

    /// Old name callers are still using.
    pub fn old_name(&self) -> &str {
        &self.old_name
    }

    /// Replacement name callers should migrate to.
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    /// The warning text emitted on every call.
    pub fn notice(&self) -> String {
        format!(
            "{} is deprecated and will be removed. Use {} instead",
            self.old_name, self.new_name
        )
    }

    /// Prepend the deprecation note to the wrapped callable's documentation
    /// text.
    pub fn annotate_doc(&self, doc: &str) -> String {
        format!(
            "*{} is deprecated: use {} instead*\n\n{}",
            self.old_name, self.new_name, doc
        )
    }

    /// Invoke the wrapped callable, emitting one deprecation warning first.
    ///
    /// The warning is advisory; it never blocks or alters the delegated
    /// call.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.sink.deprecation(&self.notice());
        (self.inner)(args)
    }
}
