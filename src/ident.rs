//! Element identifiers for rendered plot objects
//!
//! Every plot object that lands in generated markup needs a DOM element id
//! unique within the rendering process. Ids are drawn from a process-global
//! monotonic counter at registration time, so a sequence number is never
//! reused during one process lifetime. The rendered token also embeds the
//! process id, so output from two processes sharing a notebook does not
//! collide.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Registration id for one plot object.
///
/// The wrapped sequence number is assigned once by [`ElementId::next`], and
/// the same `ElementId` always renders the same token. Uniqueness holds only
/// within the current process.
///
/// # Example
///
/// ```
/// use figbridge::ElementId;
///
/// let id = ElementId::next();
/// let axes = id.css_id(Some("axes"));
/// assert!(axes.ends_with("axes"));
/// assert_eq!(id.css_id(Some("axes")), axes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Allocate the next id from the process-global counter.
    pub fn next() -> Self {
        // Relaxed: callers need uniqueness, never ordering.
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw sequence number.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Render the DOM element id token: decimal process id, decimal sequence
    /// number, then the optional suffix, concatenated without separators.
    pub fn css_id(&self, suffix: Option<&str>) -> String {
        let mut token = format!("{}{}", std::process::id(), self.0);
        if let Some(suffix) = suffix {
            token.push_str(suffix);
        }
        token
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_id(None))
    }
}
