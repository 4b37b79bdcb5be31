use std::fmt;

/// A ready-made callback value for routes.
///
/// The matching engine treats the callback as fully opaque, so any `T` works
/// as a [`Route`](crate::Route) callback. `Callback` covers the common shape a
/// dispatch layer wants: either a direct handler value, or a named reference
/// (`"Controller:action"` style) resolved at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callback<H> {
    /// A handler value dispatched as-is.
    Direct(H),
    /// A reference to a handler, resolved by the dispatch layer.
    Named { class: String, method: String },
}

impl<H> Callback<H> {
    /// Parses a `"Class:method"` reference into [`Callback::Named`].
    ///
    /// Returns `None` when the separator is missing or either side is empty.
    pub fn parse_named(reference: &str) -> Option<Self> {
        let (class, method) = reference.split_once(':')?;
        if class.is_empty() || method.is_empty() {
            return None;
        }
        Some(Self::Named { class: class.to_string(), method: method.to_string() })
    }
}

impl<H> fmt::Display for Callback<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("<direct handler>"),
            Self::Named { class, method } => write!(f, "{class}:{method}"),
        }
    }
}
