//! Qualified-name helpers.
//!
//! Qualified names are dot-separated paths (`a.b.C`). The empty string is the
//! global namespace.

/// Everything before the last segment, or `""` for a single-segment name.
///
/// # Examples
/// ```
/// use declgen_core::utils::parent_of;
/// assert_eq!(parent_of("a.b.C"), "a.b");
/// assert_eq!(parent_of("C"), "");
/// ```
pub fn parent_of(name: &str) -> &str {
    name.rfind('.').map_or("", |dot| &name[..dot])
}

/// The last path segment.
///
/// # Examples
/// ```
/// use declgen_core::utils::last_segment;
/// assert_eq!(last_segment("a.b.C"), "C");
/// assert_eq!(last_segment("C"), "C");
/// ```
pub fn last_segment(name: &str) -> &str {
    name.rfind('.').map_or(name, |dot| &name[dot + 1..])
}

/// Strip `namespace.` from the front of `name`.
///
/// Only whole segments are stripped, so `ab.C` is not inside namespace `a`.
/// Returns `None` when `name` does not live under `namespace`.
pub fn strip_namespace<'a>(name: &'a str, namespace: &str) -> Option<&'a str> {
    if namespace.is_empty() {
        return Some(name);
    }
    name.strip_prefix(namespace)?.strip_prefix('.')
}

/// Whether `name` is exactly one segment below `namespace`.
///
/// # Examples
/// ```
/// use declgen_core::utils::is_direct_child;
/// assert!(is_direct_child("ns.Foo.bar", "ns.Foo"));
/// assert!(!is_direct_child("ns.Foo.bar.baz", "ns.Foo"));
/// assert!(!is_direct_child("ns.Foo", "ns.Foo"));
/// ```
pub fn is_direct_child(name: &str, namespace: &str) -> bool {
    strip_namespace(name, namespace).is_some_and(|tail| !tail.is_empty() && !tail.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_respects_segment_boundary() {
        assert_eq!(strip_namespace("ns.Foo", "ns"), Some("Foo"));
        assert_eq!(strip_namespace("nsx.Foo", "ns"), None);
        assert_eq!(strip_namespace("ns", "ns"), None);
        assert_eq!(strip_namespace("Foo", ""), Some("Foo"));
    }

    #[test]
    fn direct_child_of_global_namespace() {
        assert!(is_direct_child("Foo", ""));
        assert!(!is_direct_child("a.Foo", ""));
    }
}
