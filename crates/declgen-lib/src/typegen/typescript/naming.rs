//! Name derivation for emitted declarations.

use std::borrow::Cow;

use declgen_core::utils::strip_namespace;

/// Name of `qualified` as seen from inside `namespace`.
///
/// Names outside the namespace are kept fully qualified.
pub(crate) fn relative_name<'a>(qualified: &'a str, namespace: &str) -> &'a str {
    strip_namespace(qualified, namespace).unwrap_or(qualified)
}

/// Positional name for a parameter the declaration left unnamed.
///
/// `a` through `z`, then `p26`, `p27`, ...
pub(crate) fn synthesized_param_name(index: usize) -> Cow<'static, str> {
    const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
    match ALPHABET.get(index..index + 1) {
        Some(letter) => Cow::Borrowed(letter),
        None => Cow::Owned(format!("p{index}")),
    }
}

/// Property key, quoted when it is not a plain identifier.
pub(crate) fn property_key(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'")))
    }
}

pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_name_strips_whole_segments() {
        assert_eq!(relative_name("ns.Foo", "ns"), "Foo");
        assert_eq!(relative_name("ns.a.Foo", "ns"), "a.Foo");
        assert_eq!(relative_name("nsx.Foo", "ns"), "nsx.Foo");
        assert_eq!(relative_name("other.Foo", "ns"), "other.Foo");
        assert_eq!(relative_name("Foo", ""), "Foo");
    }

    #[test]
    fn synthesized_names() {
        assert_eq!(synthesized_param_name(0), "a");
        assert_eq!(synthesized_param_name(2), "c");
        assert_eq!(synthesized_param_name(25), "z");
        assert_eq!(synthesized_param_name(26), "p26");
    }

    #[test]
    fn property_keys() {
        assert_eq!(property_key("foo_1"), "foo_1");
        assert_eq!(property_key("$el"), "$el");
        assert_eq!(property_key("data-id"), "'data-id'");
        assert_eq!(property_key("1st"), "'1st'");
        assert_eq!(property_key("it's"), r"'it\'s'");
    }
}
