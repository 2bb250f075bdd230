//! Qualified-name utilities.

/// Returned by [`fully_qualified_name_diff`] when no component differs.
pub const OTHER: &str = "other";

/// The right-hand component that first distinguishes `right` from `left`.
///
/// Both names are split on dots and compared component by component from
/// the right. The first right-hand component that differs is returned. If
/// the compared components (up to the length of the shorter name) are all
/// equal, returns [`OTHER`].
///
/// ```text
/// fully_qualified_name_diff("com.acme.foo.Bar", "com.acme.baz.Bar") == "baz"
/// fully_qualified_name_diff("com.acme.foo.Bar", "com.acme.baz.Qux") == "Qux"
/// fully_qualified_name_diff("foo.Bar", "com.foo.Bar")            == "other"
/// ```
///
/// Trailing dots are ignored: `"com.acme."` compares as `"com.acme"`.
pub fn fully_qualified_name_diff<'r>(left: &str, right: &'r str) -> &'r str {
    components(left)
        .zip(components(right))
        .find(|(l, r)| l != r)
        .map_or(OTHER, |(_, r)| r)
}

/// Components from the right, without the empty ones a trailing dot leaves.
fn components(name: &str) -> impl Iterator<Item = &str> {
    name.rsplit('.').skip_while(|c| c.is_empty())
}
