//! "Attribute starts with" selector predicate

/// True if any attribute name on the element starts with `prefix`
pub fn attr_starts_with<'a, I>(attribute_names: I, prefix: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    attribute_names.into_iter().any(|name| name.starts_with(prefix))
}
