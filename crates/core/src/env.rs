//! Helpers for interpreting environment-provided settings.

/// Whether a flag value counts as "set".
///
/// Any non-blank value enables the flag, matching how scheduled job runners
/// usually export switches (`DEBUG=1`, `DEBUG=true`, `DEBUG=yes`).
pub fn is_truthy(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Return the first candidate that is present and non-blank.
///
/// Used to resolve settings that can come from several variables, where the
/// earlier names take precedence.
pub fn first_non_empty<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}
