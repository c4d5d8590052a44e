/// Parse a comma separated list of target base URLs.
///
/// Entries are trimmed and empty entries dropped; order is preserved.
/// No URL validation happens here: a malformed entry surfaces as a fetch
/// error for that target on the first poll cycle.
pub fn parse_targets(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
