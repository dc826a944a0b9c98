use std::sync::Arc;

/// Parses a published route string into its ordered stop names.
///
/// The format is a dash delimited list of entries, each either
/// `EnglishName (LocalLabel)` or plain `EnglishName`. Only the text before
/// the first `(` is kept, a leading dash is allowed, empty entries are
/// dropped.
pub fn stops(route: &str) -> Vec<Arc<str>> {
    let trimmed = route.trim();
    let trimmed = trimmed.strip_prefix('-').unwrap_or(trimmed);
    trimmed
        .split('-')
        .filter_map(|entry| {
            let name = entry.split('(').next().unwrap_or(entry).trim();
            if name.is_empty() {
                None
            } else {
                Some(Arc::from(name))
            }
        })
        .collect()
}

#[test]
fn parse_plain_entries() {
    let parsed = stops("Mirpur 12 - Mirpur 10 - Kazipara - Farmgate");
    let names: Vec<&str> = parsed.iter().map(|s| s.as_ref()).collect();
    assert_eq!(names, ["Mirpur 12", "Mirpur 10", "Kazipara", "Farmgate"]);
}

#[test]
fn parse_strips_labels_and_leading_dash() {
    let parsed = stops("- Sadarghat (সদরঘাট) - Paltan (পল্টন)");
    let names: Vec<&str> = parsed.iter().map(|s| s.as_ref()).collect();
    assert_eq!(names, ["Sadarghat", "Paltan"]);
}

#[test]
fn parse_drops_empty_entries() {
    let parsed = stops("Uttara - - Banani");
    let names: Vec<&str> = parsed.iter().map(|s| s.as_ref()).collect();
    assert_eq!(names, ["Uttara", "Banani"]);
}

#[test]
fn parse_empty_string() {
    assert!(stops("").is_empty());
    assert!(stops("   ").is_empty());
}
