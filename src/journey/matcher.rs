/// Resolves a free text location to its position in a stop sequence.
///
/// A case-insensitive exact match always wins; otherwise the first stop
/// containing the query as a substring is taken. Substring matching is
/// ambiguous on purpose ("Mirpur" hits "Mirpur 1" before "Mirpur 10"), the
/// lowest index wins.
pub fn find_stop_index<S: AsRef<str>>(stops: &[S], query: &str) -> Option<usize> {
    if query.is_empty() {
        return None;
    }
    let normalized = query.to_lowercase();

    if let Some(index) = stops
        .iter()
        .position(|stop| stop.as_ref().to_lowercase() == normalized)
    {
        return Some(index);
    }

    stops
        .iter()
        .position(|stop| stop.as_ref().to_lowercase().contains(&normalized))
}
