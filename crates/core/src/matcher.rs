//! Lenient comparison of a recognized transcript against the phrase a lesson
//! item expects.

/// Lower-cases and trims a phrase the way both sides of a comparison are
/// prepared.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns true when the transcript equals the expected phrase or contains it.
///
/// Both sides are normalized first. A verbose answer such as "that is a cat"
/// is accepted for "cat". There is no fuzzy matching: "cap" never matches "cat".
#[must_use]
pub fn matches(transcript: &str, expected: &str) -> bool {
    let transcript = normalize(transcript);
    let expected = normalize(expected);
    if transcript.is_empty() {
        return expected.is_empty();
    }
    transcript == expected || transcript.contains(&expected)
}
