use std::collections::HashMap;

/// Convert heading text into a URL-fragment-safe identifier.
///
/// Lowercases, trims, turns whitespace runs into single hyphens, strips
/// everything that is not an ASCII letter, digit or hyphen, then collapses
/// hyphen runs. Idempotent: applying it twice gives the same result.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_hyphen = false;

    for c in text.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            if !last_hyphen && !out.is_empty() {
                out.push('-');
                last_hyphen = true;
            }
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
            last_hyphen = false;
        }
        // Everything else is dropped
    }

    // A trailing hyphen can remain when the text ends in stripped characters
    while out.ends_with('-') {
        out.pop();
    }

    out
}

/// Assigns unique anchor ids to headings in document order.
///
/// The first heading with a given slug gets the bare slug; duplicates get a
/// deterministic numeric suffix. Text whose strict slug is empty falls back
/// to ASCII transliteration, and finally to a position-qualified id, so
/// non-Latin headings still produce a resolvable anchor. Re-running over
/// the same document reproduces identical ids.
#[derive(Debug, Default)]
pub struct Anchors {
    seen: HashMap<String, usize>,
}

impl Anchors {
    pub fn new() -> Self {
        Anchors::default()
    }

    /// Assign the anchor id for the heading at `position` in the document
    pub fn assign(&mut self, text: &str, position: usize) -> String {
        let mut base = slugify(text);

        if base.is_empty() {
            // Transliterate non-ASCII text where possible
            base = slugify(&::slug::slugify(text));
        }
        if base.is_empty() {
            base = format!("heading-{}", position);
        }

        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            base
        } else {
            format!("{}-{}", base, *count)
        }
    }
}
