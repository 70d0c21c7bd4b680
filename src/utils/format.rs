//! Formatting utilities for counts, slugs, and other display values.

/// Turn a URL slug into a display title (`"main-courses"` -> `"Main Courses"`).
pub fn humanize_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an integer with thousands separators (e.g., "2,862").
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Singular/plural noun phrase (e.g., "1 image", "24 images").
pub fn pluralize(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", format_count(n as u64), noun)
    }
}

/// Format a 0-based position as a 1-based counter (e.g., "3 / 24").
pub fn format_position(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}
