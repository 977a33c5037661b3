//! Text transformations: reverse, capitalize, snake_case → camelCase

/// Reverse the code-point sequence of a string.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Convert a snake_case identifier to camelCase.
///
/// Empty segments from consecutive or trailing underscores are skipped. The
/// first kept segment is lowercased, every later one capitalized — except
/// that a leading underscore promotes the first kept segment to capitalized:
/// `"hello_world"` → `"helloWorld"`, `"_hello_world"` → `"HelloWorld"`.
pub fn to_camel_case(s: &str) -> String {
    let leading_underscore = s.starts_with('_');
    let mut out = String::with_capacity(s.len());
    let mut first = true;
    for segment in s.split('_').filter(|segment| !segment.is_empty()) {
        if first {
            if leading_underscore {
                out.push_str(&capitalize(segment));
            } else {
                out.push_str(&segment.to_lowercase());
            }
            first = false;
        } else {
            out.push_str(&capitalize(segment));
        }
    }
    out
}
