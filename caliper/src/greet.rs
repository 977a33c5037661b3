//! Greeting helpers

/// `"Hello, {name}!"`
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// `greet` with the default name.
pub fn greet_world() -> String {
    greet("World")
}
