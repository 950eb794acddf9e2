//! Console output helpers shared by the demo binaries.

use colored::Colorize;
use itertools::Itertools;
use std::fmt::Display;

/// Render a section header like `=== Title ===`.
pub fn header(title: &str) -> String {
    format!("=== {} ===", title)
}

pub fn section(title: &str) {
    println!("{}", header(title).bold());
}

pub fn status_ok(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn status_warn(message: &str) {
    println!("{} {}", "!".yellow(), message);
}

/// Space-separated rendering of a sequence, e.g. `11 12 13 14 15`.
pub fn joined<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().join(" ")
}

/// Numbered "Key Points" list printed at the end of each demo.
pub fn key_points(points: &[&str]) {
    println!("\n{}", header("Key Points").bold());
    for (i, point) in points.iter().enumerate() {
        println!("{}. {}", i + 1, point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        assert_eq!(header("Variant"), "=== Variant ===");
    }

    #[test]
    fn test_joined() {
        assert_eq!(joined(vec![11, 12, 13]), "11 12 13");
        assert_eq!(joined(Vec::<i32>::new()), "");
        assert_eq!(joined(["cherry", "date"]), "cherry date");
    }
}
