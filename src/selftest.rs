//! A scripted check of the tree against a known sequence of inserts, reported one line per
//! check in the form `<what we got> ... CORRECT` or `<what we got> ... ERROR, expected <x>`.

use std::fmt;

use crate::tree::Tree;

/// Inserted in this order, with `2` repeated to exercise duplicate handling.
pub const SCENARIO: [i32; 6] = [4, 1, 3, 5, 2, 2];

/// What `locate` reports for an item that isn't in the tree.
const NOT_FOUND: &str = "nothing";

/// One observed value next to the value it should have been.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    /// Printed before the observed value, e.g. `"size: "`.
    pub label: &'static str,
    /// What the tree actually reported.
    pub actual: String,
    /// What it should have reported.
    pub expected: String,
}

impl Check {
    fn new(label: &'static str, actual: impl ToString, expected: &str) -> Self {
        Self {
            label,
            actual: actual.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Whether the observed value matched.
    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} ... ", self.label, self.actual)?;
        if self.passed() {
            f.write_str("CORRECT")
        } else {
            write!(f, "ERROR, expected {}", self.expected)
        }
    }
}

/// Builds a tree from [`SCENARIO`] and checks its rendering, size, height and lookups.
///
/// ```
/// let checks = bst::selftest::run();
/// assert!(checks.iter().all(|check| check.passed()));
/// ```
pub fn run() -> Vec<Check> {
    let tree: Tree<i32> = SCENARIO.into_iter().collect();
    let locate = |item: i32| {
        tree.locate(&item)
            .map_or_else(|| NOT_FOUND.to_string(), |node| node.to_string())
    };

    let checks = vec![
        Check::new("", &tree, "< 1  2  3  4  5 >"),
        Check::new("size: ", tree.size(), "5"),
        Check::new("height: ", tree.height(), "3"),
        Check::new("locate(1) returns ", locate(1), "1"),
        Check::new("locate(6) returns ", locate(6), NOT_FOUND),
    ];
    for check in checks.iter().filter(|check| !check.passed()) {
        log::warn!("self-test failed: {}", check);
    }

    checks
}
