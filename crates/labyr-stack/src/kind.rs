//! Naming a stack backing as a configuration value.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Which [`Stack`](crate::Stack) implementation backs a traversal.
///
/// Purely a storage/performance choice: every kind yields the same
/// reachability verdicts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackKind {
    /// [`ArrayStack`](crate::ArrayStack).
    #[default]
    Array,
    /// [`LinkedStack`](crate::LinkedStack).
    Linked,
    /// [`DequeStack`](crate::DequeStack).
    Deque,
}

impl StackKind {
    /// Every kind, in comparison-report order.
    pub const ALL: [StackKind; 3] = [Self::Array, Self::Linked, Self::Deque];

    /// Canonical name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Linked => "linked_list",
            Self::Deque => "std",
        }
    }
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the canonical names plus `vec`, `linked`, `deque` and
/// `vecdeque`, case-insensitively.
impl FromStr for StackKind {
    type Err = UnknownStackKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" | "vec" => Ok(Self::Array),
            "linked_list" | "linked" => Ok(Self::Linked),
            "std" | "deque" | "vecdeque" => Ok(Self::Deque),
            _ => Err(UnknownStackKind {
                name: s.to_string(),
            }),
        }
    }
}

/// A string did not name any [`StackKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStackKind {
    /// The rejected input.
    pub name: String,
}

impl fmt::Display for UnknownStackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown stack kind '{}', expected array, linked_list or std",
            self.name
        )
    }
}

impl Error for UnknownStackKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip() {
        for kind in StackKind::ALL {
            assert_eq!(kind.to_string().parse::<StackKind>(), Ok(kind));
        }
    }

    #[test]
    fn aliases_parse() {
        assert_eq!("Linked".parse::<StackKind>(), Ok(StackKind::Linked));
        assert_eq!(" deque ".parse::<StackKind>(), Ok(StackKind::Deque));
        assert_eq!("VEC".parse::<StackKind>(), Ok(StackKind::Array));
    }

    #[test]
    fn unknown_name_is_error() {
        let err = "heap".parse::<StackKind>().unwrap_err();
        assert_eq!(err.name, "heap");
        assert!(err.to_string().contains("heap"));
    }

    #[test]
    fn default_is_array() {
        assert_eq!(StackKind::default(), StackKind::Array);
    }
}
