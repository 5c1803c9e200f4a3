//! Access paths.
//!
//! An access path such as `slides[0].shapes[2]` locates an object within the
//! subtree of a root. Tree nodes carry these paths so a caller can discover a
//! structure cheaply and later inspect one object in full.

use std::borrow::Cow;
use std::fmt;

use crate::common::{Error, Result};

use super::extract::Introspect;

/// One step of an access path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Bare name, e.g. `notes`
    Field(Cow<'static, str>),
    /// Indexed collection member, e.g. `shapes[2]`
    Index { name: Cow<'static, str>, index: usize },
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index { name, index } => write!(f, "{name}[{index}]"),
        }
    }
}

/// Append a segment to a parent path.
///
/// The root path is empty, so its children are addressed by their segment
/// alone.
pub fn join(prefix: &str, segment: &PathSegment) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Parse an access path into its segments.
///
/// An empty path addresses the root and yields no segments.
pub fn parse(path: &str) -> Result<Vec<PathSegment>> {
    if path.is_empty() {
        return Ok(Vec::new());
    }

    path.split('.')
        .map(|raw| parse_segment(path, raw))
        .collect()
}

fn parse_segment(path: &str, raw: &str) -> Result<PathSegment> {
    let malformed = |reason: &str| Error::MalformedAccessPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let (name, index) = match raw.find('[') {
        Some(open) => {
            let close = raw
                .strip_suffix(']')
                .ok_or_else(|| malformed("unterminated index"))?;
            let digits = &close[open + 1..];
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed("index is not a non-negative integer"));
            }
            let index = digits
                .parse::<usize>()
                .map_err(|_| malformed("index is not a non-negative integer"))?;
            (&raw[..open], Some(index))
        },
        None => (raw, None),
    };

    if name.is_empty() {
        return Err(malformed("empty segment"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(malformed("segment contains disallowed characters"));
    }

    let name = Cow::Owned(name.to_string());
    Ok(match index {
        Some(index) => PathSegment::Index { name, index },
        None => PathSegment::Field(name),
    })
}

/// Resolve an access path produced by the tree builder back to its object.
///
/// `path` may either be relative to `root` or start with the root's own
/// access path. Returns `Ok(None)` when the path is well formed but names no
/// object.
pub fn resolve<'a>(root: &'a dyn Introspect, path: &str) -> Result<Option<&'a dyn Introspect>> {
    let root_path = root.root_access_path();
    let relative = if root_path.is_empty() {
        path
    } else if path == root_path {
        ""
    } else {
        path.strip_prefix(root_path.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(path)
    };

    let segments = parse(relative)?;
    let mut current = root;
    for segment in &segments {
        let next = current
            .tree_children()
            .into_iter()
            .find(|child| &child.segment == segment)
            .map(|child| child.object);
        match next {
            Some(object) => current = object,
            None => {
                tracing::debug!(path, %segment, "access path segment not found");
                return Ok(None);
            },
        }
    }
    Ok(Some(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indexed_path() {
        let segments = parse("slides[0].shapes[12]").unwrap();
        assert_eq!(
            segments,
            vec![
                PathSegment::Index {
                    name: "slides".into(),
                    index: 0
                },
                PathSegment::Index {
                    name: "shapes".into(),
                    index: 12
                },
            ]
        );
    }

    #[test]
    fn test_parse_named_segment() {
        let segments = parse("notes").unwrap();
        assert_eq!(segments, vec![PathSegment::Field("notes".into())]);
    }

    #[test]
    fn test_parse_empty_path_is_root() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        let bad_paths = [
            "slides[",
            "slides[x]",
            "slides[-1]",
            "slides[+1]",
            "slides[]",
            ".shapes[0]",
            "sl ides[0]",
            "[0]",
        ];
        for bad in bad_paths {
            assert!(
                matches!(parse(bad), Err(Error::MalformedAccessPath { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_join_and_display_round_trip() {
        let seg = PathSegment::Index {
            name: "children".into(),
            index: 2,
        };
        assert_eq!(join("root[0]", &seg), "root[0].children[2]");
        assert_eq!(join("", &seg), "children[2]");
    }
}
