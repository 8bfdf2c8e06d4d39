//! Path types for addressing nodes inside a document.
//!
//! A path is the ordered list of map keys and list indices leading from the
//! document root to a node. The Path/PathBuf types follow the same
//! borrowed/owned pattern as `std::path::Path`/`PathBuf`.
//!
//! # Core Types
//!
//! - [`Segment`] - One step: a map key or a list index
//! - [`Path`] - An unsized borrowed path (always behind a reference)
//! - [`PathBuf`] - An owned path that can be constructed and extended
//!
//! # String form
//!
//! Keys are separated by dots and indices are written in brackets, so the
//! path `["user", "tags", 2]` renders as `user.tags[2]`. Parsing accepts the
//! same form; empty keys produced by stray dots are dropped.
//!
//! ```rust
//! use confluence::doc::{PathBuf, Segment, path_overlaps};
//! use std::str::FromStr;
//!
//! let path = PathBuf::from_str("user.tags[2]")?;
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.last(), Some(&Segment::Index(2)));
//!
//! let parent = PathBuf::new().push("user");
//! assert!(path_overlaps(&parent, &path));
//! # Ok::<(), confluence::doc::PathError>(())
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for path parsing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A bracketed index that is not a non-negative integer, or is unterminated.
    #[error("Invalid segment '{segment}' in path '{path}': {reason}")]
    InvalidSegment {
        path: String,
        segment: String,
        reason: String,
    },
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// One step of a path: a map key or a list index.
///
/// Serializes untagged, so a path serializes as a plain JSON array such as
/// `["x", 0, "y"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Position inside a list
    Index(usize),
    /// Key inside a map
    Key(String),
}

impl Segment {
    /// Returns true if this segment addresses a list element
    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    /// Returns the key, if this is a key segment
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(k) => Some(k),
            Segment::Index(_) => None,
        }
    }

    /// Returns the index, if this is an index segment
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(i) => Some(*i),
            Segment::Key(_) => None,
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<&String> for Segment {
    fn from(key: &String) -> Self {
        Segment::Key(key.clone())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => write!(f, "{k}"),
            Segment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// An owned path into a document.
///
/// # Examples
///
/// ```rust
/// # use confluence::doc::{PathBuf, Segment};
/// let path = PathBuf::new().push("x").push(0usize).push("y");
/// assert_eq!(path.to_string(), "x[0].y");
///
/// let segments: Vec<&Segment> = path.iter().collect();
/// assert_eq!(segments.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathBuf {
    segments: Vec<Segment>,
}

/// A borrowed path into a document.
///
/// `Path` is the borrowed counterpart to `PathBuf`, similar to how `&str`
/// relates to `String`. This type is unsized and must always be used behind a
/// reference.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Path {
    segments: [Segment],
}

impl PathBuf {
    /// Creates a new empty path (the document root).
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Appends a segment, builder style.
    pub fn push(mut self, segment: impl Into<Segment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends a segment in place.
    pub fn push_mut(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Replaces the segment at `position`.
    ///
    /// Returns false (and changes nothing) when `position` is out of range.
    pub fn set_segment(&mut self, position: usize, segment: Segment) -> bool {
        match self.segments.get_mut(position) {
            Some(slot) => {
                *slot = segment;
                true
            }
            None => false,
        }
    }

    /// Consumes the path, returning its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl Path {
    /// Views a slice of segments as a path.
    pub fn new(segments: &[Segment]) -> &Path {
        // SAFETY: Path is repr(transparent) over [Segment]
        unsafe { &*(segments as *const [Segment] as *const Path) }
    }

    /// The root path.
    pub fn root() -> &'static Path {
        Path::new(&[])
    }

    /// Returns the segments of this path.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path is the document root.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the last segment, or `None` for the root.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns the parent path, or `None` for the root.
    pub fn parent(&self) -> Option<&Path> {
        self.split_last().map(|(_, parent)| parent)
    }

    /// Splits into the last segment and the parent path.
    pub fn split_last(&self) -> Option<(&Segment, &Path)> {
        self.segments
            .split_last()
            .map(|(last, rest)| (last, Path::new(rest)))
    }

    /// Returns true if `prefix` is a prefix of this path (equality included).
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Returns the remainder of this path after `prefix`.
    pub fn strip_prefix(&self, prefix: &Path) -> Option<&Path> {
        self.segments
            .strip_prefix(&prefix.segments)
            .map(Path::new)
    }

    /// Returns true if one path is a prefix of the other, inclusive of equality.
    ///
    /// Overlapping paths name the same node, or a node and one of its
    /// ancestors. Edits on non-overlapping paths can always be merged
    /// independently.
    pub fn overlaps(&self, other: &Path) -> bool {
        self.starts_with(other) || other.starts_with(self)
    }

    /// Returns a new path with `segment` appended.
    pub fn join(&self, segment: impl Into<Segment>) -> PathBuf {
        let mut segments = self.segments.to_vec();
        segments.push(segment.into());
        PathBuf { segments }
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            segments: self.segments.to_vec(),
        }
    }
}

/// Returns true iff one path is a prefix of the other, inclusive of equality.
///
/// ```rust
/// # use confluence::{doc::path_overlaps, path};
/// assert!(path_overlaps(&path!("a", "b", "c"), &path!("a", "b", "c", "d")));
/// assert!(!path_overlaps(&path!("a", "b", "c"), &path!("a", "b", "d", "e")));
/// ```
pub fn path_overlaps(p1: &Path, p2: &Path) -> bool {
    p1.overlaps(p2)
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(&self.segments)
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl From<Vec<Segment>> for PathBuf {
    fn from(segments: Vec<Segment>) -> Self {
        PathBuf { segments }
    }
}

impl FromIterator<Segment> for PathBuf {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        PathBuf {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a PathBuf {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromStr for PathBuf {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |segment: &str, reason: &str| PathError::InvalidSegment {
            path: s.to_string(),
            segment: segment.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut key = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    if !key.is_empty() {
                        segments.push(Segment::Key(std::mem::take(&mut key)));
                    }
                }
                '[' => {
                    if !key.is_empty() {
                        segments.push(Segment::Key(std::mem::take(&mut key)));
                    }
                    let mut digits = String::new();
                    let mut closed = false;
                    for d in chars.by_ref() {
                        if d == ']' {
                            closed = true;
                            break;
                        }
                        digits.push(d);
                    }
                    if !closed {
                        return Err(invalid(&digits, "unterminated index"));
                    }
                    let index = digits
                        .parse::<usize>()
                        .map_err(|_| invalid(&digits, "index must be a non-negative integer"))?;
                    segments.push(Segment::Index(index));
                }
                _ => key.push(c),
            }
        }
        if !key.is_empty() {
            segments.push(Segment::Key(key));
        }

        Ok(PathBuf { segments })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(k) if i == 0 => write!(f, "{k}")?,
                Segment::Key(k) => write!(f, ".{k}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

/// Constructs a [`PathBuf`] from segments.
///
/// Each argument is converted with `Segment::from`, so string-like arguments
/// become keys and `usize` arguments become indices.
///
/// # Syntax
///
/// - `path!()` - The root path
/// - `path!("user", "tags", 2)` - Keys and indices
/// - `path!(base_key, "name")` - Runtime values mixed with literals
///
/// # Examples
///
/// ```rust
/// # use confluence::path;
/// let path = path!("user", "tags", 2);
/// assert_eq!(path.to_string(), "user.tags[2]");
///
/// let root = path!();
/// assert!(root.is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::doc::PathBuf::new()
    };

    ($($segment:expr),+ $(,)?) => {{
        let mut path = $crate::doc::PathBuf::new();
        $(
            path.push_mut($crate::doc::Segment::from($segment));
        )+
        path
    }};
}
