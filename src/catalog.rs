use generational_arena::{Arena, Index};
use std::cmp::Ordering;
use std::fmt;
use tracing::instrument;

/// One course record as read from the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique-by-convention identifier, used as the ordering key
    pub code: String,
    pub name: String,
    /// Prerequisite course codes in file order, not validated against the catalog
    pub prerequisites: Vec<String>,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.code, self.name)
    }
}

/// Tree node in the arena-based catalog structure.
#[derive(Debug)]
struct CourseNode {
    course: Course,
    left: Option<Index>,
    right: Option<Index>,
}

/// Arena-based binary search tree keyed by course code.
///
/// Uses generational arena for memory-safe node references; the whole tree
/// is torn down when the catalog is dropped, there is no single-node removal.
/// Insertion is unbalanced: sorted input degenerates to a linked list.
#[derive(Debug)]
pub struct Catalog {
    /// Arena storage for all tree nodes
    arena: Arena<CourseNode>,
    /// Index of the root node, None for an empty catalog
    root: Option<Index>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Inserts a course, descending left when the current node's code is
    /// lexicographically greater than the candidate's, right otherwise.
    /// Duplicate codes are kept as separate nodes and descend right.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, course: Course) {
        let Some(mut current) = self.root else {
            let idx = self.arena.insert(CourseNode {
                course,
                left: None,
                right: None,
            });
            self.root = Some(idx);
            return;
        };

        let (parent, go_left) = loop {
            let node = &self.arena[current];
            let go_left = node.course.code > course.code;
            let child = if go_left { node.left } else { node.right };
            match child {
                Some(idx) => current = idx,
                None => break (current, go_left),
            }
        };

        let idx = self.arena.insert(CourseNode {
            course,
            left: None,
            right: None,
        });
        if let Some(node) = self.arena.get_mut(parent) {
            if go_left {
                node.left = Some(idx);
            } else {
                node.right = Some(idx);
            }
        }
    }

    /// Iterative descent from the root; returns the first node whose code
    /// compares equal to `code`, or None when descent reaches an absent child.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, code: &str) -> Option<&Course> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = self.arena.get(idx)?;
            current = match node.course.code.as_str().cmp(code) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Greater => node.left,
                Ordering::Less => node.right,
            };
        }
        None
    }

    /// Lazy in-order iterator yielding courses in non-decreasing code order.
    /// Restartable: each call starts a fresh traversal.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self)
    }

    /// Height of the tree, for diagnostics. A catalog loaded from sorted
    /// input reports depth == len.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Option<Index>) -> usize {
        match node_idx.and_then(|idx| self.arena.get(idx)) {
            Some(node) => {
                1 + self
                    .calculate_depth(node.left)
                    .max(self.calculate_depth(node.right))
            }
            None => 0,
        }
    }
}

/// In-order traversal with an explicit stack (left subtree, node, right
/// subtree), so deep skewed trees cannot overflow the call stack.
pub struct InOrderIter<'a> {
    catalog: &'a Catalog,
    stack: Vec<Index>,
    descend: Option<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            stack: Vec::new(),
            descend: catalog.root,
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.descend {
            self.stack.push(idx);
            self.descend = self.catalog.arena.get(idx)?.left;
        }
        let idx = self.stack.pop()?;
        let node = self.catalog.arena.get(idx)?;
        self.descend = node.right;
        Some(&node.course)
    }
}
