use crate::arena::{Arena, Slot};
use crate::treap::node::Node;
use crate::treap::{Error, Result};
use compare::{natural, Compare, Natural};
use rand::{Rng, XorShiftRng};
use std::fmt;
use std::iter::FromIterator;

/// An ordered multiset of values implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Each node has a value and a priority. The value of any node is greater than all values in its
/// left subtree and no greater than all values in its right subtree. The priority of a node is
/// greater than the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected height of the tree is proportional to the logarithm of the number of values.
///
/// The ordering is supplied as a strict weak order through a `Compare` comparator. Values the
/// comparator considers equivalent may occur more than once; every insertion creates a distinct
/// node, and removal takes the first equivalent node found by descent.
///
/// Nodes live in an arena owned by the treap. Child links are the owning edges of the tree,
/// while each node's parent link is a weak slot that rotations follow upward but that never
/// releases a node.
///
/// # Examples
///
/// ```
/// use treap_collections::treap::Treap;
///
/// let mut t = Treap::new();
/// t.insert(3);
/// t.insert(0);
/// t.insert(3);
///
/// assert_eq!(t.len(), 3);
/// assert_eq!(t.lowest(), Ok(&0));
/// assert_eq!(t.highest(), Ok(&3));
///
/// assert_eq!(t.remove(&3), Some(3));
/// assert!(t.contains(&3));
/// assert_eq!(t.remove(&4), None);
/// ```
pub struct Treap<T, C = Natural<T>, R = XorShiftRng> {
    arena: Arena<Node<T>>,
    root: Option<Slot>,
    cmp: C,
    rng: R,
}

impl<T: Ord> Treap<T> {
    /// Constructs a new, empty `Treap<T>` ordered by the natural ordering of `T`.
    ///
    /// The default random source is an unseeded `XorShiftRng`, so a given insertion order always
    /// reproduces the same tree shape. It is not suitable for anything cryptographic.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// ```
    pub fn new() -> Self {
        Treap {
            arena: Arena::new(),
            root: None,
            cmp: natural(),
            rng: XorShiftRng::new_unseeded(),
        }
    }
}

impl<T, C: Compare<T>> Treap<T, C> {
    /// Constructs a new, empty `Treap<T, C>` ordered by `cmp`.
    ///
    /// The comparator must implement a strict weak order; values for which neither side
    /// compares less are treated as equivalent. Closures of type `Fn(&T, &T) -> Ordering`
    /// implement `Compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::Treap;
    ///
    /// let mut t = Treap::with_cmp(|l: &u32, r: &u32| r.cmp(l));
    /// t.insert(1);
    /// t.insert(3);
    ///
    /// assert_eq!(t.lowest(), Ok(&3));
    /// assert_eq!(t.highest(), Ok(&1));
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Treap {
            arena: Arena::new(),
            root: None,
            cmp,
            rng: XorShiftRng::new_unseeded(),
        }
    }
}

impl<T: Ord, R: Rng> Treap<T, Natural<T>, R> {
    /// Constructs a new, empty `Treap<T>` drawing priorities from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{SeedableRng, XorShiftRng};
    /// use treap_collections::treap::Treap;
    ///
    /// let rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    /// let mut t = Treap::with_rng(rng);
    /// t.insert(1);
    ///
    /// assert_eq!(t.lowest(), Ok(&1));
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Treap {
            arena: Arena::new(),
            root: None,
            cmp: natural(),
            rng,
        }
    }
}

impl<T, C: Compare<T>, R: Rng> Treap<T, C, R> {
    /// Constructs a new, empty `Treap<T, C, R>` ordered by `cmp` and drawing priorities from
    /// `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{SeedableRng, XorShiftRng};
    /// use treap_collections::treap::Treap;
    ///
    /// let rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    /// let mut t = Treap::with_cmp_and_rng(|l: &u32, r: &u32| r.cmp(l), rng);
    /// t.insert(1);
    /// t.insert(3);
    ///
    /// assert_eq!(t.lowest(), Ok(&3));
    /// ```
    pub fn with_cmp_and_rng(cmp: C, rng: R) -> Self {
        Treap {
            arena: Arena::new(),
            root: None,
            cmp,
            rng,
        }
    }

    /// Returns `true` if the treap has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// assert!(t.is_empty());
    /// t.insert(1);
    /// assert!(!t.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of values in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// t.insert(1);
    /// assert_eq!(t.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns a reference to the smallest value in the treap, reached by repeated left descent
    /// from the root.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTreap` if the treap has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::{Error, Treap};
    ///
    /// let mut t = Treap::new();
    /// assert_eq!(t.lowest(), Err(Error::EmptyTreap));
    ///
    /// t.insert(3);
    /// t.insert(1);
    /// assert_eq!(t.lowest(), Ok(&1));
    /// ```
    pub fn lowest(&self) -> Result<&T> {
        let mut curr = self.root.ok_or(Error::EmptyTreap)?;
        while let Some(child) = self.arena[curr].left {
            curr = child;
        }
        Ok(&self.arena[curr].value)
    }

    /// Returns a reference to the largest value in the treap, reached by repeated right descent
    /// from the root.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTreap` if the treap has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::{Error, Treap};
    ///
    /// let mut t = Treap::new();
    /// assert_eq!(t.highest(), Err(Error::EmptyTreap));
    ///
    /// t.insert(3);
    /// t.insert(1);
    /// assert_eq!(t.highest(), Ok(&3));
    /// ```
    pub fn highest(&self) -> Result<&T> {
        let mut curr = self.root.ok_or(Error::EmptyTreap)?;
        while let Some(child) = self.arena[curr].right {
            curr = child;
        }
        Ok(&self.arena[curr].value)
    }

    /// Checks if a value equivalent to `value` under the comparator exists in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// assert!(t.contains(&1));
    /// assert!(!t.contains(&0));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut curr = self.root;
        while let Some(node) = curr {
            if self.cmp.compares_lt(value, &self.arena[node].value) {
                curr = self.arena[node].left;
            } else if self.cmp.compares_lt(&self.arena[node].value, value) {
                curr = self.arena[node].right;
            } else {
                return true;
            }
        }
        false
    }

    /// Inserts a value into the treap. Duplicates under the comparator are permitted and create
    /// distinct nodes.
    ///
    /// The new node receives a priority drawn uniformly from `[0, 1)`, is attached as a leaf by
    /// ordinary binary search tree descent, and is then rotated upward until heap order over
    /// priorities is restored.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// t.insert(1);
    /// assert_eq!(t.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let priority = self.rng.next_f32();
        let node = self.arena.allocate(Node::new(value, priority));
        self.attach(node);
        self.lift(node);
    }

    /// Inserts the value built by `make` into the treap. Identical to `insert` except in how the
    /// value is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert_with(|| (1, String::from("one")));
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn insert_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.insert(make());
    }

    /// Removes the first value equivalent to `value` found by binary search tree descent and
    /// returns it, or returns `None` and leaves the treap untouched if no equivalent value
    /// exists.
    ///
    /// The target is first rotated down to a leaf: while it has any child, the child with the
    /// higher priority is rotated up into its place, a missing child counting as priority `-1`.
    /// The leaf is then detached from its parent and released.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// assert_eq!(t.remove(&1), Some(1));
    /// assert_eq!(t.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut curr = self.root;
        while let Some(node) = curr {
            if self.cmp.compares_lt(value, &self.arena[node].value) {
                curr = self.arena[node].left;
            } else if self.cmp.compares_lt(&self.arena[node].value, value) {
                curr = self.arena[node].right;
            } else {
                self.sink(node);
                self.detach(node);
                return Some(self.arena.free(node).value);
            }
        }
        None
    }

    /// Removes all values from the treap, releasing every node in post-order. Calling `clear` on
    /// an empty treap is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// t.insert(2);
    ///
    /// t.clear();
    /// assert!(t.is_empty());
    ///
    /// t.clear();
    /// assert!(t.is_empty());
    /// ```
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            self.release(root);
        }
    }

    fn release(&mut self, node: Slot) {
        let left = self.arena[node].left;
        let right = self.arena[node].right;
        if let Some(child) = left {
            self.release(child);
        }
        if let Some(child) = right {
            self.release(child);
        }
        self.arena.free(node);
    }

    fn attach(&mut self, node: Slot) {
        let root = self.root;
        let mut curr = match root {
            Some(root) => root,
            None => {
                self.root = Some(node);
                return;
            },
        };
        loop {
            let go_left = self
                .cmp
                .compares_lt(&self.arena[node].value, &self.arena[curr].value);
            let next = if go_left {
                self.arena[curr].left
            } else {
                self.arena[curr].right
            };
            match next {
                Some(child) => curr = child,
                None => {
                    if go_left {
                        self.arena[curr].left = Some(node);
                    } else {
                        self.arena[curr].right = Some(node);
                    }
                    self.arena[node].parent = Some(curr);
                    return;
                },
            }
        }
    }

    fn lift(&mut self, node: Slot) {
        while self.root != Some(node) {
            let parent = self.arena[node]
                .parent
                .expect("Expected non-root node to have a parent.");
            if self.arena[node].priority <= self.arena[parent].priority {
                break;
            }
            if self.arena[parent].right == Some(node) {
                self.rotate_left(node);
            } else {
                self.rotate_right(node);
            }
        }
    }

    fn sink(&mut self, node: Slot) {
        loop {
            let left = self.arena[node].left;
            let right = self.arena[node].right;
            if left.is_none() && right.is_none() {
                return;
            }
            let left_priority = left.map_or(-1.0, |child| self.arena[child].priority);
            let right_priority = right.map_or(-1.0, |child| self.arena[child].priority);
            if left_priority > right_priority {
                let child = left.expect("Expected left child node to be `Some`.");
                self.rotate_right(child);
            } else {
                let child = right.expect("Expected right child node to be `Some`.");
                self.rotate_left(child);
            }
        }
    }

    fn detach(&mut self, node: Slot) {
        debug_assert!(self.arena[node].is_leaf());
        let parent = self.arena[node].parent;
        match parent {
            Some(parent) => {
                let parent_node = &mut self.arena[parent];
                if parent_node.left == Some(node) {
                    parent_node.left = None;
                } else if parent_node.right == Some(node) {
                    parent_node.right = None;
                } else {
                    unreachable!("Expected node to be a child of its parent.");
                }
            },
            None => self.root = None,
        }
    }

    // Rotates a left child up over its parent, relinking the grandparent edge, the parent edge,
    // and the middle subtree that crosses sides.
    fn rotate_right(&mut self, node: Slot) {
        let parent = self.arena[node]
            .parent
            .expect("Expected rotated node to have a parent.");
        debug_assert_eq!(self.arena[parent].left, Some(node));
        let middle = self.arena[node].right;
        let grandparent = self.arena[parent].parent;

        self.arena[node].parent = grandparent;
        match grandparent {
            Some(grandparent) => self.replace_child(grandparent, parent, node),
            None => self.root = Some(node),
        }

        self.arena[node].right = Some(parent);
        self.arena[parent].parent = Some(node);

        self.arena[parent].left = middle;
        if let Some(middle) = middle {
            self.arena[middle].parent = Some(parent);
        }
    }

    // Rotates a right child up over its parent.
    fn rotate_left(&mut self, node: Slot) {
        let parent = self.arena[node]
            .parent
            .expect("Expected rotated node to have a parent.");
        debug_assert_eq!(self.arena[parent].right, Some(node));
        let middle = self.arena[node].left;
        let grandparent = self.arena[parent].parent;

        self.arena[node].parent = grandparent;
        match grandparent {
            Some(grandparent) => self.replace_child(grandparent, parent, node),
            None => self.root = Some(node),
        }

        self.arena[node].left = Some(parent);
        self.arena[parent].parent = Some(node);

        self.arena[parent].right = middle;
        if let Some(middle) = middle {
            self.arena[middle].parent = Some(parent);
        }
    }

    fn replace_child(&mut self, parent: Slot, from: Slot, to: Slot) {
        let parent_node = &mut self.arena[parent];
        if parent_node.left == Some(from) {
            parent_node.left = Some(to);
        } else if parent_node.right == Some(from) {
            parent_node.right = Some(to);
        } else {
            unreachable!("Expected node to be a child of its parent.");
        }
    }
}

impl<T: fmt::Debug, C, R> Treap<T, C, R> {
    fn fmt_subtree(&self, f: &mut fmt::Formatter, subtree: Option<Slot>) -> fmt::Result {
        match subtree {
            None => write!(f, "null"),
            Some(node) => {
                write!(
                    f,
                    "{{v:{:?},p:{},l:",
                    self.arena[node].value, self.arena[node].priority
                )?;
                self.fmt_subtree(f, self.arena[node].left)?;
                write!(f, ",r:")?;
                self.fmt_subtree(f, self.arena[node].right)?;
                write!(f, "}}")
            },
        }
    }
}

impl<T: fmt::Debug, C, R> fmt::Debug for Treap<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_subtree(f, self.root)
    }
}

impl<T: Ord> Default for Treap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>, R: Rng> Extend<T> for Treap<T, C, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Treap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut treap = Treap::new();
        treap.extend(iter);
        treap
    }
}

#[cfg(test)]
mod tests {
    use super::Treap;
    use crate::arena::Slot;
    use crate::treap::Error;
    use rand::{Rng, SeedableRng, XorShiftRng};

    // Hands out a scripted sequence of priorities so tree shapes are exact.
    struct ScriptedRng {
        priorities: Vec<f32>,
        index: usize,
    }

    impl ScriptedRng {
        fn new(priorities: Vec<f32>) -> Self {
            ScriptedRng {
                priorities,
                index: 0,
            }
        }
    }

    impl Rng for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_f32(&mut self) -> f32 {
            let priority = self.priorities[self.index];
            self.index += 1;
            priority
        }
    }

    fn in_order<T: Clone, C, R>(t: &Treap<T, C, R>) -> Vec<T> {
        let mut values = Vec::new();
        collect(t, t.root, &mut values);
        values
    }

    fn collect<T: Clone, C, R>(t: &Treap<T, C, R>, subtree: Option<Slot>, values: &mut Vec<T>) {
        if let Some(node) = subtree {
            collect(t, t.arena[node].left, values);
            values.push(t.arena[node].value.clone());
            collect(t, t.arena[node].right, values);
        }
    }

    fn assert_consistent<T, C, R>(t: &Treap<T, C, R>) {
        if let Some(root) = t.root {
            assert_eq!(t.arena[root].parent, None);
            assert_node_consistent(t, root);
        }
    }

    fn assert_node_consistent<T, C, R>(t: &Treap<T, C, R>, node: Slot) {
        for child in t.arena[node].left.iter().chain(t.arena[node].right.iter()) {
            assert_eq!(t.arena[*child].parent, Some(node));
            assert!(t.arena[*child].priority <= t.arena[node].priority);
            assert_node_consistent(t, *child);
        }
    }

    fn assert_sorted<T: Clone + Ord, C, R>(t: &Treap<T, C, R>) {
        let values = in_order(t);
        for pair in values.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_empty() {
        let t: Treap<u32> = Treap::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.lowest(), Err(Error::EmptyTreap));
        assert_eq!(t.highest(), Err(Error::EmptyTreap));
        assert_eq!(format!("{:?}", t), "null");
    }

    #[test]
    fn test_insert() {
        let mut t = Treap::new();
        for value in [5, 3, 8, 1, 4].iter() {
            t.insert(*value);
        }

        assert_eq!(t.len(), 5);
        assert_eq!(in_order(&t), vec![1, 3, 4, 5, 8]);
        assert_eq!(t.lowest(), Ok(&1));
        assert_eq!(t.highest(), Ok(&8));
        assert_consistent(&t);
    }

    #[test]
    fn test_insert_sorted_sequence() {
        let mut t = Treap::new();
        for value in 0..100 {
            t.insert(value);
        }

        assert_eq!(t.len(), 100);
        assert_eq!(t.lowest(), Ok(&0));
        assert_eq!(t.highest(), Ok(&99));
        assert_consistent(&t);
        assert_sorted(&t);
    }

    #[test]
    fn test_insert_with() {
        let mut t = Treap::new();
        t.insert_with(|| (1, String::from("one")));
        t.insert_with(|| (0, String::from("zero")));

        assert_eq!(t.lowest(), Ok(&(0, String::from("zero"))));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_insert_equivalent_values_adjacent() {
        let mut t = Treap::with_cmp(|l: &(u32, char), r: &(u32, char)| l.0.cmp(&r.0));
        t.insert((2, 'a'));
        t.insert((1, 'b'));
        t.insert((1, 'c'));

        assert_eq!(t.len(), 3);
        assert_eq!(in_order(&t), vec![(1, 'b'), (1, 'c'), (2, 'a')]);
        assert_consistent(&t);
    }

    #[test]
    fn test_remove() {
        let mut t = Treap::new();
        for value in [5, 3, 8, 1, 4].iter() {
            t.insert(*value);
        }

        assert_eq!(t.remove(&3), Some(3));
        assert_eq!(in_order(&t), vec![1, 4, 5, 8]);
        assert_consistent(&t);

        assert_eq!(t.remove(&3), None);
        assert_eq!(in_order(&t), vec![1, 4, 5, 8]);
    }

    #[test]
    fn test_remove_absent_leaves_treap_untouched() {
        let mut t = Treap::new();
        for value in [2, 1, 3].iter() {
            t.insert(*value);
        }

        assert_eq!(t.remove(&9), None);
        assert_eq!(t.len(), 3);
        assert_eq!(in_order(&t), vec![1, 2, 3]);
        assert_consistent(&t);
    }

    #[test]
    fn test_remove_only_node() {
        let mut t = Treap::new();
        t.insert(1);

        assert_eq!(t.remove(&1), Some(1));
        assert!(t.is_empty());
        assert_eq!(t.lowest(), Err(Error::EmptyTreap));
    }

    #[test]
    fn test_remove_first_equivalent_found() {
        let mut t = Treap::with_cmp(|l: &(u32, char), r: &(u32, char)| l.0.cmp(&r.0));
        t.insert((1, 'a'));
        t.insert((1, 'b'));

        assert!(t.remove(&(1, 'z')).is_some());
        assert_eq!(t.len(), 1);
        assert!(t.remove(&(1, 'z')).is_some());
        assert!(t.is_empty());
    }

    #[test]
    fn test_insert_remove_round_trip() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut t = Treap::new();
        let mut expected = Vec::new();

        for _ in 0..1000 {
            let value = rng.gen::<u32>() % 500;
            t.insert(value);
            expected.push(value);
        }
        expected.sort();

        assert_eq!(t.len(), expected.len());
        assert_eq!(in_order(&t), expected);
        assert_consistent(&t);

        for value in &expected {
            assert_eq!(t.remove(value), Some(*value));
        }
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn test_clear() {
        let mut t = Treap::new();
        for value in 0..10 {
            t.insert(value);
        }

        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.lowest(), Err(Error::EmptyTreap));

        t.clear();
        assert!(t.is_empty());

        t.insert(1);
        assert_eq!(t.len(), 1);
        assert_eq!(t.lowest(), Ok(&1));
    }

    #[test]
    fn test_from_iter() {
        let t: Treap<u32> = vec![5, 3, 8, 1, 4].into_iter().collect();

        assert_eq!(t.len(), 5);
        assert_eq!(in_order(&t), vec![1, 3, 4, 5, 8]);
        assert_consistent(&t);
    }

    #[test]
    fn test_scripted_insert_shape() {
        let rng = ScriptedRng::new(vec![0.5, 0.25, 0.75]);
        let mut t = Treap::with_cmp_and_rng(|l: &u32, r: &u32| l.cmp(r), rng);
        t.insert(2);
        t.insert(1);
        t.insert(3);

        assert_eq!(
            format!("{:?}", t),
            "{v:3,p:0.75,l:{v:2,p:0.5,l:{v:1,p:0.25,l:null,r:null},r:null},r:null}",
        );
        assert_consistent(&t);
    }

    #[test]
    fn test_scripted_removal_favors_higher_priority_child() {
        let rng = ScriptedRng::new(vec![0.9, 0.5, 0.7]);
        let mut t = Treap::with_cmp_and_rng(|l: &u32, r: &u32| l.cmp(r), rng);
        t.insert(2);
        t.insert(1);
        t.insert(3);

        assert_eq!(t.remove(&2), Some(2));
        assert_eq!(
            format!("{:?}", t),
            "{v:3,p:0.7,l:{v:1,p:0.5,l:null,r:null},r:null}",
        );
        assert_consistent(&t);
    }

    #[test]
    fn test_scripted_removal_equal_priorities_rotate_left() {
        let rng = ScriptedRng::new(vec![0.9, 0.5, 0.5]);
        let mut t = Treap::with_cmp_and_rng(|l: &u32, r: &u32| l.cmp(r), rng);
        t.insert(2);
        t.insert(1);
        t.insert(3);

        assert_eq!(t.remove(&2), Some(2));
        assert_eq!(
            format!("{:?}", t),
            "{v:3,p:0.5,l:{v:1,p:0.5,l:null,r:null},r:null}",
        );
        assert_consistent(&t);
    }

    #[test]
    fn test_randomized_operations_keep_invariants() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut t = Treap::new();
        let mut expected = Vec::new();

        for _ in 0..1000 {
            let value = rng.gen::<u32>() % 100;
            if rng.gen::<bool>() || expected.is_empty() {
                t.insert(value);
                expected.push(value);
            } else if let Ok(index) = expected.binary_search(&value) {
                expected.remove(index);
                assert_eq!(t.remove(&value), Some(value));
            } else {
                assert_eq!(t.remove(&value), None);
            }
            expected.sort();
        }

        assert_eq!(in_order(&t), expected);
        assert_consistent(&t);
    }
}
