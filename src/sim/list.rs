//! Persistent entity lists
//!
//! An immutable singly-linked list with structurally shared tails. Newest
//! entities are prepended, so iteration runs most-recent-first; collision and
//! pickup resolution rely on that order for tie-breaking.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::geometry::Body;
use super::organism::Roamer;
use super::state::Pickup;

struct Node<T> {
    first: T,
    rest: EntityList<T>,
}

/// Ordered, immutable list of entities; cloning shares every node
pub struct EntityList<T> {
    head: Option<Arc<Node<T>>>,
}

pub type RoamerList = EntityList<Roamer>;
pub type PickupList = EntityList<Pickup>;

impl<T> EntityList<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// New list with `item` in front; `self` is untouched
    pub fn prepend(&self, item: T) -> Self {
        Self {
            head: Some(Arc::new(Node {
                first: item,
                rest: self.clone(),
            })),
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.first)
    }

    /// Everything after the first element (shared, not copied)
    pub fn rest(&self) -> Self {
        match &self.head {
            Some(node) => node.rest.clone(),
            None => Self::new(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.iter().filter(|item| pred(item)).count()
    }

    /// Rebuild the list by transforming every element, preserving order
    pub fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        let items: Vec<T> = self.iter().map(f).collect();
        Self::from_front(items, Self::new())
    }

    /// `front` (in order) followed by the shared `tail`
    pub fn from_front(front: Vec<T>, tail: Self) -> Self {
        front
            .into_iter()
            .rev()
            .fold(tail, |list, item| list.prepend(item))
    }
}

impl EntityList<Roamer> {
    pub fn move_all(&self) -> Self {
        self.map(|roamer| roamer.move_step())
    }

    pub fn wrap_all(&self, width: i32) -> Self {
        self.map(|roamer| roamer.wrap_around(width))
    }

    pub fn count_smaller_than(&self, size: u32) -> usize {
        self.count_where(|roamer| roamer.size() < size)
    }
}

impl<T> Clone for EntityList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink uniquely owned nodes one at a time so long lists don't recurse on drop
impl<T> Drop for EntityList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for EntityList<T> {
    /// The first yielded item becomes the front of the list
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_front(iter.into_iter().collect(), Self::new())
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.rest.head.as_deref();
            &node.first
        })
    }
}

impl<'a, T> IntoIterator for &'a EntityList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for EntityList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for EntityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for EntityList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for EntityList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from_front(items, Self::new()))
    }
}
