// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_selection --heading-base-level=0

//! Loupe Selection: a primary/secondary selection pair with click-through cycling.
//!
//! An inspector lets the user pick two layers at once, typically with a left
//! click for the **primary** slot and a right click for the **secondary** slot,
//! so that distances between them can be measured. Layers in a design are often
//! stacked: a label sits on a button which sits on a card. Clicking the same
//! point repeatedly should therefore drill one layer deeper each time instead of
//! always picking the topmost one.
//!
//! This crate provides:
//! - [`cycle`]: the pure policy that picks the next key for a slot given the keys
//!   under the pointer (front-to-back), the key in the other slot, and the key
//!   currently in this slot.
//! - [`SelectionPair`]: a small container owning both slots, which applies
//!   [`cycle`] and keeps the slots mutually exclusive. It tracks a
//!   **revision** counter that bumps only when a slot actually changes.
//!
//! It does **not** know how keys are laid out or how hits are found; callers
//! produce the front-to-back hit list from their own scene.
//!
//! ## Minimal example
//!
//! ```rust
//! use loupe_selection::{SelectionPair, Slot};
//!
//! // Keys under the pointer, topmost first.
//! let hits = ["label", "button", "card"];
//!
//! let mut selection = SelectionPair::new();
//! selection.cycle(Slot::Primary, &hits);
//! assert_eq!(selection.primary(), Some(&"label"));
//!
//! // Clicking again drills through the stack and wraps around.
//! selection.cycle(Slot::Primary, &hits);
//! assert_eq!(selection.primary(), Some(&"button"));
//! selection.cycle(Slot::Primary, &hits);
//! selection.cycle(Slot::Primary, &hits);
//! assert_eq!(selection.primary(), Some(&"label"));
//!
//! // The secondary slot never picks what the primary holds.
//! selection.cycle(Slot::Secondary, &hits);
//! assert_eq!(selection.secondary(), Some(&"button"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// One of the two selection slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    /// The first selection, usually driven by a plain click.
    #[default]
    Primary,
    /// The second selection, usually driven by a secondary (context) click.
    Secondary,
}

impl Slot {
    /// Returns the opposite slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// Picks the next key for a slot from the keys under the pointer.
///
/// `hits` is ordered front-to-back (topmost first). The key held by the other
/// slot is skipped entirely. Among the remaining candidates:
///
/// - if `current` is found and is not the last candidate, the next (deeper) one
///   is returned;
/// - if `current` is the last candidate or is not among them, the first
///   candidate is returned;
/// - if no candidates remain, `None` is returned and the slot should be cleared.
///
/// ```rust
/// use loupe_selection::cycle;
///
/// let hits = [1, 2, 3];
/// assert_eq!(cycle(&hits, None, Some(&2)), Some(3));
/// assert_eq!(cycle(&hits, None, Some(&3)), Some(1));
/// assert_eq!(cycle(&hits, Some(&3), Some(&2)), Some(1));
/// assert_eq!(cycle(&[7], Some(&7), None), None);
/// ```
#[must_use]
pub fn cycle<T>(hits: &[T], other: Option<&T>, current: Option<&T>) -> Option<T>
where
    T: PartialEq + Clone,
{
    let mut candidates = hits.iter().filter(|&key| Some(key) != other);
    let first = candidates.clone().next();
    if let Some(current) = current
        && candidates.by_ref().any(|key| key == current)
        && let Some(next) = candidates.next()
    {
        return Some(next.clone());
    }
    first.cloned()
}

/// A primary/secondary selection pair plus a revision.
///
/// A key never occupies both slots at once: [`SelectionPair::cycle`] skips the
/// other slot's key, and [`SelectionPair::set`] moves a key out of the other
/// slot when assigning it.
#[derive(Clone, Debug, Default)]
pub struct SelectionPair<T> {
    primary: Option<T>,
    secondary: Option<T>,
    revision: u64,
}

impl<T> SelectionPair<T> {
    /// Creates an empty selection pair.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primary: None,
            secondary: None,
            revision: 0,
        }
    }

    /// Returns the key in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&T> {
        match slot {
            Slot::Primary => self.primary.as_ref(),
            Slot::Secondary => self.secondary.as_ref(),
        }
    }

    /// Returns the primary key, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&T> {
        self.primary.as_ref()
    }

    /// Returns the secondary key, if any.
    #[must_use]
    pub fn secondary(&self) -> Option<&T> {
        self.secondary.as_ref()
    }

    /// Returns `true` if neither slot holds a key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Iterates the occupied slots, primary first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.primary.iter().chain(self.secondary.iter())
    }

    /// Returns the current revision counter.
    ///
    /// The revision bumps only when a slot's contents change; no-op calls such
    /// as clearing an already empty pair leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clears both slots.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.primary = None;
        self.secondary = None;
        self.bump_revision();
    }

    /// Clears one slot.
    pub fn clear_slot(&mut self, slot: Slot) {
        if self.slot_mut(slot).take().is_some() {
            self.bump_revision();
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<T> {
        match slot {
            Slot::Primary => &mut self.primary,
            Slot::Secondary => &mut self.secondary,
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> SelectionPair<T>
where
    T: PartialEq + Clone,
{
    /// Returns the slot holding `key`, if any.
    #[must_use]
    pub fn slot_of(&self, key: &T) -> Option<Slot> {
        if self.primary.as_ref() == Some(key) {
            Some(Slot::Primary)
        } else if self.secondary.as_ref() == Some(key) {
            Some(Slot::Secondary)
        } else {
            None
        }
    }

    /// Advances `slot` through `hits` (front-to-back) using [`cycle`].
    ///
    /// Returns the slot's new key.
    pub fn cycle(&mut self, slot: Slot, hits: &[T]) -> Option<&T> {
        let next = cycle(hits, self.get(slot.other()), self.get(slot));
        self.replace(slot, next);
        self.get(slot)
    }

    /// Puts `key` into `slot`, or clears it for `None`.
    ///
    /// If the other slot currently holds the same key, that slot is cleared.
    pub fn set(&mut self, slot: Slot, key: Option<T>) {
        if key.is_some() && self.get(slot.other()) == key.as_ref() {
            *self.slot_mut(slot.other()) = None;
            self.bump_revision();
        }
        self.replace(slot, key);
    }

    fn replace(&mut self, slot: Slot, key: Option<T>) {
        let current = self.slot_mut(slot);
        if *current == key {
            return;
        }
        *current = key;
        self.bump_revision();
    }
}
