//! This crate provides a doubly-linked list with two permanent sentinel
//! nodes, stored in a generational slot arena and addressed through stable,
//! copyable node handles.
//!
//! The [`List`] allows inserting and removing elements at any given
//! position in constant time, and relocating a whole sub-range in constant
//! time with [`splice`]. In compromise, accessing elements at an arbitrary
//! position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 3, 4]);
//!
//! let third = list.next(list.start());
//! list.insert(third, 2); // becomes [1, 2, 3, 4]
//!
//! let found = list.find(list.start(), list.end(), &3, |a, b| a.cmp(b));
//! assert_eq!(list.get(found), Some(&3));
//!
//! list.remove(found); // becomes [1, 2, 4]
//! assert_eq!(list.to_vec(), vec![1, 2, 4]);
//! ```
//!
//! # Memory Layout
//!
//! All nodes live in one arena owned by the list. Slots 0 and 1 hold the
//! head and tail sentinels, which are allocated on construction, never
//! carry a value and never move; element nodes occupy the slots after them
//! in allocation order, stitched into traversal order by their `next` and
//! `prev` links:
//!
//! ```text
//!  slot:      0       1       2       3       4
//!          ╔══════╦══════╦═══════╦═══════╦═══════╗
//!          ║ head ║ tail ║ "a"   ║ (free)║ "b"   ║
//!          ╚══╤═══╩══════╩═══╤═══╩═══════╩═══╤═══╝
//!     next:   └──→ 2 ────────┴──→ 4 ────────┴──→ 1 (tail)
//!     prev:   0 ←── 2 ←──────────── 4 ←────────── 1
//! ```
//!
//! The list `[a, b]` above has a vacated slot at index 3; it is retired
//! under a bumped generation counter and will be reused by a later
//! insertion. Traversal order and slot order are unrelated.
//!
//! # Node Handles
//!
//! Positions are named by [`NodeRef`] handles: plain `Copy` values pairing
//! a slot index with the generation it was issued under. A handle does not
//! borrow the list, so it can be stored, copied and passed back into any
//! operation later. When its node is removed the slot's generation is
//! bumped, and the handle becomes *absent*: every operation treats it as a
//! missing argument rather than a fault.
//!
//! There is also a dedicated absent value, [`NodeRef::null`], returned by
//! any operation that has nothing to point at. Navigation tolerates it, so
//! defensive call chains compose without presence checks at every step:
//!
//! ```
//! use sentinel_list::List;
//!
//! let list: List<i32> = List::new();
//! // start() == end() on an empty list; walking past it yields the null
//! // handle, which navigates to itself.
//! let nowhere = list.next(list.next(list.start()));
//! assert!(nowhere.is_null());
//! assert!(list.prev(nowhere).is_null());
//! ```
//!
//! # Half-Open Ranges
//!
//! The range operations [`find`], [`for_each`], [`find_all`] and
//! [`splice`] all take a half-open node range `from..to`: `from` is
//! included, `to` is not, and an empty range is expressed as `from == to`.
//! The canonical full range is `start()..end()`, which is empty exactly
//! when the list is. A miss in [`find`] is reported as the range's own
//! exclusive bound, so it can be detected by handle equality:
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let missing = list.find(list.start(), list.end(), &9, |a, b| a.cmp(b));
//! assert_eq!(missing, list.end());
//! ```
//!
//! The range contract is the caller's to keep: handing these operations a
//! pair of handles that is not an ordered, contiguous sub-range (or a
//! splice destination inside the moved range) is not detected, and may
//! scramble traversal order. It can never violate memory safety — the
//! crate contains no `unsafe` code.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IntoIter`] iterators,
//! which are double-ended, fused and exact-sized. In-place mutation goes
//! through [`for_each`] or [`get_mut`]; both hand out `&mut` references
//! into the stored elements.
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let (start, end) = (list.start(), list.end());
//! list.for_each(start, end, |item| {
//!     *item *= 2;
//!     true
//! });
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! [`List`]: crate::List
//! [`NodeRef`]: crate::NodeRef
//! [`NodeRef::null`]: crate::NodeRef::null
//! [`Iter`]: crate::Iter
//! [`IntoIter`]: crate::IntoIter
//! [`splice`]: crate::List::splice
//! [`find`]: crate::List::find
//! [`find_all`]: crate::List::find_all
//! [`for_each`]: crate::List::for_each
//! [`get_mut`]: crate::List::get_mut

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{List, NodeRef};

pub mod list;

mod experiments;
