//! Set-like operations over ordered directory lists.
//!
//! Every function here is pure: inputs are borrowed, results are freshly
//! allocated, and the relative order of retained entries is preserved.
//! Membership is always decided by [`equivalent`], never by raw string
//! equality, so `/opt/bin` and `/opt/bin/` count as the same entry.
//!
//! The insertion operations share one primitive, [`split`], whose
//! `relocate` flag decides whether entries already in the list stay where
//! they are or move to the insertion edge.
//!
//! # Examples
//!
//! ```
//! use extend_path::engine;
//! use extend_path::Directory;
//!
//! let path: Vec<Directory> = ["/home/bin", "/bin", "/sbin"].map(Directory::from).to_vec();
//! let entries: Vec<Directory> = ["/opt/bin", "/bin"].map(Directory::from).to_vec();
//!
//! let appended = engine::append(&entries, &path, false);
//! assert_eq!(appended, ["/home/bin", "/bin", "/sbin", "/opt/bin"].map(Directory::from));
//!
//! let moved = engine::prepend(&entries, &path, true);
//! assert_eq!(moved, ["/opt/bin", "/bin", "/home/bin", "/sbin"].map(Directory::from));
//! ```

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use crate::directory::Directory;

/// Checks whether two entries name the same directory, ignoring trailing
/// separators.
#[must_use]
pub fn equivalent(a: &Directory, b: &Directory) -> bool {
    a.is_equivalent(b)
}

/// Checks whether any element of `list` is equivalent to `directory`.
#[must_use]
pub fn contains(list: &[Directory], directory: &Directory) -> bool {
    list.iter().any(|entry| equivalent(entry, directory))
}

/// Returns the entries of `list` that are not equivalent to anything in
/// `exclude`.
///
/// Duplicates in `list` survive unless they are excluded.
///
/// ```
/// use extend_path::{engine, Directory};
///
/// let list = ["a", "b", "d"].map(Directory::from);
/// let exclude = ["b", "c"].map(Directory::from);
/// assert_eq!(engine::filter(&list, &exclude), ["a", "d"].map(Directory::from));
/// ```
#[must_use]
pub fn filter(list: &[Directory], exclude: &[Directory]) -> Vec<Directory> {
    list.iter()
        .filter(|entry| !contains(exclude, entry))
        .cloned()
        .collect()
}

/// Splits `needles` against `haystack` into the retained base list and the
/// entries to insert.
///
/// Without relocation the haystack is kept whole and only needles it does
/// not already hold are returned for insertion. With relocation every
/// needle is returned for insertion and removed from the base.
#[must_use]
pub fn split(
    needles: &[Directory],
    haystack: &[Directory],
    relocate: bool,
) -> (Vec<Directory>, Vec<Directory>) {
    if relocate {
        (filter(haystack, needles), needles.to_vec())
    } else {
        (haystack.to_vec(), filter(needles, haystack))
    }
}

/// Adds `entries` to the end of `list`.
#[must_use]
pub fn append(entries: &[Directory], list: &[Directory], relocate: bool) -> Vec<Directory> {
    let (mut base, addition) = split(entries, list, relocate);
    base.extend(addition);
    base
}

/// Adds `entries` to the front of `list`.
#[must_use]
pub fn prepend(entries: &[Directory], list: &[Directory], relocate: bool) -> Vec<Directory> {
    let (base, mut addition) = split(entries, list, relocate);
    addition.extend(base);
    addition
}

/// Removes every occurrence of each of `entries` from `list`.
///
/// Entries that are not present are ignored.
#[must_use]
pub fn delete(entries: &[Directory], list: &[Directory]) -> Vec<Directory> {
    filter(list, entries)
}

/// Returns the entries that have no equivalent in `list`.
#[must_use]
pub fn missing(entries: &[Directory], list: &[Directory]) -> Vec<Directory> {
    filter(entries, list)
}

/// Checks that every one of `entries` is present in `list`.
///
/// Order and duplicates are irrelevant; an empty `entries` always verifies.
#[must_use]
pub fn verify(entries: &[Directory], list: &[Directory]) -> bool {
    entries.iter().all(|entry| contains(list, entry))
}
