use std::collections::hash_map;
use std::iter::FusedIterator;

/// An iterator over the entries of a [`RoleRegistry`].
///
/// This `struct` is created by the [`iter`] method on [`RoleRegistry`]. See its
/// documentation for more.
///
/// [`RoleRegistry`]: crate::RoleRegistry
/// [`iter`]: crate::RoleRegistry::iter
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    pub(super) inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(role, name)| (role.as_str(), name.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Iter<'_> {}
