//! A registry mapping role identifiers to display names, and the demo that
//! walks through its operations.
//!
//! The registry follows the shape of the std collections: reads come in an
//! `Option` flavour and in a "default on miss" flavour, writes never fail,
//! and traversal is a borrowing iterator over `(role, name)` pairs.

#![warn(missing_docs)]

use std::collections::HashMap;

use tracing::debug;

mod registry_iter;
pub use registry_iter::Iter;

pub mod demo;

/// Seed entries every [`RoleRegistry::seeded`] registry starts with.
pub const SEED_ROLES: [(&str, &str); 2] = [("admin", "Alice"), ("user", "Bob")];

/// A mapping from role identifier to display name.
///
/// Keys are unique. Iteration order is unspecified and may differ between
/// runs; treat the contents as a set of pairs.
///
/// # Examples
///
/// ```
/// use role_registry::RoleRegistry;
///
/// let mut users = RoleRegistry::seeded();
///
/// // read a role we know is there.
/// assert_eq!(users.get_or_default("admin"), "Alice");
///
/// // add a guest, then check it with a presence-checked lookup.
/// users.insert("guest", "Eve");
/// assert_eq!(users.lookup("guest"), ("Eve", true));
///
/// // guests don't stay long.
/// users.remove("guest");
/// assert_eq!(users.lookup("guest"), ("", false));
///
/// for (role, name) in &users {
///     println!("{role} => {name}");
/// }
/// assert_eq!(users.len(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoleRegistry {
    roles: HashMap<String, String>,
}

impl RoleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a registry holding the [`SEED_ROLES`].
    ///
    /// ```
    /// use role_registry::RoleRegistry;
    ///
    /// let users = RoleRegistry::seeded();
    /// assert_eq!(users.get("user"), Some("Bob"));
    /// assert_eq!(users.len(), 2);
    /// ```
    pub fn seeded() -> Self {
        SEED_ROLES.into_iter().collect()
    }

    /// Returns the name registered for `role`, if any.
    pub fn get(&self, role: &str) -> Option<&str> {
        self.roles.get(role).map(String::as_str)
    }

    /// Returns the name registered for `role`, or the empty string on a miss.
    ///
    /// ```
    /// use role_registry::RoleRegistry;
    ///
    /// let users = RoleRegistry::seeded();
    /// assert_eq!(users.get_or_default("admin"), "Alice");
    /// assert_eq!(users.get_or_default("root"), "");
    /// ```
    pub fn get_or_default(&self, role: &str) -> &str {
        self.get(role).unwrap_or_default()
    }

    /// Presence-checked lookup: the name (empty on a miss) together with
    /// whether `role` was registered.
    ///
    /// ```
    /// use role_registry::RoleRegistry;
    ///
    /// let users = RoleRegistry::seeded();
    /// if let (name, true) = users.lookup("user") {
    ///     println!("Utilisateur : {name}");
    /// }
    /// assert_eq!(users.lookup("guest"), ("", false));
    /// ```
    pub fn lookup(&self, role: &str) -> (&str, bool) {
        match self.get(role) {
            Some(name) => (name, true),
            None => ("", false),
        }
    }

    /// Returns `true` if `role` is registered.
    pub fn contains_role(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Registers `name` under `role`, overwriting any previous name.
    ///
    /// Returns the replaced name, if there was one. Inserting the same pair
    /// twice leaves the registry unchanged.
    ///
    /// ```
    /// use role_registry::RoleRegistry;
    ///
    /// let mut users = RoleRegistry::new();
    /// assert_eq!(users.insert("guest", "Eve"), None);
    /// assert_eq!(users.insert("guest", "Eve"), Some("Eve".to_string()));
    /// assert_eq!(users.len(), 1);
    /// ```
    pub fn insert(&mut self, role: impl Into<String>, name: impl Into<String>) -> Option<String> {
        let role = role.into();
        let name = name.into();
        debug!(role = %role, name = %name, "registering role");
        let previous = self.roles.insert(role, name);
        if let Some(previous) = &previous {
            debug!(previous = %previous, "replaced existing name");
        }
        previous
    }

    /// Removes `role`, returning its name if it was registered.
    ///
    /// Removing an absent role is a no-op.
    ///
    /// ```
    /// use role_registry::RoleRegistry;
    ///
    /// let mut users = RoleRegistry::seeded();
    /// assert_eq!(users.remove("admin"), Some("Alice".to_string()));
    /// assert_eq!(users.remove("admin"), None);
    /// ```
    pub fn remove(&mut self, role: &str) -> Option<String> {
        let removed = self.roles.remove(role);
        debug!(role, removed = removed.is_some(), "removing role");
        removed
    }

    /// Gets an iterator over the `(role, name)` pairs, in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.roles.iter(),
        }
    }

    /// Returns the number of registered roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns `true` if no role is registered.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoleRegistry {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R, N> FromIterator<(R, N)> for RoleRegistry
where
    R: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (R, N)>>(iter: I) -> Self {
        let mut registry = RoleRegistry::new();
        registry.extend(iter);
        registry
    }
}

impl<R, N> Extend<(R, N)> for RoleRegistry
where
    R: Into<String>,
    N: Into<String>,
{
    fn extend<I: IntoIterator<Item = (R, N)>>(&mut self, iter: I) {
        for (role, name) in iter {
            self.insert(role, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn pairs(registry: &RoleRegistry) -> HashSet<(String, String)> {
        registry
            .iter()
            .map(|(role, name)| (role.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn seeded_registry_holds_admin_and_user() {
        let users = RoleRegistry::seeded();
        assert_eq!(users.get_or_default("admin"), "Alice");
        assert_eq!(users.get_or_default("user"), "Bob");
        assert_eq!(users.len(), 2);
        assert!(!users.is_empty());
    }

    #[test]
    fn direct_read_misses_yield_empty_string() {
        let users = RoleRegistry::seeded();
        assert_eq!(users.get("guest"), None);
        assert_eq!(users.get_or_default("guest"), "");
        assert!(RoleRegistry::new().is_empty());
    }

    #[test]
    fn insert_then_lookup_reports_presence() {
        let mut users = RoleRegistry::seeded();
        assert_eq!(users.insert("guest", "Eve"), None);
        assert_eq!(users.lookup("guest"), ("Eve", true));
        assert!(users.contains_role("guest"));
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn insert_is_idempotent_and_overwrites() {
        let mut users = RoleRegistry::seeded();
        users.insert("guest", "Eve");
        let before = users.clone();
        assert_eq!(users.insert("guest", "Eve"), Some("Eve".to_string()));
        assert_eq!(users, before);

        assert_eq!(users.insert("guest", "Mallory"), Some("Eve".to_string()));
        assert_eq!(users.get("guest"), Some("Mallory"));
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn remove_clears_entry_and_tolerates_absence() {
        let mut users = RoleRegistry::seeded();
        users.insert("guest", "Eve");
        assert_eq!(users.remove("guest"), Some("Eve".to_string()));
        assert_eq!(users.lookup("guest"), ("", false));
        assert_eq!(users.remove("guest"), None);
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn removal_leaves_other_roles_untouched() {
        let mut users = RoleRegistry::seeded();
        users.insert("guest", "Eve");
        users.remove("guest");
        assert_eq!(users.lookup("admin"), ("Alice", true));
        assert_eq!(users.lookup("user"), ("Bob", true));
    }

    #[test]
    fn traversal_covers_every_pair_once() {
        let mut users = RoleRegistry::seeded();
        users.insert("guest", "Eve");
        users.remove("guest");

        let iter = users.iter();
        assert_eq!(iter.len(), 2);
        let seen: Vec<_> = iter.collect();
        assert_eq!(seen.len(), 2);

        let expected: HashSet<(String, String)> = [("admin", "Alice"), ("user", "Bob")]
            .into_iter()
            .map(|(r, n)| (r.to_string(), n.to_string()))
            .collect();
        assert_eq!(pairs(&users), expected);
    }

    #[test]
    fn collects_and_extends_from_pairs() {
        let mut users: RoleRegistry = vec![("admin", "Alice")].into_iter().collect();
        users.extend([("user".to_string(), "Bob".to_string())]);
        assert_eq!(users, RoleRegistry::seeded());
    }
}
