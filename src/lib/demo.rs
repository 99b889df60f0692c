//! The fixed walk through the registry operations.

use std::io::{self, Write};

use tracing::debug_span;

use crate::RoleRegistry;

/// Runs the demo sequence, writing its report to `out`.
///
/// The sequence is: seed, read `admin`, add `guest`, presence-checked read of
/// `user`, remove `guest`, list every entry, print the size. The registry as
/// it stands at the end is returned.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// let users = role_registry::demo::run(&mut out).unwrap();
///
/// let report = String::from_utf8(out).unwrap();
/// assert!(report.starts_with("Alice\nUtilisateur : Bob\n"));
/// assert!(report.ends_with("Taille : 2\n"));
/// assert_eq!(users.len(), 2);
/// ```
pub fn run<W: Write>(out: &mut W) -> io::Result<RoleRegistry> {
    let _span = debug_span!("demo").entered();

    let mut users = RoleRegistry::seeded();

    writeln!(out, "{}", users.get_or_default("admin"))?;

    users.insert("guest", "Eve");

    if let (name, true) = users.lookup("user") {
        writeln!(out, "Utilisateur : {name}")?;
    }

    users.remove("guest");

    for (role, name) in &users {
        writeln!(out, "{role} => {name}")?;
    }

    writeln!(out, "Taille : {}", users.len())?;
    Ok(users)
}
