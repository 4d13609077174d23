use crate::artifacts::history::alias::AliasTable;
use crate::artifacts::history::entry::{CheckoutEvent, ReflogEntry};

/// Whether branch renames recorded in the reflog are followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameTracking {
    #[default]
    Follow,
    Ignore,
}

/// Turns classified reflog entries into checkout events carrying current names
///
/// Entries must be observed in stream order: a rename only affects the
/// checkouts observed after it.
#[derive(Debug, Clone)]
pub enum NameResolver {
    Passthrough,
    Aliased(AliasTable),
}

impl NameResolver {
    pub fn new(tracking: RenameTracking) -> Self {
        match tracking {
            RenameTracking::Follow => NameResolver::Aliased(AliasTable::new()),
            RenameTracking::Ignore => NameResolver::Passthrough,
        }
    }

    pub fn observe(&mut self, entry: ReflogEntry) -> Option<CheckoutEvent> {
        match (self, entry) {
            (NameResolver::Aliased(aliases), ReflogEntry::Rename(rename)) => {
                aliases.apply_rename(rename.old, rename.new);
                None
            }
            (NameResolver::Aliased(aliases), ReflogEntry::Checkout(checkout)) => Some(
                CheckoutEvent::new(aliases.resolve(&checkout.from), aliases.resolve(&checkout.to)),
            ),
            (NameResolver::Passthrough, ReflogEntry::Rename(_)) => None,
            (NameResolver::Passthrough, ReflogEntry::Checkout(checkout)) => Some(checkout),
        }
    }
}
