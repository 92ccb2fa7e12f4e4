//! Sector selection shared by every block of a page.
//!
//! One [`SectorContext`] is provided per page session by [`SectorProvider`].
//! Blocks that depend on the selection read [`SectorContext::get`] (or the
//! read-only [`SectorContext::selected`] signal) inside a reactive scope and
//! are re-run whenever [`SectorContext::set`] changes it.

use contracts::enums::Sector;
use leptos::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SectorContextError {
    #[error("SectorContext not found. Wrap the page with SectorProvider.")]
    ContextUnavailable,
}

/// Sector context type.
#[derive(Clone, Copy)]
pub struct SectorContext {
    selected: RwSignal<Sector>,
}

impl SectorContext {
    /// New selection starting at `All Sectors`.
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(Sector::default()),
        }
    }

    /// Current sector; tracked when called inside a reactive scope.
    pub fn get(&self) -> Sector {
        self.selected.get()
    }

    pub fn get_untracked(&self) -> Sector {
        self.selected.get_untracked()
    }

    /// The only way to change the selection. Setting the current value again
    /// does not notify subscribers.
    pub fn set(&self, next: Sector) {
        if self.selected.get_untracked() == next {
            return;
        }
        log::debug!("Sector selection -> {}", next);
        self.selected.set(next);
    }

    /// Read-only view for components that only subscribe.
    pub fn selected(&self) -> Signal<Sector> {
        self.selected.read_only().into()
    }
}

impl Default for SectorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fresh selection and provide it to the current owner's subtree.
pub fn provide_sector_context() -> SectorContext {
    let context = SectorContext::new();
    provide_context(context);
    context
}

/// Provides a fresh sector selection to children components.
#[component]
pub fn SectorProvider(children: Children) -> impl IntoView {
    provide_sector_context();
    children()
}

pub fn use_sector() -> Result<SectorContext, SectorContextError> {
    use_context::<SectorContext>().ok_or(SectorContextError::ContextUnavailable)
}

/// Like [`use_sector`], for blocks that are only ever mounted inside a
/// [`SectorProvider`]; a missing provider is a programming error.
pub fn expect_sector() -> SectorContext {
    match use_sector() {
        Ok(context) => context,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_starts_at_all_sectors() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_sector_context();
            assert_eq!(ctx.get(), Sector::AllSectors);
            assert_eq!(use_sector().unwrap().get(), Sector::AllSectors);
        });
    }

    #[test]
    fn test_set_then_get_for_every_sector() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_sector_context();
            for sector in Sector::all() {
                ctx.set(sector);
                assert_eq!(ctx.get(), sector);
                assert_eq!(ctx.selected().get_untracked(), sector);
            }
        });
    }

    #[test]
    fn test_missing_provider_is_an_error() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_sector().err(), Some(SectorContextError::ContextUnavailable));
        });
    }

    #[test]
    #[should_panic(expected = "SectorProvider")]
    fn test_expect_sector_panics_without_provider() {
        let owner = Owner::new();
        owner.with(|| {
            expect_sector();
        });
    }

    #[test]
    fn test_child_scope_shares_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_sector_context();
            let child = Owner::new();
            child.with(|| {
                use_sector().unwrap().set(Sector::LostLabor);
            });
            assert_eq!(ctx.get(), Sector::LostLabor);
        });
    }

    #[test]
    fn test_dependent_memo_recomputes_once_per_read() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_sector_context();
            let runs = Arc::new(AtomicUsize::new(0));
            let visible = Memo::new({
                let runs = Arc::clone(&runs);
                move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    ctx.get()
                }
            });

            assert_eq!(visible.get_untracked(), Sector::AllSectors);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            ctx.set(Sector::Healthcare);
            ctx.set(Sector::CriminalJustice);
            assert_eq!(ctx.get_untracked(), Sector::CriminalJustice);

            assert_eq!(visible.get_untracked(), Sector::CriminalJustice);
            assert_eq!(runs.load(Ordering::SeqCst), 2);

            // unchanged selection leaves the memo clean
            ctx.set(Sector::CriminalJustice);
            assert_eq!(visible.get_untracked(), Sector::CriminalJustice);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }
}
