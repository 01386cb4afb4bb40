//! Shared screen-controller machinery.
//!
//! Every data screen follows the same shape: a fetch state machine, a
//! transient banner slot, and id-keyed patches to the loaded collection so
//! concurrent per-row mutations may complete in any order.

use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::error::UiError;

/// Lifecycle of a screen's collection fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(UiError),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn items(&self) -> Option<&Vec<T>> {
        match self {
            FetchState::Loaded(items) => Some(items),
            _ => None,
        }
    }
}

/// Applies `patch` to the item whose key equals `id`. Returns whether a
/// row matched. Updates are keyed, never positional, so responses arriving
/// out of submission order still land on the right row.
pub fn patch_by_id<T, K, P>(items: &mut [T], id: &str, key: K, patch: P) -> bool
where
    K: Fn(&T) -> &str,
    P: FnOnce(&mut T),
{
    match items.iter_mut().find(|item| key(item) == id) {
        Some(item) => {
            patch(item);
            true
        }
        None => false,
    }
}

/// Removes the item whose key equals `id`. Returns whether a row matched.
pub fn remove_by_id<T, K>(items: &mut Vec<T>, id: &str, key: K) -> bool
where
    K: Fn(&T) -> &str,
{
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}

/// A transient success or error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

/// How long a banner stays up before auto-clearing.
const BANNER_LIFETIME: Duration = Duration::from_secs(5);

static BANNER_SEQ: AtomicU64 = AtomicU64::new(0);

/// Self-clearing banner slot. A newer message supersedes the pending
/// clear of an older one (each banner only clears itself).
#[derive(Clone, Copy)]
pub struct Banners {
    slot: RwSignal<Option<(u64, Banner)>>,
}

impl Banners {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Banner::Success(message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Banner::Error(message.into()));
    }

    pub fn clear(&self) {
        self.slot.set(None);
    }

    pub fn current(&self) -> Option<Banner> {
        self.slot.get().map(|(_, banner)| banner)
    }

    fn show(&self, banner: Banner) {
        let id = BANNER_SEQ.fetch_add(1, Ordering::Relaxed);
        self.slot.set(Some((id, banner)));

        let slot = self.slot;
        set_timeout(
            move || {
                slot.update(|current| {
                    if matches!(current, Some((current_id, _)) if *current_id == id) {
                        *current = None;
                    }
                });
            },
            BANNER_LIFETIME,
        );
    }
}

impl Default for Banners {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Vendor, VendorStatus};

    fn vendor(id: &str) -> Vendor {
        Vendor {
            id: id.to_string(),
            business_name: format!("Shop {id}"),
            ..Vendor::default()
        }
    }

    #[test]
    fn out_of_order_completions_patch_the_right_rows() {
        let mut queue = vec![vendor("a"), vendor("b")];

        // B's approval resolves before A's even though A was fired first.
        assert!(patch_by_id(&mut queue, "b", |v| &v.id, |v| {
            v.status = VendorStatus::Approved;
        }));
        assert!(patch_by_id(&mut queue, "a", |v| &v.id, |v| {
            v.status = VendorStatus::Approved;
        }));

        assert!(queue.iter().all(|v| v.status == VendorStatus::Approved));
        assert_eq!(queue[0].id, "a");
        assert_eq!(queue[1].id, "b");
    }

    #[test]
    fn patching_an_unknown_id_is_a_no_op() {
        let mut queue = vec![vendor("a")];
        assert!(!patch_by_id(&mut queue, "zzz", |v| &v.id, |v| {
            v.status = VendorStatus::Rejected;
        }));
        assert_eq!(queue[0].status, VendorStatus::Pending);
    }

    #[test]
    fn remove_by_id_only_drops_the_matching_row() {
        let mut queue = vec![vendor("a"), vendor("b"), vendor("c")];
        assert!(remove_by_id(&mut queue, "b", |v| &v.id));
        assert!(!remove_by_id(&mut queue, "b", |v| &v.id));
        let ids: Vec<&str> = queue.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
