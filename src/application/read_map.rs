//! Read-tracking accessor

use crate::application::ledger::Ledger;
use crate::domain::keys::{self, ContentKind};
use crate::domain::records::{unread_count, ReadMap};
use crate::infrastructure::backend::Backend;
use chrono::Utc;
use serde_json::Value;

impl<B: Backend> Ledger<B> {
    pub fn load_read_map(&self, tenant: &str, kind: ContentKind) -> ReadMap {
        self.store
            .load(&keys::read_map(kind, tenant), ReadMap::new(), None)
    }

    pub fn save_read_map(&self, tenant: &str, kind: ContentKind, map: &ReadMap) -> bool {
        self.store.save(&keys::read_map(kind, tenant), map)
    }

    /// Record `item` as read now (Unix milliseconds) and save the map
    pub fn mark_read(&self, tenant: &str, kind: ContentKind, item: &str) -> bool {
        let mut map = self.load_read_map(tenant, kind);
        map.insert(
            item.to_string(),
            Value::from(Utc::now().timestamp_millis()),
        );
        self.save_read_map(tenant, kind, &map)
    }

    /// Items of `kind` the tenant has not opened yet
    pub fn unread(&self, tenant: &str, kind: ContentKind) -> usize {
        let read = self.load_read_map(tenant, kind);
        match kind {
            ContentKind::Board => unread_count(&self.load_board_posts(tenant), &read),
            ContentKind::Forum => unread_count(&self.load_proposals(tenant), &read),
        }
    }
}
