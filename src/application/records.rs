//! List accessors: finance, firms, posts, rosters

use crate::application::ledger::Ledger;
use crate::domain::keys::{self, ContentKind};
use crate::domain::records::{BoardPost, Building, FinanceItem, Firm, Proposal, RecordFamily, User};
use crate::infrastructure::backend::Backend;
use serde_json::Value;

impl<B: Backend> Ledger<B> {
    pub fn load_finance_items(&self, tenant: &str) -> Vec<FinanceItem> {
        self.store.load(&keys::finance(tenant), Vec::new(), None)
    }

    pub fn save_finance_items(&self, tenant: &str, items: &[FinanceItem]) -> bool {
        self.store.save(&keys::finance(tenant), items)
    }

    pub fn load_firms(&self, tenant: &str) -> Vec<Firm> {
        self.store.load(&keys::firms(tenant), Vec::new(), None)
    }

    pub fn save_firms(&self, tenant: &str, firms: &[Firm]) -> bool {
        self.store.save(&keys::firms(tenant), firms)
    }

    pub fn load_board_posts(&self, tenant: &str) -> Vec<BoardPost> {
        self.store
            .load(&keys::posts(ContentKind::Board, tenant), Vec::new(), None)
    }

    pub fn save_board_posts(&self, tenant: &str, posts: &[BoardPost]) -> bool {
        self.store
            .save(&keys::posts(ContentKind::Board, tenant), posts)
    }

    pub fn load_proposals(&self, tenant: &str) -> Vec<Proposal> {
        self.store
            .load(&keys::posts(ContentKind::Forum, tenant), Vec::new(), None)
    }

    pub fn save_proposals(&self, tenant: &str, proposals: &[Proposal]) -> bool {
        self.store
            .save(&keys::posts(ContentKind::Forum, tenant), proposals)
    }

    /// Building roster; seeded with the configured default building
    pub fn load_buildings(&self) -> Vec<Building> {
        self.store.load(
            keys::BUILDINGS_KEY,
            Vec::new(),
            Some(vec![self.default_building.clone()]),
        )
    }

    pub fn save_buildings(&self, buildings: &[Building]) -> bool {
        self.store.save(keys::BUILDINGS_KEY, buildings)
    }

    /// User roster; an empty roster is persisted on first access
    pub fn load_users(&self) -> Vec<User> {
        self.store.load(keys::USERS_KEY, Vec::new(), Some(Vec::new()))
    }

    pub fn save_users(&self, users: &[User]) -> bool {
        self.store.save(keys::USERS_KEY, users)
    }

    /// Any family as JSON, for display
    pub fn load_family(&self, family: RecordFamily, tenant: &str) -> Value {
        let value = match family {
            RecordFamily::Finance => serde_json::to_value(self.load_finance_items(tenant)),
            RecordFamily::Firms => serde_json::to_value(self.load_firms(tenant)),
            RecordFamily::Posts(ContentKind::Board) => {
                serde_json::to_value(self.load_board_posts(tenant))
            }
            RecordFamily::Posts(ContentKind::Forum) => {
                serde_json::to_value(self.load_proposals(tenant))
            }
            RecordFamily::Buildings => serde_json::to_value(self.load_buildings()),
            RecordFamily::Users => serde_json::to_value(self.load_users()),
        };
        value.unwrap_or_else(|_| Value::Array(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::FinanceKind;
    use crate::infrastructure::backend::MemoryBackend;
    use serde_json::json;

    #[test]
    fn test_lists_default_to_empty_without_writing() {
        let ledger = Ledger::new(MemoryBackend::new());

        assert!(ledger.load_finance_items("b1").is_empty());
        assert!(ledger.load_firms("b1").is_empty());
        assert!(ledger.load_board_posts("b1").is_empty());
        assert!(ledger.load_proposals("b1").is_empty());
        assert!(ledger.store().backend().is_empty());
    }

    #[test]
    fn test_finance_round_trip() {
        let ledger = Ledger::new(MemoryBackend::new());
        let items = vec![FinanceItem {
            id: "f1".to_string(),
            kind: FinanceKind::Income,
            amount: 42.5,
            date: "2025-02-03".to_string(),
            category: "dues".to_string(),
            memo: String::new(),
        }];

        assert!(ledger.save_finance_items("b1", &items));
        assert_eq!(ledger.load_finance_items("b1"), items);
        assert!(ledger.load_finance_items("b2").is_empty());
    }

    #[test]
    fn test_non_finite_amount_is_rejected_without_losing_the_list() {
        let ledger = Ledger::new(MemoryBackend::new());
        let good = FinanceItem {
            id: "f1".to_string(),
            amount: 10.0,
            ..Default::default()
        };
        assert!(ledger.save_finance_items("b1", &[good.clone()]));

        let bad = FinanceItem {
            id: "f2".to_string(),
            amount: f64::INFINITY,
            ..Default::default()
        };
        assert!(!ledger.save_finance_items("b1", &[good.clone(), bad]));
        assert_eq!(ledger.load_finance_items("b1"), vec![good]);
    }

    #[test]
    fn test_board_and_forum_do_not_share_storage() {
        let ledger = Ledger::new(MemoryBackend::new());
        let post = BoardPost {
            id: "p1".to_string(),
            title: "Water shut-off".to_string(),
            ..Default::default()
        };

        ledger.save_board_posts("b1", &[post.clone()]);

        assert_eq!(ledger.load_board_posts("b1"), vec![post]);
        assert!(ledger.load_proposals("b1").is_empty());
    }

    #[test]
    fn test_buildings_seeded_on_first_read() {
        let ledger = Ledger::new(MemoryBackend::new());

        let buildings = ledger.load_buildings();

        assert_eq!(buildings.len(), 1);
        assert_eq!(buildings[0].id, "main");
        assert!(ledger
            .store()
            .backend()
            .has(keys::BUILDINGS_KEY)
            .unwrap());
    }

    #[test]
    fn test_saved_buildings_replace_seed() {
        let ledger = Ledger::new(MemoryBackend::new());
        ledger.load_buildings();
        let roster = vec![
            Building {
                id: "a".to_string(),
                ..Default::default()
            },
            Building {
                id: "b".to_string(),
                ..Default::default()
            },
        ];

        assert!(ledger.save_buildings(&roster));
        assert_eq!(ledger.load_buildings(), roster);
    }

    #[test]
    fn test_users_seeded_empty() {
        let ledger = Ledger::new(MemoryBackend::new());

        assert!(ledger.load_users().is_empty());
        assert_eq!(
            ledger.store().backend().get(keys::USERS_KEY).unwrap(),
            Some("[]".to_string())
        );
    }

    #[test]
    fn test_malformed_list_falls_back_to_empty() {
        let ledger = Ledger::new(MemoryBackend::new());
        ledger
            .store()
            .backend()
            .set(&keys::firms("b1"), "{\"oops\":true}")
            .unwrap();

        assert!(ledger.load_firms("b1").is_empty());
    }

    #[test]
    fn test_load_family_as_json() {
        let ledger = Ledger::new(MemoryBackend::new());
        ledger.save_firms(
            "b1",
            &[Firm {
                id: "x".to_string(),
                name: "Lift Co".to_string(),
                ..Default::default()
            }],
        );

        let value = ledger.load_family(RecordFamily::Firms, "b1");
        assert_eq!(value[0]["name"], json!("Lift Co"));
        assert_eq!(
            ledger.load_family(RecordFamily::Posts(ContentKind::Forum), "b1"),
            json!([])
        );
    }
}
