//! Retrospects service
//!
//! Follow-up notes attached to existing diaries. Ids are global across
//! all diaries.

use super::events::{ChangeEvent, ChangeNotifier};
use crate::database::{next_id, validate_retrospect_content, RetrospectRecord, Repository};
use crate::error::{AppError, Result};
use chrono::Utc;

/// Service for managing retrospects
#[derive(Clone)]
pub struct RetrospectsService {
    repo: Repository,
    notifier: ChangeNotifier,
}

impl RetrospectsService {
    pub fn new(repo: Repository, notifier: ChangeNotifier) -> Self {
        Self { repo, notifier }
    }

    /// Attach a retrospect to a diary
    pub fn create_retrospect(&self, diary_id: u64, content: &str) -> Result<RetrospectRecord> {
        let content = validate_retrospect_content(content)?;

        if !self.repo.load_diaries().iter().any(|d| d.id == diary_id) {
            return Err(AppError::DiaryNotFound(diary_id));
        }

        let mut retrospects = self.repo.load_retrospects();
        let retrospect = RetrospectRecord {
            id: next_id(retrospects.iter().map(|r| r.id)),
            content,
            diary_id,
            created_at: Utc::now(),
        };

        retrospects.push(retrospect.clone());
        self.repo.persist_retrospects(&retrospects)?;
        self.notifier.notify(ChangeEvent::RetrospectCreated {
            id: retrospect.id,
            diary_id,
        });

        tracing::info!("Retrospect {} added to diary {}", retrospect.id, diary_id);

        Ok(retrospect)
    }

    /// Retrospects of one diary, most recent first
    pub fn list_for_diary(&self, diary_id: u64) -> Vec<RetrospectRecord> {
        let mut retrospects: Vec<RetrospectRecord> = self
            .repo
            .load_retrospects()
            .into_iter()
            .filter(|r| r.diary_id == diary_id)
            .collect();

        retrospects.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        retrospects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{DiaryRecord, Emotion};
    use crate::storage::MemoryStorage;
    use chrono::{Duration, TimeZone};

    fn create_test_service(diary_ids: &[u64]) -> (RetrospectsService, Repository) {
        let repo = Repository::new(MemoryStorage::shared());
        let diaries: Vec<DiaryRecord> = diary_ids
            .iter()
            .map(|&id| DiaryRecord {
                id,
                title: "t".to_string(),
                content: "c".to_string(),
                emotion: Emotion::Happy,
                created_at: Utc::now(),
            })
            .collect();
        repo.persist_diaries(&diaries).unwrap();

        (
            RetrospectsService::new(repo.clone(), ChangeNotifier::new()),
            repo,
        )
    }

    #[test]
    fn test_ids_are_global_across_diaries() {
        let (service, _repo) = create_test_service(&[1, 2]);

        let a = service.create_retrospect(1, "first").unwrap();
        let b = service.create_retrospect(2, "second").unwrap();
        let c = service.create_retrospect(1, "third").unwrap();

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        assert_eq!(service.list_for_diary(1).len(), 2);
        assert_eq!(service.list_for_diary(2).len(), 1);
    }

    #[test]
    fn test_missing_diary_is_rejected() {
        let (service, repo) = create_test_service(&[1]);

        let result = service.create_retrospect(42, "orphan");

        assert!(matches!(result, Err(AppError::DiaryNotFound(42))));
        assert!(repo.load_retrospects().is_empty());
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let (service, _repo) = create_test_service(&[1]);
        assert!(matches!(
            service.create_retrospect(1, "   "),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let (service, repo) = create_test_service(&[1]);
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let stored = vec![
            RetrospectRecord {
                id: 1,
                content: "oldest".to_string(),
                diary_id: 1,
                created_at: base,
            },
            RetrospectRecord {
                id: 2,
                content: "newest".to_string(),
                diary_id: 1,
                created_at: base + Duration::hours(2),
            },
            RetrospectRecord {
                id: 3,
                content: "middle".to_string(),
                diary_id: 1,
                created_at: base + Duration::hours(1),
            },
        ];
        repo.persist_retrospects(&stored).unwrap();

        let contents: Vec<String> = service
            .list_for_diary(1)
            .into_iter()
            .map(|r| r.content)
            .collect();

        assert_eq!(contents, vec!["newest", "middle", "oldest"]);
    }
}
