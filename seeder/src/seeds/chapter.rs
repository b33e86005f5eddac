use db::models::{chapter, subject};
use sea_orm::TransactionTrait;
use std::collections::BTreeSet;

use crate::error::SeedError;

pub const CHAPTERS_PER_SUBJECT: u64 = 5;

/// Tops every subject up to [`CHAPTERS_PER_SUBJECT`] chapters.
///
/// Missing chapters fill the lowest free positions starting at 1. Returns all
/// chapters of the given subjects, grouped by subject and ordered by position.
pub async fn ensure_chapters<C: TransactionTrait>(
    db: &C,
    subjects: &[subject::Model],
) -> Result<Vec<chapter::Model>, SeedError> {
    let txn = db.begin().await?;
    let mut chapters = Vec::new();

    for subject in subjects {
        let existing = chapter::Model::find_by_subject(&txn, subject.id).await?;
        let missing = CHAPTERS_PER_SUBJECT.saturating_sub(existing.len() as u64);

        if missing > 0 {
            let taken: BTreeSet<i32> = existing.iter().map(|c| c.position).collect();
            let free = (1..).filter(|p| !taken.contains(p)).take(missing as usize);

            for i in free {
                chapter::Model::create(
                    &txn,
                    subject.id,
                    &format!("Chapter {i}: {} Basics {i}", subject.name),
                    Some(&format!("Introduction to {} concepts - Part {i}", subject.name)),
                    i,
                )
                .await?;
            }
            log::debug!("Created {missing} chapters for {}", subject.name);
        }

        chapters.extend(chapter::Model::find_by_subject(&txn, subject.id).await?);
    }

    txn.commit().await?;
    Ok(chapters)
}
