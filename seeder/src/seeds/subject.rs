use db::models::subject::Model;
use sea_orm::TransactionTrait;

use crate::error::SeedError;

const IMAGE_URL: &str = "https://images.unsplash.com/photo-1636466497217-26a8cbeaf0aa";

/// (name, description) of every seeded subject, in display order.
pub const SUBJECTS: [(&str, &str); 5] = [
    ("Mathematics", "Maths, calculus, algebra"),
    ("Computer Science", "Coding, Hardware, Software"),
    ("Physics", "Mechanics, ELectronics, Termo"),
    ("Biology", "Bio description"),
    ("History", "Boring idk"),
];

/// Creates missing subjects by name and returns all of them in [`SUBJECTS`] order.
pub async fn ensure_subjects<C: TransactionTrait>(db: &C) -> Result<Vec<Model>, SeedError> {
    let txn = db.begin().await?;
    let mut subjects = Vec::with_capacity(SUBJECTS.len());

    for (name, description) in SUBJECTS {
        let subject = match Model::find_by_name(&txn, name).await? {
            Some(existing) => existing,
            None => {
                log::debug!("Creating subject {name}");
                Model::create(&txn, name, Some(description), Some(IMAGE_URL)).await?
            }
        };
        subjects.push(subject);
    }

    txn.commit().await?;
    Ok(subjects)
}
