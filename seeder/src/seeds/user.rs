use chrono::NaiveDate;
use db::models::user::{Model, NewUser, Role};
use sea_orm::TransactionTrait;

use crate::error::SeedError;

pub const ADMIN_EMAIL: &str = "admin@quizmaster.com";
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

/// A fixed sample account.
pub struct Profile {
    pub username: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub qualification: &'static str,
    /// (year, month, day)
    pub date_of_birth: (i32, u32, u32),
}

pub const SAMPLE_USERS: [Profile; 5] = [
    Profile {
        username: "student1",
        email: "student1@example.com",
        password: "password123",
        first_name: "Animesh",
        last_name: "thakur",
        qualification: "Undergraduate",
        date_of_birth: (2000, 5, 15),
    },
    Profile {
        username: "student2",
        email: "student2@example.com",
        password: "password123",
        first_name: "Vishnu",
        last_name: "Khatik",
        qualification: "Graduate",
        date_of_birth: (1996, 3, 22),
    },
    Profile {
        username: "student3",
        email: "student3@example.com",
        password: "password123",
        first_name: "Chaitanya",
        last_name: "Sharma",
        qualification: "High School",
        date_of_birth: (2000, 11, 7),
    },
    Profile {
        username: "student4",
        email: "student4@example.com",
        password: "password123",
        first_name: "Ayush",
        last_name: "dubey",
        qualification: "Undergraduate",
        date_of_birth: (1999, 9, 18),
    },
    Profile {
        username: "student5",
        email: "student5@example.com",
        password: "password123",
        first_name: "somnath",
        last_name: "mishra",
        qualification: "PhD",
        date_of_birth: (2001, 1, 30),
    },
];

/// Creates the administrator account unless one with [`ADMIN_EMAIL`] exists.
pub async fn ensure_admin<C: TransactionTrait>(db: &C) -> Result<Model, SeedError> {
    let txn = db.begin().await?;

    let admin = match Model::find_by_email(&txn, ADMIN_EMAIL).await? {
        Some(existing) => {
            log::debug!("Admin user already present (id {})", existing.id);
            existing
        }
        None => {
            let created = Model::create(
                &txn,
                NewUser {
                    username: ADMIN_USERNAME,
                    email: ADMIN_EMAIL,
                    first_name: "Admin",
                    last_name: "User",
                    qualification: None,
                    date_of_birth: None,
                    password: ADMIN_PASSWORD,
                    role: Role::Admin,
                },
            )
            .await?;
            log::info!("Created admin user {}", created.email);
            created
        }
    };

    txn.commit().await?;
    Ok(admin)
}

/// Creates every sample account whose email is not yet taken.
///
/// Returns how many accounts were created.
pub async fn ensure_sample_users<C: TransactionTrait>(db: &C) -> Result<u64, SeedError> {
    let txn = db.begin().await?;
    let mut created = 0;

    for profile in &SAMPLE_USERS {
        if Model::find_by_email(&txn, profile.email).await?.is_some() {
            continue;
        }

        let (year, month, day) = profile.date_of_birth;
        Model::create(
            &txn,
            NewUser {
                username: profile.username,
                email: profile.email,
                first_name: profile.first_name,
                last_name: profile.last_name,
                qualification: Some(profile.qualification),
                date_of_birth: NaiveDate::from_ymd_opt(year, month, day),
                password: profile.password,
                role: Role::User,
            },
        )
        .await?;
        created += 1;
    }

    txn.commit().await?;
    log::info!("Created {created} sample users");
    Ok(created)
}
