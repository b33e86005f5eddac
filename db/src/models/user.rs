use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Serialize;
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// User's unique email address.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub qualification: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Application-wide role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "user")]
    User,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::score::Entity")]
    Scores,
}

impl Related<super::score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields needed to register a user. The password is hashed on insert.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub qualification: Option<&'a str>,
    pub date_of_birth: Option<NaiveDate>,
    pub password: &'a str,
    pub role: Role,
}

impl Model {
    /// Inserts a new active user, hashing the plaintext password first.
    pub async fn create<C: ConnectionTrait>(db: &C, new: NewUser<'_>) -> Result<Self, DbErr> {
        let now = Utc::now();
        let active = ActiveModel {
            username: Set(new.username.to_owned()),
            email: Set(new.email.to_owned()),
            first_name: Set(new.first_name.to_owned()),
            last_name: Set(new.last_name.to_owned()),
            qualification: Set(new.qualification.map(str::to_owned)),
            date_of_birth: Set(new.date_of_birth),
            password_hash: Set(Self::hash_password(new.password)?),
            role: Set(new.role),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub async fn find_by_email<C: ConnectionTrait>(
        db: &C,
        email: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Email.eq(email)).one(db).await
    }

    /// All users without the admin role, ordered by ID.
    pub async fn find_non_admins<C: ConnectionTrait>(db: &C) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::Role.ne(Role::Admin))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Hashes a plaintext password with Argon2 and a random salt.
    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {}", e)))
    }

    pub fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
