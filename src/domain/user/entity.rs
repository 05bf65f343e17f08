// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::{
    Age, Email, PasswordHash, UserId, UserName, validate_password,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub age: Age,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn apply_profile(&mut self, changes: ProfileChanges, now: DateTime<Utc>) {
        let ProfileChanges { name, email, age } = changes;
        self.name = name;
        self.email = email;
        self.age = age;
        self.updated_at = now;
    }

    pub fn replace_password(&mut self, password_hash: PasswordHash, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        self.updated_at = now;
    }
}

/// Validated registration input. The password is still plaintext here and
/// only lives until it has been hashed.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub name: UserName,
    pub email: Email,
    pub password: String,
    pub age: Age,
}

impl UserDraft {
    pub fn new(name: &str, email: &str, password: &str, age: i32) -> DomainResult<Self> {
        let name = UserName::new(name)?;
        let email = Email::new(email)?;
        let password = password.trim();
        validate_password(password)?;
        let age = Age::new(age)?;

        Ok(Self {
            name,
            email,
            password: password.to_owned(),
            age,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub age: Age,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        name: UserName,
        email: Email,
        password_hash: PasswordHash,
        age: Age,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            email,
            password_hash,
            age,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Profile-only update; the credential is changed through its own flow.
#[derive(Debug, Clone)]
pub struct ProfileChanges {
    pub name: UserName,
    pub email: Email,
    pub age: Age,
}

impl ProfileChanges {
    pub fn new(name: &str, email: &str, age: i32) -> DomainResult<Self> {
        Ok(Self {
            name: UserName::new(name)?,
            email: Email::new(email)?,
            age: Age::new(age)?,
        })
    }
}
