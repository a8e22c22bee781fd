use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    form::{signup::SignupForm, FormErrors},
};

/// Avatar applied at signup (DDragon profile icon 57 at the site's pinned
/// data version).
pub const DEFAULT_AVATAR_URL: &str =
    "https://ddragon.leagueoflegends.com/cdn/13.14.1/img/profileicon/57.png";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user
    ///
    /// Shape-validates the form, rejects duplicate username/email with
    /// per-field messages, then hashes the password and inserts. A signup
    /// racing this one can slip past the pre-checks; the resulting unique
    /// violation maps to a conflict error.
    pub async fn signup(&self, form: SignupForm) -> Result<entity::user::Model, Error> {
        form.validate()?;

        let user_repository = UserRepository::new(self.db);

        let mut errors = FormErrors::default();

        if user_repository
            .get_by_username(&form.username)
            .await?
            .is_some()
        {
            errors.push("username", "Username already taken");
        }

        if user_repository.get_by_email(&form.email).await?.is_some() {
            errors.push("email", "Email already registered");
        }

        if !errors.is_empty() {
            return Err(errors.into());
        }

        let password_hash = hash_password(&form.password)?;

        match user_repository
            .create(
                form.username,
                form.email,
                password_hash,
                Some(DEFAULT_AVATAR_URL.to_string()),
            )
            .await
        {
            Ok(user) => {
                tracing::info!("New user signed up: {}", user.username);

                Ok(user)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(Error::AuthError(AuthError::CredentialsTaken))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Verifies a username/password pair
    ///
    /// `None` is the failure sentinel for an unknown username or a wrong
    /// password; both are expected user input. A stored hash that fails to
    /// parse is a server-side error.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<entity::user::Model>, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = match user_repository.get_by_username(username).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

/// Hashes a password with argon2id and a fresh random salt, producing a
/// PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AuthError::PasswordHash(err.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only an unparseable or otherwise broken hash
/// is an error.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|err| AuthError::PasswordHash(err.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(AuthError::PasswordHash(err.to_string())),
    }
}
