use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, User},
    },
};

/// Minimum accepted password length for self-service registration.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Service for password-based authentication and account registration.
///
/// Passwords are hashed with Argon2 using a per-account random salt. The hash
/// never leaves the server; login verifies the presented password against the
/// stored hash.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new guest account.
    ///
    /// Self-service registration always produces the guest role; staff and
    /// admin accounts are provisioned separately.
    ///
    /// # Arguments
    /// - `dto` - Name, email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError)` - Validation failure, duplicate email, or database error
    pub async fn register(&self, dto: RegisterDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        let email = dto.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        if dto.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = Self::hash_password(&dto.password)?;

        let user = repo
            .create(CreateUserParams {
                name,
                email,
                password_hash,
                role: UserRole::Guest,
            })
            .await?;

        Ok(user)
    }

    /// Authenticates an account by email and password.
    ///
    /// Unknown emails and wrong passwords both map to the same invalid
    /// credentials error so the response does not reveal which one failed.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated account
    /// - `Err(AppError)` - Invalid credentials, disabled account, or database error
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let email = dto.email.trim().to_lowercase();

        let Some(user) = repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !Self::verify_password(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        Ok(user)
    }

    /// Hashes a plaintext password with Argon2 and a fresh random salt.
    ///
    /// # Returns
    /// - `Ok(String)` - PHC-format hash string for storage
    /// - `Err(AppError)` - Hashing failure
    pub fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// Verifies a plaintext password against a stored PHC-format hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match
    /// - `Err(AppError)` - Stored hash is malformed
    fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::InternalError(format!("Malformed password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Converts a user domain model into its public DTO.
    ///
    /// The password hash is deliberately never part of the DTO.
    pub fn to_dto(user: &User) -> UserDto {
        use sea_orm::ActiveEnum;

        UserDto {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_value(),
        }
    }
}
