pub mod user;

pub use user::UserService;

use async_trait::async_trait;
use shared_models::{RemoteCallError, User};

use crate::models::NewUser;

/// Remote user-creation call.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, RemoteCallError>;
}
