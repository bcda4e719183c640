pub mod form;
pub mod models;
pub mod schema;
pub mod services;

pub use form::*;
pub use models::*;
pub use schema::*;
pub use services::*;
