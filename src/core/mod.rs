pub mod config;
pub mod error;
pub mod schema;
pub mod traits;

pub use config::*;
pub use error::*;
pub use schema::*;
pub use traits::*;
