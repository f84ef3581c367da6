pub mod category;
pub mod comment;
pub mod entry;
pub mod location;
pub mod query;
pub mod user;

pub use crate::model::category::{Category, CategoryFilter};
pub use crate::model::comment::Comment;
pub use crate::model::entry::{Author, Entry, UserRef};
pub use crate::model::location::Location;
pub use crate::model::query::Query;
pub use crate::model::user::{Role, Session, User};
