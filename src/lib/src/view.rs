pub mod auth;
pub mod entries;
pub mod message;

pub use crate::view::auth::{AuthResponse, Credentials, ProfileResponse, Registration};
pub use crate::view::entries::{
    CommentNew, CommentsResponse, EntryDraft, LikeStatus, PaginatedEntries,
};
pub use crate::view::message::ErrorMessage;
