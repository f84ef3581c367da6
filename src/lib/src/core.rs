//! View-state controllers
//!
//! Each controller mirrors one screen of the archive: it owns the transient,
//! possibly stale copy of server state that screen shows, and only ever
//! replaces it wholesale with confirmed server responses.
//!

pub mod admin;
pub mod detail;
pub mod home;
pub mod listing;
pub mod query_state;
pub mod seo;
pub mod session;
pub mod share;
pub mod source;

pub use crate::core::admin::{AdminAccess, AdminPanel, EntryForm};
pub use crate::core::detail::{DetailPhase, DetailView, EntryInteraction, Outcome};
pub use crate::core::home::HomeView;
pub use crate::core::listing::{FetchTicket, ListingDisplay, ListingView, Reconciled};
pub use crate::core::query_state::QueryController;
pub use crate::core::session::{AuthConfigTokenStore, SessionContext, TokenStore};
pub use crate::core::share::{ShareData, ShareOutcome, ShareTarget};
pub use crate::core::source::{AuthSource, EntrySource, RemoteArchive};
