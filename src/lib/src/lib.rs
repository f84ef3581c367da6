//! # libarchive - client library for BharatArchive
//!
//! BharatArchive is an archive of Indian cultural heritage: temples, festivals,
//! ancient technology, monuments, art and traditions. This library talks to the
//! archive's REST API and keeps the state of the browsing views consistent with
//! the server across asynchronous round trips.
//!
//! The crate is split the same way the views are:
//!
//! - [`api`] typed HTTP calls against the remote API
//! - [`model`] and [`view`] the data we hold and the shapes on the wire
//! - [`core`] the view-state controllers (query state, listing, detail, admin)
//! - [`config`] API url resolution and persisted bearer tokens
//!
//! ## Listing entries
//!
//! ```ignore
//! use libarchive::core::{ListingView, QueryController, RemoteArchive};
//! use libarchive::model::Location;
//!
//! let archive = RemoteArchive::from_config()?;
//! let mut query = QueryController::from_location("/explore?category=temple".parse()?);
//! let mut listing = ListingView::new();
//! listing.refresh(&archive, query.list_opts()).await;
//! ```
//!

pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod model;
pub mod opts;
pub mod util;
pub mod view;
