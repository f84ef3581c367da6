pub mod list_entries_opts;

pub use crate::opts::list_entries_opts::ListEntriesOpts;
