//! Member table state and the one-shot loader that feeds it.

pub mod controller;
pub mod error;
pub mod source;

pub use controller::{MemberTableController, TableRow, TableView, PAGE_SIZE};
pub use error::FetchError;
pub use source::{load_members, HttpMemberSource, MemberSource, DEFAULT_MEMBERS_URL};
