//! Trait definitions for awork resource operations.
//!
//! Each model type implements the traits its endpoint supports. Every
//! operation reaches the API through a [`Requester`](crate::Requester).

mod create;
mod get;
mod list;
mod update;

pub use create::Create;
pub use get::Get;
pub use list::{List, DEFAULT_PAGE_SIZE};
pub use update::Update;
