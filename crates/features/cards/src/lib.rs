//! Presentation components for faction pages.
//!
//! Every component here is a pure mapping from domain data to markup; no
//! state is retained between renders and nothing touches the filesystem.
//! The [`render`] module turns the component tree into static HTML strings;
//! writing them to disk is the application's job.

mod index;
mod layout;
mod page;
mod render;
mod unit_card;

pub use index::{IndexEntry, IndexPage};
pub use layout::FactionLayout;
pub use page::FactionPage;
pub use render::{
    render_faction_document, render_faction_page, render_index_document, render_index_page,
};
pub use unit_card::UnitCard;
