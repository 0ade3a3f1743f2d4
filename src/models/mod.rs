//! Data models for the campaign site.
//!
//! Field names are camelCase on the wire to match the site's JavaScript bundle.

mod article;
mod idea;
mod news;
mod session;
mod site_content;
mod ticket;
mod video;
mod volunteer;

pub use article::*;
pub use idea::*;
pub use news::*;
pub use session::*;
pub use site_content::*;
pub use ticket::*;
pub use video::*;
pub use volunteer::*;
