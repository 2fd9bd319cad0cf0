pub mod page;
pub mod sitemap;
pub mod share;

pub use page::{render_not_found_page, render_post_page};
pub use sitemap::render_sitemap;
pub use share::{share_links, ShareLinks};
