mod build;
mod render;
mod outline;
mod tags;

pub use build::handle_build_command;
pub use render::handle_render_command;
pub use outline::handle_outline_command;
pub use tags::handle_tags_command;
