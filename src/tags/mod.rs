pub mod dictionary;

pub use dictionary::suggest_tags;
