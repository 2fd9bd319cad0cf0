use std::path::PathBuf;

/// Default output directory for built pages
pub fn default_destination() -> PathBuf {
    PathBuf::from("./_site")
}

/// Default public base URL of the site
pub fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

/// Default site title
pub fn default_site_title() -> String {
    "Petalpress Blog".to_string()
}

/// Default site description
pub fn default_site_description() -> String {
    "A blog rendered with Petalpress".to_string()
}

/// Default content store dataset
pub fn default_dataset() -> String {
    "production".to_string()
}

/// Default content store API version
pub fn default_api_version() -> String {
    "2023-05-03".to_string()
}
