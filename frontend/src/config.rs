/// Configuration for the frontend application

/// Base URL for static assets
/// - For local development: "/"
/// - For static demo hosting with mock data: "/wonderful-gallery/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/wonderful-gallery/";

// API base URL, read at compile time; defaults to the local dev server
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("WONDERFUL_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8001/api",
};

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
