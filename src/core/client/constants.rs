//! Centralized constants for default endpoints and UA.

pub(crate) const USER_AGENT: &str = concat!("esg-dashboard/", env!("CARGO_PKG_VERSION"));

/// Dashboard API root; endpoint paths are appended as segments.
pub(crate) const DEFAULT_BASE_API: &str = "http://localhost:8000/api/";

/// Object storage root (`/object/{bucket}/{key}` is appended).
pub(crate) const DEFAULT_STORAGE_URL: &str = "http://localhost:54321/storage/v1/";

pub(crate) const DEFAULT_BUCKET: &str = "esg-images";
