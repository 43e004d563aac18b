//! Result type alias for Waymark

use super::errors::WaymarkError;

/// Result type alias for fallible Waymark operations
///
/// # Examples
///
/// ```
/// use waymark::domain::result::Result;
/// use waymark::domain::errors::WaymarkError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(WaymarkError::Catalog("empty file".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, WaymarkError>;
