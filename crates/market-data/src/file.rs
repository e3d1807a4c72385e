use crate::error::MarketDataError;
use core_types::PricePoint;
use std::path::Path;

/// Reads a series saved as a JSON array of `PricePoint`s.
pub fn load_series_file(path: &Path) -> Result<Vec<PricePoint>, MarketDataError> {
    let text = std::fs::read_to_string(path)?;
    let points: Vec<PricePoint> = serde_json::from_str(&text)
        .map_err(|e| MarketDataError::Deserialization(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), points = points.len(), "Loaded series file");
    Ok(points)
}
