use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use ral_palette::{hex_to_rgb, normalize_hex, ConvertError, Converter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::TableStore;

/// Query for RAL code lookups
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RalQuery {
    /// RAL code, e.g. `RAL 9010`
    pub ral: Option<String>,
}

impl RalQuery {
    fn code(&self) -> Result<&str, ApiError> {
        self.ral
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::MissingParam("ral"))
    }
}

/// Query for hex color conversions
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HexQuery {
    /// Hex color with or without `#` (encode it as `%23`), 3 or 6 digits
    pub hex: Option<String>,
}

impl HexQuery {
    fn hex(&self) -> Result<&str, ApiError> {
        self.hex
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ApiError::MissingParam("hex"))
    }
}

/// Response from the /api/ral-to-hex endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RalToHexResponse {
    /// RAL code that was looked up
    pub ral: String,
    /// Hex value of the RAL color
    pub hex: String,
}

/// Response from the /api/ral-to-name endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RalToNameResponse {
    /// RAL code that was looked up
    pub ral: String,
    /// English name of the RAL color
    pub name: String,
}

/// Response from the /api/hex-to-ral endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct HexToRalResponse {
    /// Closest RAL code
    pub ral: String,
    /// English name of the closest RAL color
    pub name: String,
    /// Hex value of the closest RAL color
    pub hex: String,
    /// Similarity percentage with two decimals, e.g. "97.35"
    pub similarity: String,
}

/// Response from the /api/hex-to-rgb endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct HexToRgbResponse {
    /// Normalized input, `#` followed by six digits
    pub hex: String,
    /// Red, green and blue channels
    #[schema(value_type = Vec<u8>)]
    pub rgb: [u8; 3],
}

/// Convert a RAL code to its hex value
#[utoipa::path(
    get,
    path = "/api/ral-to-hex",
    params(RalQuery),
    responses(
        (status = 200, description = "RAL code found", body = RalToHexResponse),
        (status = 400, description = "Missing ral parameter"),
        (status = 404, description = "RAL code not found"),
    ),
    tag = "Conversion"
)]
pub async fn handle_ral_to_hex(
    State(store): State<Arc<TableStore>>,
    Query(query): Query<RalQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let code = query.code()?;
    let table = store.snapshot();
    let hex = Converter::new(&table).ral_to_hex(code)?;

    tracing::debug!(ral = code, hex, "RAL to hex");

    Ok(Json(RalToHexResponse {
        ral: code.to_string(),
        hex: hex.to_string(),
    }))
}

/// Convert a RAL code to its English name
#[utoipa::path(
    get,
    path = "/api/ral-to-name",
    params(RalQuery),
    responses(
        (status = 200, description = "RAL code found", body = RalToNameResponse),
        (status = 400, description = "Missing ral parameter"),
        (status = 404, description = "RAL code not found"),
    ),
    tag = "Conversion"
)]
pub async fn handle_ral_to_name(
    State(store): State<Arc<TableStore>>,
    Query(query): Query<RalQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let code = query.code()?;
    let table = store.snapshot();
    let name = Converter::new(&table).ral_to_name(code)?;

    tracing::debug!(ral = code, name, "RAL to name");

    Ok(Json(RalToNameResponse {
        ral: code.to_string(),
        name: name.to_string(),
    }))
}

/// Find the RAL color closest to a hex color
///
/// Scans the whole reference table for the smallest Euclidean distance in
/// RGB space. The similarity is `100 - distance / sqrt(3 * 255²) * 100`.
#[utoipa::path(
    get,
    path = "/api/hex-to-ral",
    params(HexQuery),
    responses(
        (status = 200, description = "Closest RAL color", body = HexToRalResponse),
        (status = 400, description = "Missing or malformed hex parameter"),
        (status = 503, description = "Reference table not loaded"),
    ),
    tag = "Conversion"
)]
pub async fn handle_hex_to_ral(
    State(store): State<Arc<TableStore>>,
    Query(query): Query<HexQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let hex = query.hex()?;
    let table = store.snapshot();
    let found = Converter::new(&table).hex_to_ral(hex)?;
    let similarity = found.similarity_label();

    tracing::debug!(
        hex,
        ral = %found.code,
        similarity = %similarity,
        "Hex to RAL"
    );

    Ok(Json(HexToRalResponse {
        ral: found.code,
        name: found.name,
        hex: found.hex,
        similarity,
    }))
}

/// Convert a hex color to RGB channels
#[utoipa::path(
    get,
    path = "/api/hex-to-rgb",
    params(HexQuery),
    responses(
        (status = 200, description = "Parsed color", body = HexToRgbResponse),
        (status = 400, description = "Missing or malformed hex parameter"),
    ),
    tag = "Conversion"
)]
pub async fn handle_hex_to_rgb(
    Query(query): Query<HexQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let normalized = normalize_hex(query.hex()?).map_err(ConvertError::from)?;
    let rgb = hex_to_rgb(&normalized).map_err(ConvertError::from)?;

    Ok(Json(HexToRgbResponse {
        hex: normalized,
        rgb: rgb.to_bytes(),
    }))
}
