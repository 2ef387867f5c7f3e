//! Product carbon and water footprint estimates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::backend::GenerativeBackend;
use crate::error::AssistantError;
use crate::prompts::{CARBON_SYSTEM_PROMPT, WATER_SYSTEM_PROMPT};
use crate::wire::{Content, GenerateRequest, GenerationConfig};

pub const PRODUCTS: &[&str] = &[
    "Wheat", "Rice", "Corn", "Soybeans", "Potatoes", "Tomatoes", "Apples", "Bananas", "Coffee",
    "Beef", "Chicken", "Pork", "Milk", "Eggs",
];

pub const REGIONS: &[&str] = &[
    "North America",
    "Europe",
    "Asia",
    "South America",
    "Africa",
    "Australia",
    "Global Average",
];

/// Transport distance range offered for carbon estimates, km.
pub const MAX_TRANSPORT_KM: f64 = 1000.0;
pub const DEFAULT_TRANSPORT_KM: f64 = 100.0;

/// Whether a product is in the offered list.
#[must_use]
pub fn is_known_product(product: &str) -> bool {
    PRODUCTS.iter().any(|p| p.eq_ignore_ascii_case(product.trim()))
}

/// Whether a region is in the offered list.
#[must_use]
pub fn is_known_region(region: &str) -> bool {
    REGIONS.iter().any(|r| r.eq_ignore_ascii_case(region.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductionMethod {
    #[default]
    Conventional,
    Organic,
    Regenerative,
    Hydroponic,
}

impl ProductionMethod {
    pub const ALL: [Self; 4] = [
        Self::Conventional,
        Self::Organic,
        Self::Regenerative,
        Self::Hydroponic,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conventional => "conventional",
            Self::Organic => "organic",
            Self::Regenerative => "regenerative",
            Self::Hydroponic => "hydroponic",
        }
    }
}

impl fmt::Display for ProductionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductionMethod {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AssistantError::InvalidParameter {
                field: "production method",
                reason: format!("unknown method {s:?}"),
            })
    }
}

/// How the crop is watered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Irrigation {
    #[default]
    Surface,
    Sprinkler,
    Drip,
    Micro,
    /// No irrigation at all.
    Rainfed,
}

impl Irrigation {
    pub const ALL: [Self; 5] = [
        Self::Surface,
        Self::Sprinkler,
        Self::Drip,
        Self::Micro,
        Self::Rainfed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::Sprinkler => "sprinkler",
            Self::Drip => "drip",
            Self::Micro => "micro",
            Self::Rainfed => "rainfed",
        }
    }
}

impl fmt::Display for Irrigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Irrigation {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AssistantError::InvalidParameter {
                field: "irrigation type",
                reason: format!("unknown irrigation {s:?}"),
            })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), AssistantError> {
    if value.trim().is_empty() {
        Err(AssistantError::MissingField(field))
    } else {
        Ok(())
    }
}

fn check_quantity(quantity_kg: f64) -> Result<(), AssistantError> {
    if quantity_kg.is_finite() && quantity_kg > 0.0 {
        Ok(())
    } else {
        Err(AssistantError::InvalidParameter {
            field: "quantity",
            reason: format!("{quantity_kg} kg is not a positive amount"),
        })
    }
}

fn default_quantity_kg() -> f64 {
    1.0
}

fn default_transport_km() -> f64 {
    DEFAULT_TRANSPORT_KM
}

/// Parameters of a carbon estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonEstimateRequest {
    pub product: String,
    #[serde(default = "default_quantity_kg")]
    pub quantity_kg: f64,
    pub region: String,
    #[serde(default)]
    pub method: ProductionMethod,
    #[serde(default = "default_transport_km")]
    pub transport_km: f64,
}

impl CarbonEstimateRequest {
    /// One kilogram, conventional, 100 km of transport.
    #[must_use]
    pub fn new(product: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            quantity_kg: default_quantity_kg(),
            region: region.into(),
            method: ProductionMethod::default(),
            transport_km: default_transport_km(),
        }
    }

    pub fn validate(&self) -> Result<(), AssistantError> {
        require("product", &self.product)?;
        require("region", &self.region)?;
        check_quantity(self.quantity_kg)?;
        if !(0.0..=MAX_TRANSPORT_KM).contains(&self.transport_km) {
            return Err(AssistantError::InvalidParameter {
                field: "transport distance",
                reason: format!("{} km is outside 0..={MAX_TRANSPORT_KM}", self.transport_km),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn user_prompt(&self) -> String {
        format!(
            "Calculate the carbon footprint for:\n\
             - Product: {}\n\
             - Quantity: {} kg\n\
             - Region: {}\n\
             - Production Method: {}\n\
             - Transport Distance: {} km",
            self.product.trim().to_lowercase(),
            self.quantity_kg,
            self.region.trim().to_lowercase(),
            self.method,
            self.transport_km
        )
    }
}

/// Parameters of a water estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterEstimateRequest {
    pub product: String,
    #[serde(default = "default_quantity_kg")]
    pub quantity_kg: f64,
    pub region: String,
    #[serde(default)]
    pub method: ProductionMethod,
    #[serde(default)]
    pub irrigation: Irrigation,
}

impl WaterEstimateRequest {
    /// One kilogram, conventional, surface irrigation.
    #[must_use]
    pub fn new(product: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            quantity_kg: default_quantity_kg(),
            region: region.into(),
            method: ProductionMethod::default(),
            irrigation: Irrigation::default(),
        }
    }

    pub fn validate(&self) -> Result<(), AssistantError> {
        require("product", &self.product)?;
        require("region", &self.region)?;
        check_quantity(self.quantity_kg)
    }

    #[must_use]
    pub fn user_prompt(&self) -> String {
        format!(
            "Calculate the water footprint for:\n\
             - Product: {}\n\
             - Quantity: {} kg\n\
             - Region: {}\n\
             - Production Method: {}\n\
             - Irrigation Type: {}",
            self.product.trim().to_lowercase(),
            self.quantity_kg,
            self.region.trim().to_lowercase(),
            self.method,
            self.irrigation
        )
    }
}

/// One slice of an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateShare {
    pub category: String,
    pub value: f64,
    /// 0 to 100.
    #[serde(default)]
    pub percentage: f64,
}

/// A footprint estimate as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEstimate {
    pub total_footprint: f64,
    pub unit: String,
    #[serde(default)]
    pub breakdown: Vec<EstimateShare>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Remove a surrounding Markdown code fence, if present.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse the candidate text of an estimate response.
pub fn parse_estimate(text: &str) -> Result<ProductEstimate, AssistantError> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|e| AssistantError::MalformedEstimate(e.to_string()))
}

/// Builds estimate requests and interprets the answers.
pub struct Estimator<B> {
    backend: B,
}

impl<B: GenerativeBackend> Estimator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The request sent for a carbon estimate.
    #[must_use]
    pub fn carbon_request(request: &CarbonEstimateRequest) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content::user(request.user_prompt())],
            system_instruction: Some(Content::instruction(CARBON_SYSTEM_PROMPT)),
            generation_config: GenerationConfig::ESTIMATE,
        }
    }

    /// The request sent for a water estimate.
    #[must_use]
    pub fn water_request(request: &WaterEstimateRequest) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content::user(request.user_prompt())],
            system_instruction: Some(Content::instruction(WATER_SYSTEM_PROMPT)),
            generation_config: GenerationConfig::ESTIMATE,
        }
    }

    pub fn estimate_carbon(
        &self,
        request: &CarbonEstimateRequest,
    ) -> Result<ProductEstimate, AssistantError> {
        request.validate()?;
        warn_if_unlisted(&request.product, &request.region);
        self.run(&Self::carbon_request(request))
    }

    pub fn estimate_water(
        &self,
        request: &WaterEstimateRequest,
    ) -> Result<ProductEstimate, AssistantError> {
        request.validate()?;
        warn_if_unlisted(&request.product, &request.region);
        self.run(&Self::water_request(request))
    }

    fn run(&self, request: &GenerateRequest) -> Result<ProductEstimate, AssistantError> {
        let response = self.backend.generate(request)?;
        let text = response.first_text().ok_or(AssistantError::EmptyResponse)?;
        let estimate = parse_estimate(text)?;
        tracing::info!(
            backend = self.backend.name(),
            total = estimate.total_footprint,
            unit = %estimate.unit,
            "estimate received"
        );
        Ok(estimate)
    }
}

fn warn_if_unlisted(product: &str, region: &str) {
    if !is_known_product(product) {
        tracing::warn!(product, "product is not in the offered list");
    }
    if !is_known_region(region) {
        tracing::warn!(region, "region is not in the offered list");
    }
}
