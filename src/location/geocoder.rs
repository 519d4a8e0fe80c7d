//! Reverse geocoding against a Google-compatible endpoint.
//!
//! Never fails: an address is a nicety on top of the coordinates.

use crate::api::{OutgoingRequest, Transport};
use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::sync::Arc;

pub const ADDRESS_NOT_FOUND: &str = "Address not found";
pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

const RESULT_TYPE: &str = "street_address|premise|route";
const LOCATION_TYPE: &str = "ROOFTOP|RANGE_INTERPOLATED|GEOMETRIC_CENTER";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
}

pub struct Geocoder {
    transport: Arc<dyn Transport>,
    endpoint: String,
    api_key: String,
}

impl Geocoder {
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Full request URL for the given coordinates.
    pub fn request_url(&self, latitude: f64, longitude: f64) -> Option<String> {
        url::Url::parse_with_params(
            &self.endpoint,
            &[
                ("latlng", format!("{},{}", latitude, longitude).as_str()),
                ("key", self.api_key.as_str()),
                ("result_type", RESULT_TYPE),
                ("location_type", LOCATION_TYPE),
            ],
        )
        .ok()
        .map(String::from)
    }

    pub async fn address_for(&self, latitude: f64, longitude: f64) -> String {
        let Some(url) = self.request_url(latitude, longitude) else {
            return ADDRESS_NOT_AVAILABLE.to_string();
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let request = OutgoingRequest {
            method: Method::GET,
            url,
            headers,
            body: None,
        };

        let response = match self.transport.execute(request).await {
            Ok(r) => r,
            Err(_) => return ADDRESS_NOT_AVAILABLE.to_string(),
        };

        match response.json::<GeocodeResponse>() {
            Ok(body) => first_address(body).unwrap_or_else(|| ADDRESS_NOT_FOUND.to_string()),
            Err(_) => ADDRESS_NOT_AVAILABLE.to_string(),
        }
    }
}

fn first_address(body: GeocodeResponse) -> Option<String> {
    if body.status != "OK" {
        return None;
    }
    body.results.into_iter().next().map(|r| r.formatted_address)
}
