use super::Geolocator;
use crate::config::{IP_LOCATE_URL, LOCATE_TIMEOUT};
use crate::error::{AppError, AppResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    message: Option<String>,
}

/// Guesses the user's city from their public IP address via ip-api.com.
pub struct IpApiLocator {
    agent: ureq::Agent,
    url: String,
}

impl IpApiLocator {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(LOCATE_TIMEOUT).build(),
            url: IP_LOCATE_URL.to_string(),
        }
    }
}

impl Default for IpApiLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Geolocator for IpApiLocator {
    fn locate(&self) -> AppResult<String> {
        let response = self.agent.get(&self.url).call()?;
        let body = response
            .into_string()
            .map_err(|e| AppError::network(format!("Failed to read response: {}", e)))?;
        let city = parse_locate_response(&body)?;
        log::info!("Located city: {}", city);
        Ok(city)
    }
}

fn parse_locate_response(body: &str) -> AppResult<String> {
    let response: IpApiResponse = serde_json::from_str(body)
        .map_err(|e| AppError::location(format!("Malformed response: {}", e)))?;

    if response.status != "success" {
        return Err(AppError::location(
            response.message.unwrap_or(response.status),
        ));
    }

    let city = response.city.trim();
    if city.is_empty() {
        return Err(AppError::location("No city in response"));
    }
    Ok(city.to_string())
}
