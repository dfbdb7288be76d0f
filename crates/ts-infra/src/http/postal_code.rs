//! CEP lookups against the ViaCEP web service.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use ts_core::ports::{PostalCodeError, PostalCodePort};
use ts_core::school::PostalAddress;

use super::join_url;

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: Option<Value>,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl ViaCepResponse {
    /// ViaCEP answers unknown codes with `200 {"erro": true}` (or `"true"`).
    fn is_error(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag == "true",
            _ => false,
        }
    }
}

pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PostalCodePort for ViaCepClient {
    async fn lookup(&self, postal_code: &str) -> Result<PostalAddress, PostalCodeError> {
        let url = join_url(&self.base_url, &format!("{postal_code}/json/"));
        debug!(%url, "looking up postal code");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PostalCodeError::Lookup(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostalCodeError::Lookup(format!("unexpected status {status}")));
        }

        let body: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| PostalCodeError::Lookup(e.to_string()))?;
        if body.is_error() {
            return Err(PostalCodeError::NotFound);
        }

        Ok(PostalAddress {
            street: body.logradouro,
            district: body.bairro,
            city: body.localidade,
            state: body.uf,
        })
    }
}
