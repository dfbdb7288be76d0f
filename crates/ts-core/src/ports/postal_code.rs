use async_trait::async_trait;

use crate::ports::errors::PostalCodeError;
use crate::school::PostalAddress;

/// Resolves a Brazilian postal code (CEP, digits only) to an address.
#[async_trait]
pub trait PostalCodePort: Send + Sync {
    async fn lookup(&self, postal_code: &str) -> Result<PostalAddress, PostalCodeError>;
}
