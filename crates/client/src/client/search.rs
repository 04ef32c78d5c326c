//! Index-scoped API methods for [`EsClient`].
//!
//! Each method resolves the given [`IndicesPath`] first, so a failed index
//! inference returns before anything is sent.

use serde_json::Value;

use crate::client::EsClient;
use crate::endpoints;
use crate::error::Result;
use crate::parameters::RequestParameters;
use crate::path::IndicesPath;

impl EsClient {
    /// Search the selected indices.
    pub async fn search(
        &self,
        path: &mut IndicesPath,
        parameters: Option<RequestParameters>,
        query: Option<&Value>,
    ) -> Result<Value> {
        let resolved = self.resolve(path, parameters)?;
        endpoints::search(&self.http, &self.base_url, &resolved, query).await
    }

    /// Count documents in the selected indices.
    pub async fn count(
        &self,
        path: &mut IndicesPath,
        parameters: Option<RequestParameters>,
        query: Option<&Value>,
    ) -> Result<u64> {
        let resolved = self.resolve(path, parameters)?;
        endpoints::count(&self.http, &self.base_url, &resolved, query).await
    }

    /// Refresh the selected indices.
    pub async fn refresh(
        &self,
        path: &mut IndicesPath,
        parameters: Option<RequestParameters>,
    ) -> Result<()> {
        let resolved = self.resolve(path, parameters)?;
        endpoints::refresh(&self.http, &self.base_url, &resolved).await
    }
}
