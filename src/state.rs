//! Application state traits for dependency injection
//!
//! Handlers are generic over `HasServices`, so the same handler code runs
//! against the production `AppState` and against test states that wrap a
//! pre-populated or instrumented catalog.

use crate::auth::RequestAuthenticator;
use crate::repository::CatalogRepository;
use crate::service::CatalogService;

/// Trait for application state that provides access to all services.
pub trait HasServices: Clone + Send + Sync + 'static {
    /// The catalog repository type
    type CatalogRepo: CatalogRepository;

    /// Get the catalog service
    fn catalog_service(&self) -> &CatalogService<Self::CatalogRepo>;

    /// Get the request signature verifier for protected routes
    fn authenticator(&self) -> &RequestAuthenticator;
}
