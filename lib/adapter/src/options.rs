use std::future::Future;

use async_trait::async_trait;

use crate::{error::HttpQueryError, request::NormalizedRequest};

/// Produces the executor's configuration for a request.
///
/// A fixed configuration is served by [`StaticOptions`], a per-request one by [`OptionsFn`].
#[async_trait(?Send)]
pub trait OptionsResolver<C>: Send + Sync {
    async fn resolve(&self, request: &NormalizedRequest) -> Result<C, HttpQueryError>;
}

pub struct StaticOptions<C>(pub C);

#[async_trait(?Send)]
impl<C> OptionsResolver<C> for StaticOptions<C>
where
    C: Clone + Send + Sync + 'static,
{
    async fn resolve(&self, _request: &NormalizedRequest) -> Result<C, HttpQueryError> {
        Ok(self.0.clone())
    }
}

/// Resolves options with a function of the request.
///
/// The returned future must not borrow the request; copy what it needs out of it first.
/// Synchronous resolvers can return [`std::future::ready`].
pub struct OptionsFn<F>(pub F);

#[async_trait(?Send)]
impl<C, F, Fut> OptionsResolver<C> for OptionsFn<F>
where
    F: Fn(&NormalizedRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<C, HttpQueryError>> + 'static,
    C: 'static,
{
    async fn resolve(&self, request: &NormalizedRequest) -> Result<C, HttpQueryError> {
        (self.0)(request).await
    }
}
