//! Ordered middleware composition.
//!
//! axum's `.layer()` makes the *last* call the outermost wrapper. [`Chain`]
//! flips that so gates read in the order they run: the first gate added sees
//! the request first and the response last.
//!
//! Layers go on with `MethodRouter::layer`, not `route_layer`. Gated routes
//! are `any(..)` routers, which hold only a fallback, and `route_layer`
//! panics on a method router without method routes.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::Request,
    response::IntoResponse,
    routing::{MethodRouter, Route},
};
use tower::{Layer, Service};

type Wrapper<S> = Arc<dyn Fn(MethodRouter<S>) -> MethodRouter<S> + Send + Sync>;

/// An ordered list of layers to wrap around a handler.
///
/// A `Chain` is a recipe. It can be extended, cloned and applied to any
/// number of handlers.
pub struct Chain<S = ()> {
    wrappers: Vec<Wrapper<S>>,
}

impl<S> Clone for Chain<S> {
    fn clone(&self) -> Self {
        Self {
            wrappers: self.wrappers.clone(),
        }
    }
}

impl<S> Default for Chain<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Chain<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            wrappers: Vec::new(),
        }
    }

    /// Appends `layer`. It runs after every layer already in the chain.
    pub fn with<L>(mut self, layer: L) -> Self
    where
        L: Layer<Route> + Clone + Send + Sync + 'static,
        L::Service: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        self.wrappers
            .push(Arc::new(move |router: MethodRouter<S>| {
                router.layer(layer.clone())
            }));
        self
    }

    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    /// Wraps `handler` so the first layer added is the outermost.
    ///
    /// An empty chain returns `handler` unchanged.
    pub fn wrap(&self, handler: MethodRouter<S>) -> MethodRouter<S> {
        self.wrappers
            .iter()
            .rev()
            .fold(handler, |router, wrapper| wrapper(router))
    }
}
