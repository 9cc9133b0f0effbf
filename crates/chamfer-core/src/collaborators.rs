//! Seams to the world outside the smoother.

use crate::{
    error::{BoxError, Result},
    sampler::LinearSampler,
    waypoint::Waypoint,
};

/// Resolves an object identifier to the entity a path belongs to.
pub trait ObjectRegistry {
    type Handle;

    /// Look up `id`, returning [`crate::Error::NotFound`] when unknown.
    fn resolve(&self, id: &str) -> Result<Self::Handle>;
}

/// Decides whether a sampled path is collision-free for an object.
///
/// Must be deterministic for a fixed world state.
pub trait ClearanceOracle<H> {
    fn is_clear(&self, object: &H, path: &[Waypoint]) -> std::result::Result<bool, BoxError>;
}

/// Everything the smoother talks to, borrowed for one call.
pub struct Collaborators<'a, R, O, S> {
    pub registry: &'a R,
    pub oracle: &'a O,
    pub sampler: &'a S,
}

impl<'a, R, O, S> Collaborators<'a, R, O, S>
where
    R: ObjectRegistry,
    O: ClearanceOracle<R::Handle>,
    S: LinearSampler,
{
    pub fn new(registry: &'a R, oracle: &'a O, sampler: &'a S) -> Self {
        Self {
            registry,
            oracle,
            sampler,
        }
    }
}

impl<R, O, S> Clone for Collaborators<'_, R, O, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, O, S> Copy for Collaborators<'_, R, O, S> {}
