//! Via transition rules.
//!
//! A via rule connects two layers at a point by painting a fixed stack
//! of boxes centered on the transition. Rules are keyed by an unordered
//! pair of (layer, orientation) endpoints, since the geometry of a
//! transition does not depend on which side the route arrives from.

use geometry::dir::Dir;
use geometry::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layer::MotuLayer;

/// One endpoint of a layer transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ViaEndpoint<L> {
    /// The layer on this side of the transition.
    pub layer: L,
    /// The wire orientation on this side, if any.
    ///
    /// On a rule, [`None`] is a wildcard that matches any requested
    /// orientation. On a request, [`None`] means the orientation is
    /// unknown and only wildcard rules can match.
    pub dir: Option<Dir>,
}

impl<L> ViaEndpoint<L> {
    /// Creates a new endpoint.
    pub const fn new(layer: L, dir: Option<Dir>) -> Self {
        Self { layer, dir }
    }
}

/// A single via rule.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ViaRule<L> {
    /// The first endpoint.
    pub a: ViaEndpoint<L>,
    /// The second endpoint.
    pub b: ViaEndpoint<L>,
    /// Boxes painted when the rule fires, centered on the transition
    /// point, bottom layer first.
    pub stack: Vec<(L, Rect)>,
}

impl<L: MotuLayer> ViaRule<L> {
    /// Creates a new rule between the given endpoints.
    pub fn new(a: ViaEndpoint<L>, b: ViaEndpoint<L>, stack: Vec<(L, Rect)>) -> Self {
        Self { a, b, stack }
    }

    /// Checks whether this rule applies to a `from -> to` request,
    /// in either order.
    pub fn matches(&self, from: ViaEndpoint<L>, to: ViaEndpoint<L>) -> bool {
        (endpoint_matches(self.a, from) && endpoint_matches(self.b, to))
            || (endpoint_matches(self.a, to) && endpoint_matches(self.b, from))
    }
}

fn endpoint_matches<L: MotuLayer>(rule: ViaEndpoint<L>, request: ViaEndpoint<L>) -> bool {
    if rule.layer != request.layer {
        return false;
    }
    match rule.dir {
        None => true,
        Some(dir) => request.dir == Some(dir),
    }
}

/// An ordered collection of via rules.
///
/// Rules are consulted in insertion order and the first match wins, so
/// more specific rules should precede broader ones.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ViaCatalog<L> {
    rules: Vec<ViaRule<L>>,
}

impl<L: MotuLayer> ViaCatalog<L> {
    /// Creates a catalog from rules in priority order.
    pub fn new(rules: Vec<ViaRule<L>>) -> Self {
        Self { rules }
    }

    /// Finds the first rule matching the given transition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoViaRule`] if no rule matches.
    pub fn resolve(&self, from: ViaEndpoint<L>, to: ViaEndpoint<L>) -> Result<&ViaRule<L>> {
        self.rules
            .iter()
            .find(|rule| rule.matches(from, to))
            .ok_or_else(|| Error::NoViaRule {
                from: from.layer.magic_name(),
                from_dir: from.dir,
                to: to.layer.magic_name(),
                to_dir: to.dir,
            })
    }

    /// The rules in this catalog, in priority order.
    pub fn rules(&self) -> &[ViaRule<L>] {
        &self.rules
    }

    /// The number of rules in this catalog.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the catalog has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<L: MotuLayer> FromIterator<ViaRule<L>> for ViaCatalog<L> {
    fn from_iter<T: IntoIterator<Item = ViaRule<L>>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
