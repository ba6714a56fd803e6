//! Breadth-first layer walker.
//!
//! The walker is seeded from the first consumer of the first declared input
//! and expands each layer along both its output edges (consumers) and its
//! input edges (producers). Every layer weakly connected to the seed is
//! produced exactly once.
//!
//! Only the first declared input seeds the walk. Layers fed solely by other
//! inputs are reached only through producer edges from the seeded component.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::rc::Rc;

use crate::types::{layer_id, LayerId, LayerRef, WalkError, WalkResult};

use super::{Network, NetworkDescriptor};

/// Cursor over the layers of a network in breadth-first order.
///
/// A walker borrows its network, so the layers it hands out cannot outlive
/// the graph owner. It never mutates the graph; any number of walkers may
/// run over the same network.
pub struct LayerWalker<'a, N: ?Sized = Network> {
    /// Layers already enqueued. Grows monotonically.
    visited: HashSet<LayerId>,
    /// Layers pending expansion. The head is the current position.
    frontier: VecDeque<LayerRef>,
    /// `None` is the end sentinel.
    current: Option<LayerRef>,
    network: Option<&'a N>,
}

impl<'a, N: NetworkDescriptor + ?Sized> LayerWalker<'a, N> {
    /// Create a walker positioned at the seed layer of `network`.
    ///
    /// The walker starts at the end sentinel if the network declares no
    /// inputs or its first input has no consumers.
    pub fn new(network: &'a N) -> Self {
        let mut walker = Self {
            network: Some(network),
            ..Self::default()
        };

        let inputs = network.inputs_info();
        if inputs.len() > 1 {
            log::debug!(
                "Network declares {} inputs; seeding from the first only",
                inputs.len()
            );
        }

        if let Some((name, info)) = inputs.iter().next() {
            let seed = info.input_data().input_to().values().next().cloned();
            match seed {
                Some(seed) => {
                    log::debug!("Seeding walk from input '{}' at '{}'", name, seed.name());
                    walker.visited.insert(layer_id(&seed));
                    walker.frontier.push_back(Rc::clone(&seed));
                    walker.current = Some(seed);
                }
                None => log::debug!("Input '{}' has no consumers", name),
            }
        }

        walker
    }
}

impl<'a, N: ?Sized> LayerWalker<'a, N> {
    /// Move to the next layer and return the walker (pre-increment).
    pub fn advance(&mut self) -> &mut Self {
        self.current = self.next_layer();
        self
    }

    /// Move to the next layer (post-increment). No prior position is kept.
    pub fn step(&mut self) {
        self.current = self.next_layer();
    }

    /// The layer at the current position.
    ///
    /// Fails with [`WalkError::OutOfBounds`] at the end sentinel; compare
    /// against [`LayerWalker::default`] or check [`LayerWalker::is_end`] first.
    pub fn current(&self) -> WalkResult<&LayerRef> {
        self.current.as_ref().ok_or(WalkError::OutOfBounds)
    }

    /// Whether the walker is at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Number of layers enqueued so far, including the current one.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Pop the frontier head, enqueue its unseen neighbours, and return the
    /// new head.
    fn next_layer(&mut self) -> Option<LayerRef> {
        let layer = self.frontier.pop_front()?;
        log::trace!("Expanding layer '{}'", layer.name());

        // Consumers
        for data in layer.out_data().iter() {
            for child in data.input_to().values() {
                self.enqueue(child);
            }
        }

        // Producers
        for input in layer.ins_data().iter() {
            let parent = input
                .upgrade()
                .and_then(|data| data.creator_layer().upgrade());
            if let Some(parent) = parent {
                self.enqueue(&parent);
            }
        }

        self.frontier.front().cloned()
    }

    fn enqueue(&mut self, layer: &LayerRef) {
        if self.visited.insert(layer_id(layer)) {
            self.frontier.push_back(Rc::clone(layer));
        }
    }
}

impl<N: ?Sized> Default for LayerWalker<'_, N> {
    /// The end sentinel.
    fn default() -> Self {
        Self {
            visited: HashSet::new(),
            frontier: VecDeque::new(),
            current: None,
            network: None,
        }
    }
}

impl<N: ?Sized> PartialEq for LayerWalker<'_, N> {
    /// Same position. Positions at a layer compare by layer identity and
    /// network identity; every walker at the end sentinel is equal to every
    /// other, whatever network it was bound to.
    fn eq(&self, other: &Self) -> bool {
        match (&self.current, &other.current) {
            (None, None) => true,
            (Some(a), Some(b)) => self.same_network(other) && Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<N: ?Sized> LayerWalker<'_, N> {
    fn same_network(&self, other: &Self) -> bool {
        match (self.network, other.network) {
            (Some(a), Some(b)) => ptr::addr_eq(a as *const N, b as *const N),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<N: ?Sized> Eq for LayerWalker<'_, N> {}

impl<N: ?Sized> Iterator for LayerWalker<'_, N> {
    type Item = LayerRef;

    /// Yield the current layer, then advance.
    fn next(&mut self) -> Option<LayerRef> {
        let current = self.current.take()?;
        self.current = self.next_layer();
        Some(current)
    }
}

impl<N: ?Sized> FusedIterator for LayerWalker<'_, N> {}

impl<N: ?Sized> fmt::Debug for LayerWalker<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerWalker")
            .field("current", &self.current.as_ref().map(|l| l.name()))
            .field("frontier", &self.frontier.len())
            .field("visited", &self.visited.len())
            .field("bound", &self.network.is_some())
            .finish()
    }
}
