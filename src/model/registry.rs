use super::body::{Body, BodyID};

/// All stationary bodies in play, in insertion order.
///
/// The order matters: force and collision checks both walk the bodies from
/// the first one appended, and the first collision found wins.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    // Invariant: a body's ID is its index
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        BodyRegistry { bodies: Vec::new() }
    }

    /// Adds a body at the end of the traversal order. No duplicate checks.
    pub fn append(&mut self, body: Body) -> BodyID {
        let id = BodyID(self.bodies.len());
        self.bodies.push(body);
        id
    }

    pub fn head(&self) -> Option<BodyID> {
        if self.bodies.is_empty() {
            None
        } else {
            Some(BodyID(0))
        }
    }

    pub fn get(&self, id: BodyID) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Walks every body from the head, in insertion order. Each call starts
    /// over from the head.
    pub fn iter(&self) -> impl Iterator<Item = (BodyID, &Body)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .map(|(idx, body)| (BodyID(idx), body))
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }
}

impl FromIterator<Body> for BodyRegistry {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        let mut registry = BodyRegistry::new();
        for body in iter {
            registry.append(body);
        }
        registry
    }
}
