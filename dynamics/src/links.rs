use serde::{Deserialize, Serialize};

use crate::DynamicsError;

/// One link of the chain: a point mass on the end of a massless rigid rod.
///
/// Both quantities must be strictly positive; a zero mass or length makes the
/// inertia matrix singular, so they are rejected at construction rather than
/// surfacing later as a solve failure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    mass: f64,
    length: f64,
}

impl Link {
    pub fn new(mass: f64, length: f64) -> Result<Self, DynamicsError> {
        if mass <= 0.0 {
            return Err(DynamicsError::MassNotPositive(mass));
        }
        if length <= 0.0 {
            return Err(DynamicsError::LengthNotPositive(length));
        }
        Ok(Self { mass, length })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

/// Immutable physical description of the chain: the links from the pivot
/// outward plus the gravitational constant shared by all of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendulumParameters {
    links: Vec<Link>,
    gravity: f64,
}

impl PendulumParameters {
    pub fn new(links: Vec<Link>, gravity: f64) -> Result<Self, DynamicsError> {
        if links.is_empty() {
            return Err(DynamicsError::NoLinks);
        }
        Ok(Self { links, gravity })
    }

    /// A chain of `n` identical links.
    pub fn uniform(n: usize, mass: f64, length: f64, gravity: f64) -> Result<Self, DynamicsError> {
        let link = Link::new(mass, length)?;
        Self::new(vec![link; n], gravity)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_mass() {
        assert_eq!(Link::new(0.0, 1.0), Err(DynamicsError::MassNotPositive(0.0)));
        assert_eq!(
            Link::new(-2.0, 1.0),
            Err(DynamicsError::MassNotPositive(-2.0))
        );
    }

    #[test]
    fn rejects_non_positive_length() {
        assert_eq!(
            Link::new(1.0, 0.0),
            Err(DynamicsError::LengthNotPositive(0.0))
        );
        assert_eq!(
            Link::new(1.0, -0.5),
            Err(DynamicsError::LengthNotPositive(-0.5))
        );
    }

    #[test]
    fn rejects_empty_chain() {
        assert_eq!(
            PendulumParameters::new(Vec::new(), 9.81),
            Err(DynamicsError::NoLinks)
        );
        assert_eq!(
            PendulumParameters::uniform(0, 1.0, 1.0, 9.81),
            Err(DynamicsError::NoLinks)
        );
    }

    #[test]
    fn uniform_builds_identical_links() {
        let params = PendulumParameters::uniform(3, 2.0, 0.5, 9.81).unwrap();
        assert_eq!(params.len(), 3);
        for link in params.links() {
            assert_eq!(link.mass(), 2.0);
            assert_eq!(link.length(), 0.5);
        }
    }
}
