use crate::models::Asn;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// One AS-path segment: a type tag plus an ordered sequence of ASNs.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsPathSegment {
    AsSequence(Vec<Asn>),
    AsSet(Vec<Asn>),
    /// <https://datatracker.ietf.org/doc/html/rfc5065>
    ConfedSequence(Vec<Asn>),
    ConfedSet(Vec<Asn>),
}

impl AsPathSegment {
    pub fn count_asns(&self) -> usize {
        match self {
            AsPathSegment::AsSequence(v) | AsPathSegment::ConfedSequence(v) => v.len(),
            // a set counts as a single hop regardless of its size
            AsPathSegment::AsSet(_) | AsPathSegment::ConfedSet(_) => 1,
        }
    }
}

/// AS_PATH attribute: an ordered sequence of AS-path segments.
#[derive(Debug, Default, PartialEq, Clone, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsPath {
    pub segments: Vec<AsPathSegment>,
}

impl AsPath {
    pub fn new(segments: Vec<AsPathSegment>) -> AsPath {
        AsPath { segments }
    }

    pub fn add_segment(&mut self, segment: AsPathSegment) {
        self.segments.push(segment);
    }

    /// Number of hops, counting each set segment as one.
    pub fn route_len(&self) -> usize {
        self.segments.iter().map(AsPathSegment::count_asns).sum()
    }

    /// The originating AS, i.e. the last ASN of the last sequence segment.
    /// Returns `None` for an empty path or one ending in a set.
    pub fn origin_asn(&self) -> Option<Asn> {
        match self.segments.last()? {
            AsPathSegment::AsSequence(v) | AsPathSegment::ConfedSequence(v) => v.last().copied(),
            AsPathSegment::AsSet(_) | AsPathSegment::ConfedSet(_) => None,
        }
    }

    /// Flattens the path to plain ASNs. Returns `None` if the path contains
    /// any set segment, in which case a flat representation would be lossy.
    pub fn to_u32_vec(&self) -> Option<Vec<u32>> {
        let mut out = vec![];
        for segment in &self.segments {
            match segment {
                AsPathSegment::AsSequence(v) | AsPathSegment::ConfedSequence(v) => {
                    out.extend(v.iter().map(|asn| asn.to_u32()));
                }
                AsPathSegment::AsSet(_) | AsPathSegment::ConfedSet(_) => return None,
            }
        }
        Some(out)
    }
}

impl Display for AsPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match segment {
                AsPathSegment::AsSequence(v) | AsPathSegment::ConfedSequence(v) => {
                    write!(f, "{}", v.iter().join(" "))?;
                }
                AsPathSegment::AsSet(v) | AsPathSegment::ConfedSet(v) => {
                    write!(f, "{{{}}}", v.iter().join(","))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(asns: &[u32]) -> AsPathSegment {
        AsPathSegment::AsSequence(asns.iter().map(|a| Asn::new_32bit(*a)).collect())
    }

    #[test]
    fn test_origin_asn() {
        let path = AsPath::new(vec![seq(&[64496, 64497, 64498])]);
        assert_eq!(path.origin_asn(), Some(Asn::new_32bit(64498)));

        let path = AsPath::new(vec![
            seq(&[64496]),
            AsPathSegment::AsSet(vec![Asn::new_32bit(64497)]),
        ]);
        assert_eq!(path.origin_asn(), None);
    }

    #[test]
    fn test_route_len() {
        let path = AsPath::new(vec![
            seq(&[64496, 64497]),
            AsPathSegment::AsSet(vec![Asn::new_32bit(1), Asn::new_32bit(2)]),
        ]);
        assert_eq!(path.route_len(), 3);
    }

    #[test]
    fn test_display() {
        let path = AsPath::new(vec![
            seq(&[64496, 64497]),
            AsPathSegment::AsSet(vec![Asn::new_32bit(1), Asn::new_32bit(2)]),
        ]);
        assert_eq!(path.to_string(), "64496 64497 {1,2}");
    }
}
