//! The predicate tree: leaf constraints plus the `And`/`Or` combinators that
//! compose them.

use serde::{Deserialize, Serialize};

pub mod contains;
pub mod event_type;
pub mod ops;
pub mod param;
pub mod spatial;
pub mod time_range;

pub use contains::Contains;
pub use event_type::EventType;
pub use param::{CompareOp, ParamAttr};
pub use spatial::SpatialRegion;
pub use time_range::TimeRange;

/// A node of a query tree.
///
/// Children of `And`/`Or` keep insertion order; the walker numbers
/// parameters in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attr {
    And(Vec<Attr>),
    Or(Vec<Attr>),
    Param(ParamAttr),
    Time(TimeRange),
    Spatial(SpatialRegion),
    EventType(EventType),
    Contains(Contains),
}

impl Attr {
    pub fn kind(&self) -> &'static str {
        match self {
            Attr::And(_) => "and",
            Attr::Or(_) => "or",
            Attr::Param(_) => "param",
            Attr::Time(_) => "time",
            Attr::Spatial(_) => "spatial",
            Attr::EventType(_) => "event_type",
            Attr::Contains(_) => "contains",
        }
    }

    /// Whether `self` and `other` cannot both apply to one query branch.
    ///
    /// Only one time range, one region and one event type selector may be
    /// active per branch; comparisons collide on same field and operator.
    /// Contains checks and combinators never collide.
    pub fn collides(&self, other: &Attr) -> bool {
        match (self, other) {
            (Attr::Param(a), Attr::Param(b)) => a.collides(b),
            (Attr::Time(_), Attr::Time(_)) => true,
            (Attr::Spatial(_), Attr::Spatial(_)) => true,
            (Attr::EventType(_), Attr::EventType(_)) => true,
            _ => false,
        }
    }

    /// Finds the first pair of siblings that collide, by index.
    pub fn colliding_pair(attrs: &[Attr]) -> Option<(usize, usize)> {
        attrs.iter().enumerate().find_map(|(i, a)| {
            attrs[i + 1..]
                .iter()
                .position(|b| a.collides(b))
                .map(|offset| (i, i + 1 + offset))
        })
    }

    /// Flattens nested same-kind combinators, drops duplicate children and
    /// unwraps single-child combinators. Serialization does not need this;
    /// it is offered to callers that want a canonical tree.
    pub fn simplify(self) -> Attr {
        match self {
            Attr::And(children) => rebuild(children, true),
            Attr::Or(children) => rebuild(children, false),
            leaf => leaf,
        }
    }
}

fn rebuild(children: Vec<Attr>, conjunctive: bool) -> Attr {
    let mut flat: Vec<Attr> = Vec::with_capacity(children.len());

    for child in children.into_iter().map(Attr::simplify) {
        let nested = match child {
            Attr::And(inner) if conjunctive => inner,
            Attr::Or(inner) if !conjunctive => inner,
            other => vec![other],
        };
        for attr in nested {
            if !flat.contains(&attr) {
                flat.push(attr);
            }
        }
    }

    if flat.len() == 1 {
        return flat.remove(0);
    }

    if conjunctive {
        Attr::And(flat)
    } else {
        Attr::Or(flat)
    }
}

impl From<ParamAttr> for Attr {
    fn from(p: ParamAttr) -> Self {
        Attr::Param(p)
    }
}

impl From<TimeRange> for Attr {
    fn from(t: TimeRange) -> Self {
        Attr::Time(t)
    }
}

impl From<SpatialRegion> for Attr {
    fn from(r: SpatialRegion) -> Self {
        Attr::Spatial(r)
    }
}

impl From<Contains> for Attr {
    fn from(c: Contains) -> Self {
        Attr::Contains(c)
    }
}
