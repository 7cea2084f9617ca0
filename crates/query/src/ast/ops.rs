//! Boolean algebra over `Attr`.
//!
//! `&` distributes over `|`, so trees built through these operators are
//! always a disjunction of conjunctions and serialize without error. Trees
//! built by hand keep whatever shape they were given.

use std::ops::{BitAnd, BitOr};

use crate::ast::Attr;

impl Attr {
    /// Conjunction. An `Or` operand is distributed over, so an empty `Or`
    /// matches nothing and absorbs the other side: `Or([]) & x` is `Or([])`
    /// and serializes to no requests.
    pub fn and(self, other: Attr) -> Attr {
        match (self, other) {
            (Attr::Or(left), right) => distribute(left, |a| a.and(right.clone())),
            (left, Attr::Or(right)) => distribute(right, |b| left.clone().and(b)),
            (Attr::And(mut left), Attr::And(right)) => {
                left.extend(right);
                Attr::And(left)
            }
            (Attr::And(mut left), right) => {
                left.push(right);
                Attr::And(left)
            }
            (left, Attr::And(mut right)) => {
                right.insert(0, left);
                Attr::And(right)
            }
            (left, right) => Attr::And(vec![left, right]),
        }
    }

    /// Disjunction. Two event type selectors merge into one selector instead
    /// of producing two separate requests.
    pub fn or(self, other: Attr) -> Attr {
        if let Attr::EventType(ev) = &self
            && let Some(merged) = ev.try_merge(&other)
        {
            return Attr::EventType(merged);
        }

        match (self, other) {
            (Attr::Or(mut left), Attr::Or(right)) => {
                left.extend(right);
                Attr::Or(left)
            }
            (Attr::Or(mut left), right) => {
                left.push(right);
                Attr::Or(left)
            }
            (left, Attr::Or(mut right)) => {
                right.insert(0, left);
                Attr::Or(right)
            }
            (left, right) => Attr::Or(vec![left, right]),
        }
    }

    /// Conjunction of every item; an empty iterator yields an empty `And`.
    pub fn all<I: IntoIterator<Item = Attr>>(attrs: I) -> Attr {
        attrs
            .into_iter()
            .reduce(Attr::and)
            .unwrap_or_else(|| Attr::And(Vec::new()))
    }

    /// Disjunction of every item; an empty iterator yields an empty `Or`.
    pub fn any<I: IntoIterator<Item = Attr>>(attrs: I) -> Attr {
        attrs
            .into_iter()
            .reduce(Attr::or)
            .unwrap_or_else(|| Attr::Or(Vec::new()))
    }
}

fn distribute(branches: Vec<Attr>, f: impl Fn(Attr) -> Attr) -> Attr {
    Attr::any(branches.into_iter().map(f))
}

impl BitAnd for Attr {
    type Output = Attr;

    fn bitand(self, rhs: Attr) -> Attr {
        self.and(rhs)
    }
}

impl BitOr for Attr {
    type Output = Attr;

    fn bitor(self, rhs: Attr) -> Attr {
        self.or(rhs)
    }
}
