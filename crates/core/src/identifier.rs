//! The identifier capability: string rendering plus strict/loose equality.
//!
//! A *kind* is a zero-sized marker type minted per logical identifier family
//! (e.g. a `CustomerId` vs an `OrderId`) so the compiler keeps unrelated
//! identifiers apart even when they wrap the same primitive. The
//! [`Identifier`] trait is the runtime face of the same idea: it lets code
//! that only holds `&dyn Identifier` values still render and compare them,
//! with the kind tag enforcing strictness where `==` cannot.

/// Marker trait for identifier kinds.
///
/// Implemented by the zero-sized tag types generated by
/// [`int_id!`](crate::int_id!) and [`uuid_id!`](crate::uuid_id!). `NAME`
/// must be unique per logical kind; strict equality compares it at runtime.
pub trait IdKind {
    /// Unique name of the kind.
    const NAME: &'static str;
}

/// Equality mode for [`Identifier::is_equal_to`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Equal only when both the kind tag and the underlying value match.
    /// The default choice for domain code: a `CustomerId` never equals an
    /// `OrderId`, even when both wrap the same integer.
    Strict,

    /// Kind tags are ignored; any identifier exposing a compatible value
    /// accessor with an equal value compares equal. Intended for migrations
    /// where two historically-distinct kinds cover the same entity space.
    Loose,
}

/// Capability implemented by every identifier value object.
///
/// Object-safe so heterogeneous identifiers can be compared behind
/// `&dyn Identifier`. The two value accessors default to `None`; an
/// implementation overrides exactly the one matching its backing primitive,
/// and loose comparison treats a missing accessor as "not comparable"
/// rather than an error.
pub trait Identifier {
    /// Tag of the concrete kind, compared by strict equality.
    fn kind_name(&self) -> &'static str;

    /// Canonical string rendering.
    fn render(&self) -> String;

    /// Underlying integer, when this identifier is integer-backed.
    fn int_value(&self) -> Option<i64> {
        None
    }

    /// Underlying canonical UUID string, when this identifier is UUID-backed.
    fn uuid_value(&self) -> Option<&str> {
        None
    }

    /// Compares this identifier against any other, under the given mode.
    fn is_equal_to(&self, other: &dyn Identifier, cmp: Comparison) -> bool;

    /// Exact negation of [`is_equal_to`](Identifier::is_equal_to) with the
    /// same arguments.
    fn is_not_equal_to(&self, other: &dyn Identifier, cmp: Comparison) -> bool {
        !self.is_equal_to(other, cmp)
    }
}
