//! Integer-backed identifiers.

use core::marker::PhantomData;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IdError, IdResult};
use crate::identifier::{Comparison, IdKind, Identifier};

/// An immutable identifier wrapping a signed integer, tagged with a kind.
///
/// Mint named kinds with [`int_id!`](crate::int_id!); two identifiers of
/// different kinds are distinct types, so `==` across kinds does not compile.
/// Cross-kind comparison goes through [`Identifier::is_equal_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntId<K: IdKind> {
    value: i64,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K: IdKind> IntId<K> {
    /// Wraps the given integer verbatim. Zero and negatives are allowed.
    pub fn from_int(value: i64) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// `None` passthrough variant of [`from_int`](Self::from_int).
    pub fn from_int_opt(value: Option<i64>) -> Option<Self> {
        value.map(Self::from_int)
    }

    /// Parses the canonical decimal rendering of an integer.
    ///
    /// The round-trip rule is exact: the text must equal what the parsed
    /// integer renders back to. `"01"`, `"+5"`, `"-0"`, `"10.0"`, whitespace
    /// and trailing text are all rejected.
    pub fn from_string(text: &str) -> IdResult<Self> {
        let value: i64 = text.parse().map_err(|_| Self::reject(text))?;
        if value.to_string() != text {
            return Err(Self::reject(text));
        }
        Ok(Self::from_int(value))
    }

    /// `None` passthrough variant of [`from_string`](Self::from_string).
    /// Validation failures on present input still fail.
    pub fn from_string_opt(text: Option<&str>) -> IdResult<Option<Self>> {
        text.map(Self::from_string).transpose()
    }

    /// Rekeys the value carried by an identifier of another kind.
    pub fn convert_from<O: IdKind>(other: IntId<O>) -> Self {
        Self::from_int(other.to_int())
    }

    /// Returns the stored integer verbatim.
    pub fn to_int(self) -> i64 {
        self.value
    }

    fn reject(text: &str) -> IdError {
        tracing::debug!(kind = K::NAME, input = text, "rejected non-canonical integer");
        IdError::NotAnInteger(text.to_string())
    }
}

impl<K: IdKind> Identifier for IntId<K> {
    fn kind_name(&self) -> &'static str {
        K::NAME
    }

    fn render(&self) -> String {
        self.value.to_string()
    }

    fn int_value(&self) -> Option<i64> {
        Some(self.value)
    }

    fn is_equal_to(&self, other: &dyn Identifier, cmp: Comparison) -> bool {
        if cmp == Comparison::Strict && other.kind_name() != K::NAME {
            return false;
        }
        other.int_value() == Some(self.value)
    }
}

impl<K: IdKind> core::fmt::Display for IntId<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.value, f)
    }
}

impl<K: IdKind> FromStr for IntId<K> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// Mints a named integer identifier kind: a zero-sized marker type plus a
/// type alias over [`IntId`].
///
/// ```
/// identikit_core::int_id! {
///     /// Identifies a customer.
///     pub CustomerId => CustomerIdKind
/// }
///
/// let id = CustomerId::from_int(175);
/// assert_eq!(id.to_int(), 175);
/// ```
#[macro_export]
macro_rules! int_id {
    (
        $(#[$attr:meta])*
        $vis:vis $alias:ident => $marker:ident
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $marker {}

        impl $crate::IdKind for $marker {
            const NAME: &'static str = stringify!($alias);
        }

        $(#[$attr])*
        $vis type $alias = $crate::IntId<$marker>;
    };
}
