//! UUID-v4-backed identifiers.

use core::marker::PhantomData;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant};

use crate::error::{IdError, IdResult};
use crate::identifier::{Comparison, IdKind, Identifier};

/// An immutable identifier wrapping a canonical hyphenated UUIDv4 string,
/// tagged with a kind.
///
/// The string is validated once, at construction, and stored verbatim:
/// parsing is case-insensitive but the original casing is preserved and
/// comparisons are byte-exact. Mint named kinds with
/// [`uuid_id!`](crate::uuid_id!).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UuidId<K: IdKind> {
    value: String,
    #[serde(skip)]
    kind: PhantomData<K>,
}

/// Accepts exactly the 36-character hyphenated form, version 4, RFC 4122
/// variant. The length check pins the grammar: the `uuid` parser would also
/// take simple (32), braced (38) and URN (45) forms, all of other lengths.
fn is_canonical_v4(text: &str) -> bool {
    if text.len() != 36 {
        return false;
    }
    let Ok(parsed) = Uuid::try_parse(text) else {
        return false;
    };
    parsed.get_version_num() == 4 && matches!(parsed.get_variant(), Variant::RFC4122)
}

impl<K: IdKind> UuidId<K> {
    /// Parses a canonical hyphenated UUIDv4 string, keeping it verbatim.
    pub fn from_string(text: &str) -> IdResult<Self> {
        if !is_canonical_v4(text) {
            tracing::debug!(kind = K::NAME, input = text, "rejected malformed UUID");
            return Err(IdError::InvalidUuid(text.to_string()));
        }
        Ok(Self {
            value: text.to_string(),
            kind: PhantomData,
        })
    }

    /// `None` passthrough variant of [`from_string`](Self::from_string).
    /// Validation failures on present input still fail.
    pub fn from_string_opt(text: Option<&str>) -> IdResult<Option<Self>> {
        text.map(Self::from_string).transpose()
    }

    /// Generates a fresh random UUIDv4 identifier.
    ///
    /// 122 random bits from the OS entropy source, with the version and
    /// variant bits fixed; rendered lowercase hyphenated.
    pub fn generate() -> Self {
        Self {
            value: Uuid::new_v4().hyphenated().to_string(),
            kind: PhantomData,
        }
    }

    /// Rekeys the value carried by an identifier of another kind.
    pub fn convert_from<O: IdKind>(other: &UuidId<O>) -> Self {
        Self {
            value: other.value.clone(),
            kind: PhantomData,
        }
    }

    /// Returns the stored canonical string verbatim.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<K: IdKind> Identifier for UuidId<K> {
    fn kind_name(&self) -> &'static str {
        K::NAME
    }

    fn render(&self) -> String {
        self.value.clone()
    }

    fn uuid_value(&self) -> Option<&str> {
        Some(&self.value)
    }

    fn is_equal_to(&self, other: &dyn Identifier, cmp: Comparison) -> bool {
        if cmp == Comparison::Strict && other.kind_name() != K::NAME {
            return false;
        }
        other.uuid_value() == Some(self.value.as_str())
    }
}

impl<K: IdKind> core::fmt::Display for UuidId<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl<K: IdKind> FromStr for UuidId<K> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

// Manual impl so deserialisation runs the same validation as `from_string`;
// a derived transparent impl would admit arbitrary strings.
impl<'de, K: IdKind> Deserialize<'de> for UuidId<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_string(&text).map_err(serde::de::Error::custom)
    }
}

/// Mints a named UUID identifier kind: a zero-sized marker type plus a type
/// alias over [`UuidId`].
///
/// ```
/// identikit_core::uuid_id! {
///     /// Identifies an order.
///     pub OrderId => OrderIdKind
/// }
///
/// let id = OrderId::generate();
/// let same = OrderId::from_string(id.as_str()).unwrap();
/// assert_eq!(id, same);
/// ```
#[macro_export]
macro_rules! uuid_id {
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
        $vis type $alias = $crate::UuidId<$marker>;
    };
}
