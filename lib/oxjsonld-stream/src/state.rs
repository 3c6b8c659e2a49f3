use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Safety bitmask of a context node.
///
/// A node may only hand its triples to the sink once its subject is known ([`ID_DECLARED`](Self::ID_DECLARED)),
/// its context is fully processed ([`CONTEXT_DECLARED`](Self::CONTEXT_DECLARED))
/// and its parent has reached the same point ([`PARENT_SAFE`](Self::PARENT_SAFE)).
///
/// ```
/// use oxjsonld_stream::SafetyState;
///
/// let state = SafetyState::ID_DECLARED | SafetyState::CONTEXT_DECLARED;
/// assert!(!state.is_safe());
/// assert!((state | SafetyState::PARENT_SAFE).is_safe());
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Hash)]
pub struct SafetyState(u8);

impl SafetyState {
    pub const UNSAFE: Self = Self(0);
    pub const ID_DECLARED: Self = Self(0b001);
    pub const CONTEXT_DECLARED: Self = Self(0b010);
    pub const PARENT_SAFE: Self = Self(0b100);
    pub const SAFE_TO_SINK_TRIPLES: Self =
        Self(Self::ID_DECLARED.0 | Self::CONTEXT_DECLARED.0 | Self::PARENT_SAFE.0);

    /// Returns `true` if all the bits of `other` are set.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_safe(self) -> bool {
        self == Self::SAFE_TO_SINK_TRIPLES
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for SafetyState {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SafetyState {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SafetyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Self::ID_DECLARED) {
            names.push("ID_DECLARED");
        }
        if self.contains(Self::CONTEXT_DECLARED) {
            names.push("CONTEXT_DECLARED");
        }
        if self.contains(Self::PARENT_SAFE) {
            names.push("PARENT_SAFE");
        }
        if names.is_empty() {
            f.write_str("UNSAFE")
        } else {
            f.write_str(&names.join("|"))
        }
    }
}
