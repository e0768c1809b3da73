use crate::{BranchCondition, BranchHint};

/// BO field value for "branch if the CR bit is set".
const BO_TRUE: u32 = 12;
/// BO field value for "branch if the CR bit is clear".
const BO_FALSE: u32 = 4;

impl BranchCondition {
    /// Packed engine encoding, `(field << 5) | bits`.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.raw()
    }

    /// Condition bit selector: 0 for lt/ge, 1 for gt/le, 2 for eq/ne,
    /// 3 for un/nu, 4 for so/ns.
    #[inline]
    pub const fn field(self) -> u32 {
        self.raw() >> 5
    }

    /// BO bits: 12 branches when the selected bit is set, 4 when clear.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.raw() & 0x1f
    }

    /// True if the branch is taken when the selected bit is set.
    pub const fn tests_set(self) -> bool {
        !matches!(self, Self::Invalid) && self.bits() == BO_TRUE
    }

    /// The opposite predicate (`lt` <-> `ge`, `eq` <-> `ne`, ...).
    /// `Invalid` maps to itself.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Invalid => Self::Invalid,
            Self::Lt => Self::Ge,
            Self::Ge => Self::Lt,
            Self::Le => Self::Gt,
            Self::Gt => Self::Le,
            Self::Eq => Self::Ne,
            Self::Ne => Self::Eq,
            Self::Un => Self::Nu,
            Self::Nu => Self::Un,
            Self::So => Self::Ns,
            Self::Ns => Self::So,
        }
    }
}

impl BranchHint {
    /// `Some(true)` for `+`, `Some(false)` for `-`, `None` without a hint.
    pub const fn likely_taken(self) -> Option<bool> {
        match self {
            Self::Invalid => None,
            Self::Plus => Some(true),
            Self::Minus => Some(false),
        }
    }
}
