//! Register banks.
//!
//! The table lays each bank out contiguously, so bank membership and the
//! register number are plain offsets from the bank's first register.

use crate::Register;

/// A contiguous bank of numbered registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegisterBank {
    /// Condition register fields `cr0`..`cr7`.
    Cr,
    /// Floating-point registers `f0`..`f31`.
    Fpr,
    /// General-purpose registers `r0`..`r31`.
    Gpr,
    /// AltiVec vector registers `v0`..`v31`.
    Vr,
    /// Vector-scalar registers `vs0`..`vs63`.
    Vsr,
    /// QPX registers `q0`..`q31`.
    Qpr,
}

impl RegisterBank {
    pub const ALL: [Self; 6] = [
        Self::Cr,
        Self::Fpr,
        Self::Gpr,
        Self::Vr,
        Self::Vsr,
        Self::Qpr,
    ];

    /// Register number zero of this bank.
    pub const fn first(self) -> Register {
        match self {
            Self::Cr => Register::Cr0,
            Self::Fpr => Register::F0,
            Self::Gpr => Register::R0,
            Self::Vr => Register::V0,
            Self::Vsr => Register::Vs0,
            Self::Qpr => Register::Q0,
        }
    }

    /// Name prefix shared by the bank's registers, e.g. `vs`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Cr => "cr",
            Self::Fpr => "f",
            Self::Gpr => "r",
            Self::Vr => "v",
            Self::Vsr => "vs",
            Self::Qpr => "q",
        }
    }

    /// Number of registers in this bank.
    pub const fn count(self) -> u32 {
        match self {
            Self::Cr => 8,
            Self::Vsr => 64,
            Self::Fpr | Self::Gpr | Self::Vr | Self::Qpr => 32,
        }
    }

    /// Register `n` of this bank, or `None` if `n` is out of range.
    pub const fn get(self, n: u32) -> Option<Register> {
        if n < self.count() {
            Register::from_raw(self.first().raw() + n)
        } else {
            None
        }
    }

    const fn offset_of(self, reg: Register) -> Option<u32> {
        let base = self.first().raw();
        let raw = reg.raw();
        if raw >= base && raw - base < self.count() {
            Some(raw - base)
        } else {
            None
        }
    }
}

impl Register {
    /// Bank and number within it, e.g. `r3` -> `(Gpr, 3)`.
    ///
    /// `None` for unbanked registers (`lr`, `ctr`, `carry`, pseudo
    /// registers, `invalid`).
    pub fn bank(self) -> Option<(RegisterBank, u32)> {
        RegisterBank::ALL
            .into_iter()
            .find_map(|bank| bank.offset_of(self).map(|n| (bank, n)))
    }

    /// Number within the register's bank.
    pub fn index(self) -> Option<u32> {
        self.bank().map(|(_, n)| n)
    }

    pub const fn is_gpr(self) -> bool {
        RegisterBank::Gpr.offset_of(self).is_some()
    }

    pub const fn is_fpr(self) -> bool {
        RegisterBank::Fpr.offset_of(self).is_some()
    }

    pub const fn is_altivec(self) -> bool {
        RegisterBank::Vr.offset_of(self).is_some()
    }

    pub const fn is_vsx(self) -> bool {
        RegisterBank::Vsr.offset_of(self).is_some()
    }

    pub const fn is_qpx(self) -> bool {
        RegisterBank::Qpr.offset_of(self).is_some()
    }

    pub const fn is_cr_field(self) -> bool {
        RegisterBank::Cr.offset_of(self).is_some()
    }

    /// Registers that only exist for the engine's internal mapping and
    /// never appear in real operands.
    pub const fn is_pseudo(self) -> bool {
        matches!(
            self,
            Self::Rm | Self::Ctr8 | Self::Lr8 | Self::Cr1eq | Self::X2
        )
    }

    /// General-purpose register `rN`.
    pub const fn gpr(n: u32) -> Option<Self> {
        RegisterBank::Gpr.get(n)
    }

    /// Floating-point register `fN`.
    pub const fn fpr(n: u32) -> Option<Self> {
        RegisterBank::Fpr.get(n)
    }

    /// Condition register field `crN`.
    pub const fn cr(n: u32) -> Option<Self> {
        RegisterBank::Cr.get(n)
    }

    /// AltiVec register `vN`.
    pub const fn vr(n: u32) -> Option<Self> {
        RegisterBank::Vr.get(n)
    }

    /// Vector-scalar register `vsN`.
    pub const fn vsr(n: u32) -> Option<Self> {
        RegisterBank::Vsr.get(n)
    }

    /// QPX register `qN`.
    pub const fn qpr(n: u32) -> Option<Self> {
        RegisterBank::Qpr.get(n)
    }
}
