//! Decoded PowerPC operands.
//!
//! [`PpcOperand`] replaces the engine's tag + union pair with a sum type,
//! so a payload can only be read through the variant that owns it.

use std::fmt;

use ppc_isa_sys::cs_ppc_op;

use crate::error::{OperandError, contract_violation};
use crate::{BranchCondition, OperandKind, Register};

/// Memory operand: `disp(base)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PpcOpMem {
    base: Register,
    disp: i32,
}

impl PpcOpMem {
    pub const fn new(base: Register, disp: i32) -> Self {
        Self { base, disp }
    }

    /// Base register.
    #[inline]
    pub const fn base(&self) -> Register {
        self.base
    }

    /// Signed displacement from the base register.
    #[inline]
    pub const fn disp(&self) -> i32 {
        self.disp
    }
}

impl fmt::Display for PpcOpMem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.disp, self.base)
    }
}

/// Condition register field operand: a CR field selector plus the
/// condition being tested, printed as `4*cr1+eq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PpcOpCrx {
    scale: u32,
    reg: Register,
    cond: BranchCondition,
}

impl PpcOpCrx {
    pub const fn new(scale: u32, reg: Register, cond: BranchCondition) -> Self {
        Self { scale, reg, cond }
    }

    /// Bit-field scale (bits per CR field, normally 4).
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Condition register field.
    #[inline]
    pub const fn reg(&self) -> Register {
        self.reg
    }

    /// Condition tested within the field.
    #[inline]
    pub const fn cond(&self) -> BranchCondition {
        self.cond
    }
}

impl fmt::Display for PpcOpCrx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}+{}", self.scale, self.reg, self.cond)
    }
}

/// One decoded PowerPC operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PpcOperand {
    /// Operand of kind `invalid`; carries nothing.
    #[default]
    Invalid,
    Reg(Register),
    /// Immediate, sign-extended to 64 bits.
    Imm(i64),
    Mem(PpcOpMem),
    Crx(PpcOpCrx),
}

impl PpcOperand {
    /// Decode one raw operand.
    ///
    /// Only the union arm selected by the record's kind tag is read.
    pub fn try_from_raw(raw: &cs_ppc_op) -> Result<Self, OperandError> {
        let kind =
            OperandKind::from_raw(raw.type_).ok_or(OperandError::UnknownKind(raw.type_))?;
        let op = match kind {
            OperandKind::Invalid => Self::Invalid,
            OperandKind::Reg => {
                // SAFETY: kind is `reg`, so `reg` is the active arm.
                let reg = unsafe { raw.payload.reg };
                Self::Reg(register(reg)?)
            }
            OperandKind::Imm => {
                // SAFETY: kind is `imm`, so `imm` is the active arm.
                let imm = unsafe { raw.payload.imm };
                Self::Imm(imm)
            }
            OperandKind::Mem => {
                // SAFETY: kind is `mem`, so `mem` is the active arm.
                let mem = unsafe { raw.payload.mem };
                Self::Mem(PpcOpMem::new(register(mem.base)?, mem.disp))
            }
            OperandKind::Crx => {
                // SAFETY: kind is `crx`, so `crx` is the active arm.
                let crx = unsafe { raw.payload.crx };
                let cond = BranchCondition::from_raw(crx.cond)
                    .ok_or(OperandError::UnknownCondition(crx.cond))?;
                Self::Crx(PpcOpCrx::new(crx.scale, register(crx.reg)?, cond))
            }
        };
        Ok(op)
    }

    /// Decode one raw operand, panicking if the record does not match
    /// this crate's tables.
    ///
    /// # Panics
    ///
    /// On an unknown kind tag, register or condition value.
    #[track_caller]
    pub fn from_raw(raw: &cs_ppc_op) -> Self {
        match Self::try_from_raw(raw) {
            Ok(op) => op,
            Err(e) => contract_violation(e),
        }
    }

    /// Kind tag of this operand.
    pub const fn kind(&self) -> OperandKind {
        match self {
            Self::Invalid => OperandKind::Invalid,
            Self::Reg(_) => OperandKind::Reg,
            Self::Imm(_) => OperandKind::Imm,
            Self::Mem(_) => OperandKind::Mem,
            Self::Crx(_) => OperandKind::Crx,
        }
    }

    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    pub const fn reg(&self) -> Option<Register> {
        match self {
            Self::Reg(reg) => Some(*reg),
            _ => None,
        }
    }

    pub const fn imm(&self) -> Option<i64> {
        match self {
            Self::Imm(imm) => Some(*imm),
            _ => None,
        }
    }

    pub const fn mem(&self) -> Option<PpcOpMem> {
        match self {
            Self::Mem(mem) => Some(*mem),
            _ => None,
        }
    }

    pub const fn crx(&self) -> Option<PpcOpCrx> {
        match self {
            Self::Crx(crx) => Some(*crx),
            _ => None,
        }
    }
}

impl TryFrom<&cs_ppc_op> for PpcOperand {
    type Error = OperandError;

    fn try_from(raw: &cs_ppc_op) -> Result<Self, Self::Error> {
        Self::try_from_raw(raw)
    }
}

impl fmt::Display for PpcOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("<invalid>"),
            Self::Reg(reg) => write!(f, "{reg}"),
            Self::Imm(imm) => write!(f, "{imm}"),
            Self::Mem(mem) => write!(f, "{mem}"),
            Self::Crx(crx) => write!(f, "{crx}"),
        }
    }
}

fn register(raw: u32) -> Result<Register, OperandError> {
    Register::from_raw(raw).ok_or(OperandError::UnknownRegister(raw))
}
