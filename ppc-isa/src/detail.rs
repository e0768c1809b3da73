use ppc_isa_sys::{PPC_MAX_OPERANDS, cs_ppc};

use crate::error::{DecodeError, contract_violation};
use crate::operand::PpcOperand;
use crate::{BranchCondition, BranchHint};

/// PowerPC-specific detail of one disassembled instruction.
///
/// Built only from a raw engine record via [`PpcDetail::try_from_raw`] or
/// [`PpcDetail::from_raw`]; read-only afterwards.
///
/// ```
/// use ppc_isa::{BranchCondition, BranchHint, PpcDetail, PpcOpMem, PpcOperand, Register};
/// use ppc_isa_sys::{PPC_BC_EQ, PPC_BH_PLUS, PPC_REG_R1, PPC_REG_R3, cs_ppc, cs_ppc_op};
///
/// let raw = cs_ppc::new(
///     PPC_BC_EQ,
///     PPC_BH_PLUS,
///     true,
///     &[cs_ppc_op::reg(PPC_REG_R3), cs_ppc_op::mem(PPC_REG_R1, 16)],
/// );
/// let detail = PpcDetail::try_from_raw(&raw)?;
/// assert_eq!(detail.bc(), BranchCondition::Eq);
/// assert_eq!(detail.bh(), BranchHint::Plus);
/// assert!(detail.update_cr0());
/// assert_eq!(
///     detail.operands(),
///     [PpcOperand::Reg(Register::R3), PpcOperand::Mem(PpcOpMem::new(Register::R1, 16))]
/// );
/// # Ok::<(), ppc_isa::DecodeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PpcDetail {
    bc: BranchCondition,
    bh: BranchHint,
    update_cr0: bool,
    operands: Vec<PpcOperand>,
}

impl PpcDetail {
    /// Decode a raw detail record.
    ///
    /// Decodes exactly `op_count` operands, in record order. Entries of the
    /// operand array past `op_count` are never read.
    pub fn try_from_raw(raw: &cs_ppc) -> Result<Self, DecodeError> {
        let count = usize::from(raw.op_count);
        if count > PPC_MAX_OPERANDS {
            return Err(DecodeError::OperandCountOverflow {
                count,
                max: PPC_MAX_OPERANDS,
            });
        }

        let bc =
            BranchCondition::from_raw(raw.bc).ok_or(DecodeError::UnknownBranchCondition(raw.bc))?;
        let bh = BranchHint::from_raw(raw.bh).ok_or(DecodeError::UnknownBranchHint(raw.bh))?;

        let operands = raw.operands[..count]
            .iter()
            .enumerate()
            .map(|(index, op)| {
                PpcOperand::try_from_raw(op)
                    .map_err(|source| DecodeError::Operand { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!(
            "decoded ppc detail: bc={bc} bh={bh} update_cr0={} operands={count}",
            raw.update_cr0
        );

        Ok(Self {
            bc,
            bh,
            update_cr0: raw.update_cr0,
            operands,
        })
    }

    /// Decode a raw detail record, panicking if it does not match this
    /// crate's tables.
    ///
    /// # Panics
    ///
    /// If `op_count` exceeds [`PPC_MAX_OPERANDS`], or any flat field or
    /// operand carries a value unknown to this crate.
    #[track_caller]
    pub fn from_raw(raw: &cs_ppc) -> Self {
        match Self::try_from_raw(raw) {
            Ok(detail) => detail,
            Err(e) => contract_violation(e),
        }
    }

    /// Branch condition, `Invalid` for unconditional instructions.
    #[inline]
    pub fn bc(&self) -> BranchCondition {
        self.bc
    }

    /// Static branch prediction hint.
    #[inline]
    pub fn bh(&self) -> BranchHint {
        self.bh
    }

    /// True for record-form (`.`-suffixed) instructions, which also update
    /// CR0.
    #[inline]
    pub fn update_cr0(&self) -> bool {
        self.update_cr0
    }

    /// Operands in assembly order.
    #[inline]
    pub fn operands(&self) -> &[PpcOperand] {
        &self.operands
    }

    #[inline]
    pub fn op_count(&self) -> usize {
        self.operands.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PpcOperand> {
        self.operands.iter()
    }

    /// True for conditional branches and traps.
    pub fn is_conditional(&self) -> bool {
        self.bc != BranchCondition::Invalid
    }
}

impl TryFrom<&cs_ppc> for PpcDetail {
    type Error = DecodeError;

    fn try_from(raw: &cs_ppc) -> Result<Self, Self::Error> {
        Self::try_from_raw(raw)
    }
}

impl<'a> IntoIterator for &'a PpcDetail {
    type Item = &'a PpcOperand;
    type IntoIter = std::slice::Iter<'a, PpcOperand>;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl IntoIterator for PpcDetail {
    type Item = PpcOperand;
    type IntoIter = std::vec::IntoIter<PpcOperand>;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.into_iter()
    }
}
