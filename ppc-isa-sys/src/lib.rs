//! Raw PowerPC instruction detail records, laid out exactly as the
//! disassembly engine writes them.
//!
//! Everything here is plain data. The operand payload is a C union whose
//! active arm is selected by [`cs_ppc_op::type_`]; reading it is `unsafe`
//! and belongs in the safe `ppc-isa` layer.
#![allow(non_camel_case_types)]

include!(concat!(env!("OUT_DIR"), "/constants.rs"));

/// Memory operand payload: `disp(base)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ppc_op_mem {
    pub base: ppc_reg,
    pub disp: i32,
}

/// Condition register field operand payload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ppc_op_crx {
    pub scale: u32,
    pub reg: ppc_reg,
    pub cond: ppc_bc,
}

/// Operand payload. Only the arm named by the owning record's `type_`
/// holds meaningful data.
#[repr(C)]
#[derive(Clone, Copy)]
pub union ppc_op_payload {
    pub reg: ppc_reg,
    pub imm: i64,
    pub mem: ppc_op_mem,
    pub crx: ppc_op_crx,
}

/// One raw operand: kind tag plus payload union.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct cs_ppc_op {
    pub type_: ppc_op_type,
    pub payload: ppc_op_payload,
}

/// Raw PowerPC instruction detail.
///
/// `operands` is fixed-capacity; only the first `op_count` entries are
/// initialized by the engine.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct cs_ppc {
    pub bc: ppc_bc,
    pub bh: ppc_bh,
    pub update_cr0: bool,
    pub op_count: u8,
    pub operands: [cs_ppc_op; PPC_MAX_OPERANDS],
}

impl Default for ppc_op_payload {
    fn default() -> Self {
        // SAFETY: every arm is plain integers; all-zero is valid for each.
        unsafe { std::mem::zeroed() }
    }
}

impl Default for cs_ppc_op {
    fn default() -> Self {
        // SAFETY: see `ppc_op_payload::default`; zeroing also clears padding.
        unsafe { std::mem::zeroed() }
    }
}

impl Default for cs_ppc {
    fn default() -> Self {
        // SAFETY: integers, a bool (0 is `false`) and zeroable operands.
        unsafe { std::mem::zeroed() }
    }
}

// Constructors for engines (and tests) that fill records by hand. Each one
// starts from a zeroed record so inactive union bytes are never garbage.
impl cs_ppc_op {
    /// Operand with kind `PPC_OP_INVALID`.
    pub fn invalid() -> Self {
        Self::default()
    }

    pub fn reg(reg: ppc_reg) -> Self {
        let mut op = Self::default();
        op.type_ = PPC_OP_REG;
        op.payload.reg = reg;
        op
    }

    pub fn imm(imm: i64) -> Self {
        let mut op = Self::default();
        op.type_ = PPC_OP_IMM;
        op.payload.imm = imm;
        op
    }

    pub fn mem(base: ppc_reg, disp: i32) -> Self {
        let mut op = Self::default();
        op.type_ = PPC_OP_MEM;
        op.payload.mem = ppc_op_mem { base, disp };
        op
    }

    pub fn crx(scale: u32, reg: ppc_reg, cond: ppc_bc) -> Self {
        let mut op = Self::default();
        op.type_ = PPC_OP_CRX;
        op.payload.crx = ppc_op_crx { scale, reg, cond };
        op
    }
}

impl cs_ppc {
    /// Build a record from branch metadata and up to
    /// [`PPC_MAX_OPERANDS`] operands.
    ///
    /// # Panics
    ///
    /// If `operands` is longer than [`PPC_MAX_OPERANDS`].
    pub fn new(bc: ppc_bc, bh: ppc_bh, update_cr0: bool, operands: &[cs_ppc_op]) -> Self {
        assert!(
            operands.len() <= PPC_MAX_OPERANDS,
            "{} operands exceed capacity {PPC_MAX_OPERANDS}",
            operands.len()
        );
        let mut detail = Self {
            bc,
            bh,
            update_cr0,
            op_count: operands.len() as u8,
            ..Self::default()
        };
        detail.operands[..operands.len()].copy_from_slice(operands);
        detail
    }
}
