//! Property-based tests for raw record decoding.

use ppc_isa::*;
use ppc_isa_sys::*;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_register() -> impl Strategy<Value = Register> {
    prop::sample::select(Register::ALL)
}

fn arb_condition() -> impl Strategy<Value = BranchCondition> {
    prop::sample::select(BranchCondition::ALL)
}

fn arb_hint() -> impl Strategy<Value = BranchHint> {
    prop::sample::select(BranchHint::ALL)
}

/// Any well-formed operand.
fn arb_operand() -> impl Strategy<Value = PpcOperand> {
    prop_oneof![
        Just(PpcOperand::Invalid),
        arb_register().prop_map(PpcOperand::Reg),
        any::<i64>().prop_map(PpcOperand::Imm),
        (arb_register(), any::<i32>())
            .prop_map(|(base, disp)| PpcOperand::Mem(PpcOpMem::new(base, disp))),
        (any::<u32>(), arb_register(), arb_condition())
            .prop_map(|(scale, reg, cond)| PpcOperand::Crx(PpcOpCrx::new(scale, reg, cond))),
    ]
}

fn encode(op: &PpcOperand) -> cs_ppc_op {
    match *op {
        PpcOperand::Invalid => cs_ppc_op::invalid(),
        PpcOperand::Reg(reg) => cs_ppc_op::reg(reg.raw()),
        PpcOperand::Imm(imm) => cs_ppc_op::imm(imm),
        PpcOperand::Mem(mem) => cs_ppc_op::mem(mem.base().raw(), mem.disp()),
        PpcOperand::Crx(crx) => cs_ppc_op::crx(crx.scale(), crx.reg().raw(), crx.cond().raw()),
    }
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn operand_payload_survives_decoding(op in arb_operand()) {
        let raw = encode(&op);
        let decoded = PpcOperand::try_from_raw(&raw).unwrap();
        prop_assert_eq!(decoded, op);
        prop_assert_eq!(decoded.kind().raw(), raw.type_);
    }

    #[test]
    fn detail_preserves_order_and_count(
        bc in arb_condition(),
        bh in arb_hint(),
        update_cr0 in any::<bool>(),
        ops in prop::collection::vec(arb_operand(), 0..=PPC_MAX_OPERANDS),
    ) {
        let raws: Vec<_> = ops.iter().map(encode).collect();
        let raw = cs_ppc::new(bc.raw(), bh.raw(), update_cr0, &raws);
        let detail = PpcDetail::try_from_raw(&raw).unwrap();

        prop_assert_eq!(detail.bc(), bc);
        prop_assert_eq!(detail.bh(), bh);
        prop_assert_eq!(detail.update_cr0(), update_cr0);
        prop_assert_eq!(detail.op_count(), ops.len());
        prop_assert_eq!(detail.operands(), ops.as_slice());
    }

    #[test]
    fn decoding_is_deterministic(ops in prop::collection::vec(arb_operand(), 0..=PPC_MAX_OPERANDS)) {
        let raws: Vec<_> = ops.iter().map(encode).collect();
        let raw = cs_ppc::new(PPC_BC_INVALID, PPC_BH_INVALID, false, &raws);
        prop_assert_eq!(PpcDetail::from_raw(&raw), PpcDetail::from_raw(&raw));
    }

    #[test]
    fn narrow_immediates_sign_extend(v in any::<i32>()) {
        let op = PpcOperand::from_raw(&cs_ppc_op::imm(i64::from(v)));
        prop_assert_eq!(op.imm(), Some(i64::from(v)));
    }

    #[test]
    fn unknown_kinds_are_rejected(tag in any::<u32>()) {
        prop_assume!(OperandKind::from_raw(tag).is_none());
        let mut raw = cs_ppc_op::imm(0);
        raw.type_ = tag;
        prop_assert_eq!(PpcOperand::try_from_raw(&raw), Err(OperandError::UnknownKind(tag)));
    }

    #[test]
    fn overflowing_counts_are_rejected(count in (PPC_MAX_OPERANDS as u8 + 1)..=u8::MAX) {
        let mut raw = cs_ppc::default();
        raw.op_count = count;
        let is_overflow = matches!(
            PpcDetail::try_from_raw(&raw),
            Err(DecodeError::OperandCountOverflow { .. })
        );
        prop_assert!(is_overflow);
    }
}
