use ppc_isa::*;
use ppc_isa_sys::*;

#[test]
fn decode_branch_metadata_and_operands() {
    let raw = cs_ppc::new(
        PPC_BC_EQ,
        PPC_BH_PLUS,
        true,
        &[cs_ppc_op::reg(PPC_REG_R3), cs_ppc_op::mem(PPC_REG_R1, 16)],
    );
    let detail = PpcDetail::from_raw(&raw);
    assert_eq!(detail.bc(), BranchCondition::Eq);
    assert_eq!(detail.bh(), BranchHint::Plus);
    assert!(detail.update_cr0());
    assert!(detail.is_conditional());
    assert_eq!(detail.op_count(), 2);
    assert_eq!(detail.operands()[0], PpcOperand::Reg(Register::R3));
    assert_eq!(
        detail.operands()[1],
        PpcOperand::Mem(PpcOpMem::new(Register::R1, 16))
    );
}

#[test]
fn decode_empty() {
    let raw = cs_ppc::new(PPC_BC_INVALID, PPC_BH_INVALID, false, &[]);
    let detail = PpcDetail::try_from_raw(&raw).unwrap();
    assert!(detail.operands().is_empty());
    assert_eq!(detail.op_count(), 0);
    assert!(!detail.is_conditional());
    assert!(!detail.update_cr0());
}

#[test]
fn invalid_operand_mid_sequence_is_kept() {
    let raw = cs_ppc::new(
        PPC_BC_INVALID,
        PPC_BH_INVALID,
        false,
        &[
            cs_ppc_op::reg(PPC_REG_R4),
            cs_ppc_op::invalid(),
            cs_ppc_op::imm(7),
        ],
    );
    let detail = PpcDetail::from_raw(&raw);
    assert_eq!(detail.op_count(), 3);
    assert_eq!(detail.operands()[1].kind(), OperandKind::Invalid);
    assert_eq!(detail.operands()[1].reg(), None);
    assert_eq!(detail.operands()[2].imm(), Some(7));
}

#[test]
fn operands_keep_record_order() {
    let raws = [
        cs_ppc_op::crx(4, PPC_REG_CR1, PPC_BC_LT),
        cs_ppc_op::reg(PPC_REG_F1),
        cs_ppc_op::imm(-8),
        cs_ppc_op::mem(PPC_REG_R9, 0),
    ];
    let detail = PpcDetail::from_raw(&cs_ppc::new(PPC_BC_LT, PPC_BH_MINUS, false, &raws));
    let kinds: Vec<_> = detail.iter().map(PpcOperand::kind).collect();
    assert_eq!(
        kinds,
        [
            OperandKind::Crx,
            OperandKind::Reg,
            OperandKind::Imm,
            OperandKind::Mem
        ]
    );
    for (i, (decoded, raw)) in detail.iter().zip(&raws).enumerate() {
        assert_eq!(*decoded, PpcOperand::from_raw(raw), "operand {i}");
    }
    assert_eq!(detail.bh(), BranchHint::Minus);
}

#[test]
fn max_arity_is_not_truncated() {
    let raws: Vec<_> = (0..PPC_MAX_OPERANDS as i64).map(cs_ppc_op::imm).collect();
    let detail = PpcDetail::from_raw(&cs_ppc::new(PPC_BC_INVALID, PPC_BH_INVALID, false, &raws));
    assert_eq!(detail.op_count(), PPC_MAX_OPERANDS);
    let imms: Vec<_> = detail.into_iter().filter_map(|op| op.imm()).collect();
    assert_eq!(imms, (0..PPC_MAX_OPERANDS as i64).collect::<Vec<_>>());
}

#[test]
fn slots_past_count_are_ignored() {
    let mut raw = cs_ppc::new(PPC_BC_INVALID, PPC_BH_INVALID, false, &[cs_ppc_op::imm(1)]);
    // Stale garbage beyond op_count must not be looked at.
    raw.operands[1].type_ = 0xdead;
    raw.operands[PPC_MAX_OPERANDS - 1] = cs_ppc_op::reg(PPC_REG_ENDING);
    let detail = PpcDetail::try_from_raw(&raw).unwrap();
    assert_eq!(detail.operands(), [PpcOperand::Imm(1)]);
}

#[test]
fn decoding_twice_is_equal() {
    let raw = cs_ppc::new(
        PPC_BC_SO,
        PPC_BH_PLUS,
        true,
        &[cs_ppc_op::crx(4, PPC_REG_CR6, PPC_BC_SO), cs_ppc_op::imm(-32768)],
    );
    let a = PpcDetail::from_raw(&raw);
    let b = PpcDetail::from_raw(&raw);
    assert_eq!(a, b);
    assert_eq!(a.bc().packed(), 140);
}

#[test]
fn operand_count_overflow() {
    let mut raw = cs_ppc::default();
    raw.op_count = PPC_MAX_OPERANDS as u8 + 1;
    assert_eq!(
        PpcDetail::try_from_raw(&raw),
        Err(DecodeError::OperandCountOverflow {
            count: PPC_MAX_OPERANDS + 1,
            max: PPC_MAX_OPERANDS
        })
    );
}

#[test]
fn bad_operand_reports_index() {
    let mut raw = cs_ppc::new(
        PPC_BC_INVALID,
        PPC_BH_INVALID,
        false,
        &[cs_ppc_op::reg(PPC_REG_R0), cs_ppc_op::imm(0)],
    );
    raw.operands[1].type_ = 5;
    let err = PpcDetail::try_from(&raw).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Operand {
            index: 1,
            source: OperandError::UnknownKind(5)
        }
    );
    assert_eq!(err.to_string(), "operand 1: unknown operand kind 5");
}

#[test]
fn bad_flat_fields() {
    let raw = cs_ppc::new(37, PPC_BH_INVALID, false, &[]);
    assert_eq!(
        PpcDetail::try_from_raw(&raw),
        Err(DecodeError::UnknownBranchCondition(37))
    );
    let raw = cs_ppc::new(PPC_BC_NE, 3, false, &[]);
    assert_eq!(
        PpcDetail::try_from_raw(&raw),
        Err(DecodeError::UnknownBranchHint(3))
    );
}

#[test]
#[should_panic(expected = "operand count 9 exceeds maximum 8")]
fn from_raw_panics_on_count_overflow() {
    let mut raw = cs_ppc::default();
    raw.op_count = 9;
    PpcDetail::from_raw(&raw);
}

#[test]
#[should_panic(expected = "operand 0: unknown operand kind 65")]
fn from_raw_panics_on_unknown_kind() {
    let mut raw = cs_ppc::new(PPC_BC_INVALID, PPC_BH_INVALID, false, &[cs_ppc_op::imm(0)]);
    raw.operands[0].type_ = 65;
    PpcDetail::from_raw(&raw);
}
