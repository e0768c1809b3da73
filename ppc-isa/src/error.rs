use thiserror::Error;

/// A raw record that does not match this decoder's tables.
///
/// Every variant means the disassembly engine and this crate disagree
/// about the architecture constants (usually a version mismatch). There is
/// no partial result: the whole record is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The engine reported more operands than a record can hold.
    #[error("operand count {count} exceeds maximum {max}")]
    OperandCountOverflow { count: usize, max: usize },

    #[error("unknown branch condition {0}")]
    UnknownBranchCondition(u32),

    #[error("unknown branch hint {0}")]
    UnknownBranchHint(u32),

    /// Operand at `index` (in assembly order) failed to decode.
    #[error("operand {index}: {source}")]
    Operand { index: usize, source: OperandError },
}

/// Errors from decoding a single raw operand.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error("unknown operand kind {0}")]
    UnknownKind(u32),

    #[error("unknown register {0}")]
    UnknownRegister(u32),

    #[error("unknown condition {0}")]
    UnknownCondition(u32),
}

/// Lookup failure for an enumeration value, by raw number or by name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnknownValue {
    #[error("unknown {kind} value {value}")]
    Raw { kind: &'static str, value: u32 },

    #[error("unknown {kind} name {name:?}")]
    Name { kind: &'static str, name: String },
}

/// Abort on an engine/decoder mismatch. Logs before panicking.
#[cold]
#[track_caller]
pub(crate) fn contract_violation(err: impl std::fmt::Display) -> ! {
    log::error!("PowerPC detail contract violation: {err}");
    panic!("PowerPC detail contract violation: {err}");
}
