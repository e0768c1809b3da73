//! Typed PowerPC instruction detail model.
//!
//! Converts the raw, union-based detail records written by a disassembly
//! engine (`ppc-isa-sys`) into owned, strongly-typed values: closed enums
//! for every architecture constant, a sum type per operand, and
//! [`PpcDetail`] for the per-instruction branch metadata and operand list.
//!
//! The enumerations are generated at build time from the ISA table shipped
//! with `ppc-isa-sys`; their discriminants are the engine's raw constants.

mod branch;
pub mod detail;
pub mod error;
pub mod operand;
pub mod register;

include!(concat!(env!("OUT_DIR"), "/generated.rs"));

pub use detail::PpcDetail;
pub use error::{DecodeError, OperandError, UnknownValue};
pub use operand::{PpcOpCrx, PpcOpMem, PpcOperand};
pub use register::RegisterBank;
pub use ppc_isa_sys::PPC_MAX_OPERANDS;
