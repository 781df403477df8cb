//! # Instruction handlers
//!
//! One handler per mnemonic, grouped by category. Each handler is a state
//! transition over registers, flags, and memory given the operand the
//! dispatcher already resolved; handlers never fetch or decode.
//!
//! The dispatcher advances PC and charges base cycles. Handlers only touch
//! PC for control flow (branches, JMP) and only add penalty cycles
//! (page crossing, branch taken).

pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;
