//! Synthesis of reversible arithmetic circuits.
//!
//! Circuits are emitted into a [CircuitBuilder], which hands out bits from a single flat bit space
//! and records the gate sequence. Every circuit in this crate is a free function taking the
//! builder, its operand registers and an ancilla register whose width is fixed by the
//! [aux_size] table:
//!
//! - [gates]: two-input boolean gates (`and`, `or`, `xor`).
//! - [registers]: loading classical values, clearing and copying registers.
//! - [adder]: the full adder, ripple-carry addition and subtraction.
//! - [compare]: `>` and `>=` on unsigned registers.
//! - [modular]: modular addition, doubling, power-of-two scaling and multiplication.
//!
//! Controlled variants of a circuit are obtained by emitting it inside
//! [CircuitBuilder::controlled], which adds the control bit to every unitary gate. The
//! `controlled_*` arithmetic circuits additionally copy their first operand into the result when
//! the control is 0, so the result register holds a meaningful value either way.
//!
//! Ancilla are lent to a circuit body through [CircuitBuilder::with_scratch], which resets them on
//! entry and checks that the body returned them zeroed.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use revcirc_core::{BitId, Circuit, Gate, GateCounts, GateKind, Register};

pub mod adder;
pub mod aux_size;
pub mod compare;
pub mod gates;
pub mod modular;
pub mod registers;

mod builder;
pub use builder::{BitStatus, CircuitBuilder};

mod errors;
pub use errors::CompositionError;

mod options;
pub use options::SynthesisOptions;

mod scratch;
pub use scratch::Scratch;

// LOGGING
// ================================================================================================

/// Installs a logger configured by the `REVCIRC_LOG` environment variable.
///
/// Synthesis logs through the `log` facade under the `synth` target. Calling this more than once
/// is harmless.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env("REVCIRC_LOG").format_timestamp(None).try_init();
}

// TEST HELPERS
// ================================================================================================
