//! System-wide capacity constants for Synguard hardware sizing.
//!
//! These values come from the published limits of the Synguard controller
//! range and drive the allocation maths in `synquote-engine`. Changing them
//! changes every derived bill of materials.

// ============================================================================
// SynApp (gateway) management limits
// ============================================================================

/// Maximum number of downstream door controllers one SynApp manages.
///
/// Door-controller counts above this limit fan out additional SynApp units:
/// `ceil(controllers / SYNAPP_MAX_DOOR_CONTROLLERS)`.
pub const SYNAPP_MAX_DOOR_CONTROLLERS: u32 = 32;

/// Maximum number of readers (in + out combined) one SynApp manages.
///
/// Reader counts above this limit fan out additional SynApp units:
/// `ceil(readers / SYNAPP_MAX_READERS)`.
pub const SYNAPP_MAX_READERS: u32 = 128;

// ============================================================================
// SynIO (expansion I/O) per-unit capacity
// ============================================================================

/// Auxiliary input points provided by one SynIO unit.
pub const SYNIO_INPUTS_PER_UNIT: u32 = 16;

/// Auxiliary output points provided by one SynIO unit.
pub const SYNIO_OUTPUTS_PER_UNIT: u32 = 16;

// ============================================================================
// Wiegand wiring semantics
// ============================================================================

/// Wiegand ports consumed by a door with both an in and an out reader.
///
/// Under the Wiegand protocol each reader direction occupies one physical
/// port, so an in-and-out door consumes a pair.
pub const WIEGAND_PORTS_PER_IN_OUT_DOOR: u32 = 2;
