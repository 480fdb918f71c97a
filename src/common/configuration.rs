//! Crate constants and defaults

use crate::grid::bounds::ColumnBound;

/// Column validation policy applied by newly constructed grids
///
/// Inclusive upper bound, kept for compatibility with the established
/// behaviour. Grids opt out with `with_column_bound(ColumnBound::Exclusive)`.
pub const DEFAULT_COLUMN_BOUND: ColumnBound = ColumnBound::Inclusive;

/// Distance used by the single-step movement helpers
pub const DEFAULT_MOVE_DISTANCE: i8 = 1;

// 64-bit golden ratio, the additive constant of the boost-style combine
/// Additive constant mixed into every hash combine step
pub const HASH_COMBINE_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Left shift applied to the running seed when combining hashes
pub const HASH_COMBINE_LEFT_SHIFT: u32 = 6;
/// Right shift applied to the running seed when combining hashes
pub const HASH_COMBINE_RIGHT_SHIFT: u32 = 2;

// Finalizer multipliers from splitmix64
/// First multiplier of the integer finalizer
pub const MIX_MULTIPLIER_A: u64 = 0xbf58_476d_1ce4_e5b9;
/// Second multiplier of the integer finalizer
pub const MIX_MULTIPLIER_B: u64 = 0x94d0_49bb_1331_11eb;
