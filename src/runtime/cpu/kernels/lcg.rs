//! Linear congruential PRNG kernel
//!
//! 32-bit LCG with the MSVC `rand()` constants. Each step advances the state
//! and yields bits 16..31 of the new state masked to 15 bits.

/// LCG multiplier
pub const LCG_MULTIPLIER: u32 = 214_013;

/// LCG increment
pub const LCG_INCREMENT: u32 = 2_531_011;

/// Largest value a single draw can produce
pub const LCG_MAX: u32 = 0x7FFF;

/// Advance `state` one step and return the 15-bit output
#[inline(always)]
pub fn lcg_step(state: &mut u32) -> u32 {
    *state = state.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
    (*state >> 16) & LCG_MAX
}

/// Fill `out` with consecutive draws, first element first
///
/// Draw order is part of the output contract, so this never runs in parallel.
#[inline]
pub fn lcg_fill_kernel(out: &mut [u32], state: &mut u32) {
    for elem in out.iter_mut() {
        *elem = lcg_step(state);
    }
}
