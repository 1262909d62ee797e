//! Argument matching
//!
//! Binds a candidate pool to a constructor's slots. Slots are visited in
//! declaration order; each takes the first still-available candidate (in
//! pool order) whose runtime type is the slot's declared type. A taken
//! candidate is consumed. Candidates left over at the end are discarded.

use std::sync::Arc;

use cqb_application::ports::activation::{BoundArgs, CandidatePool, ParamSlot};
use cqb_domain::error::{Error, Result};
use tracing::trace;

/// Binds candidate pools to constructor slots
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentMatcher;

impl ArgumentMatcher {
    /// Bind `pool` to `slots` of `type_name`
    ///
    /// Fails with `ArgumentUnmatched` on the first slot without a compatible,
    /// available candidate.
    pub fn match_slots(
        type_name: &'static str,
        slots: &'static [ParamSlot],
        pool: &CandidatePool,
    ) -> Result<BoundArgs> {
        let candidates = pool.candidates();
        let mut consumed = vec![false; candidates.len()];
        let mut values = Vec::with_capacity(slots.len());

        for slot in slots {
            let index = candidates
                .iter()
                .enumerate()
                .find(|(index, candidate)| !consumed[*index] && slot.accepts(candidate))
                .map(|(index, _)| index)
                .ok_or_else(|| {
                    Error::argument_unmatched(type_name, slot.name, slot.type_name())
                })?;
            consumed[index] = true;
            trace!(type_name, slot = slot.name, candidate = index, "slot bound");
            values.push(Arc::clone(&candidates[index]));
        }

        let leftover = consumed.iter().filter(|taken| !**taken).count();
        if leftover > 0 {
            trace!(type_name, leftover, "discarding unconsumed candidates");
        }

        Ok(BoundArgs::new(type_name, slots, values))
    }
}
