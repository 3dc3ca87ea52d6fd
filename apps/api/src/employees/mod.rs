// Employee intake and lookup: resume submission, 360° evaluations, score reads.
// Payload validation lives here so nothing malformed reaches the scoring core.

pub mod handlers;
pub mod validation;
