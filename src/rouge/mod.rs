// ROUGE overlap scoring: candidate summaries against reference summaries.
//
// Reproduces the default behavior of the common ROUGE scoring library
// (lower-casing, alphanumeric tokens, no stemming) so scores line up with
// numbers produced elsewhere.

pub mod score;
pub mod scorer;
pub mod tokenize;
