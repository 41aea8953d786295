// Job posting and browsing.
// Recruiters post jobs; anyone can search and view them.

pub mod handlers;
pub mod validation;
