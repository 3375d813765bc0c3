// Presentation layer: turns computed results into something a person can read.

pub mod format;
pub mod report;
