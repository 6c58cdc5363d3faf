//! Program admin pages.

pub mod application_view;

#[cfg(test)]
mod tests;

pub use application_view::{ApplicationReviewPage, EmailNotice, ProgramApplicationView};
