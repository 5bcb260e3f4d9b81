//! Local knowledge
//!
//! The static FAQ dataset used for exact-match answers, and the heuristic
//! that scores remote answers.

pub mod confidence;
pub mod faq;

pub use confidence::{score_confidence, MAX_CONFIDENCE};
pub use faq::{FaqEntry, FaqStore, DATASET_CONFIDENCE, DATASET_LABEL};
