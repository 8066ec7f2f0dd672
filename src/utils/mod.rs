pub mod format;

pub use format::{age_label, round_tenth};
