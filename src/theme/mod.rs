//! Theme - Colors and Typography

pub mod colors;
