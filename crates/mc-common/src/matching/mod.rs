pub mod scoring;
pub mod threshold;
pub mod weights;
