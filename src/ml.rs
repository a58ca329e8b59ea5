//! Machine learning helpers for loading and running the trained classifier.

pub mod svm;
