//! Pretrained classifier inference.

mod logistic;

pub use logistic::LogisticModel;
