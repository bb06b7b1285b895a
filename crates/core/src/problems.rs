mod saddle;

pub use saddle::{HessianProblem, SaddleProblem};
