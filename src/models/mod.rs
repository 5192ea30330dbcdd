pub mod model;
pub mod gbm;
pub mod ou_process;
