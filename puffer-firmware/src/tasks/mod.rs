//! Embassy async tasks
//!
//! Each task runs independently and communicates through `channels`.

pub mod input;
pub mod power;
pub mod tick;

pub use input::{input_task, TrainInputs};
pub use power::idle_loop;
pub use tick::{tick_task, TrainOutputs};
