mod pipeline;
pub mod prompt;
pub mod validate;

pub use pipeline::{
    ScheduledTask, SchedulerSettings, SchedulingPipeline, SchedulingRequest,
    DEFAULT_DURATION_MINUTES, DEFAULT_LOOKAHEAD_DAYS,
};
