mod run_vm;
mod time_fmt;
mod workbench_vm;

pub use run_vm::{RunIntent, RunPhase, RunVm, start_run};
pub use time_fmt::format_duration;
pub use workbench_vm::{BenchIntent, WorkbenchVm};
