mod no_op;
mod sleep;

use super::registry::WorkloadEntry;

#[cfg(test)]
pub(super) use no_op::NoOpTest;

pub(super) fn builtins() -> Vec<WorkloadEntry> {
    vec![
        WorkloadEntry {
            name: "NoOpTest",
            description: "Completes operations as fast as possible without doing any work.",
            factory: no_op::create,
        },
        WorkloadEntry {
            name: "SleepTest",
            description: "Sleeps a jittered interval per operation to simulate remote latency.",
            factory: sleep::create,
        },
    ]
}
