//! Assemble-and-run test harness.

use legv8_core::asm::assemble_source;
use legv8_core::config::Config;
use legv8_core::sim::{RunReport, Simulator};
use legv8_core::SimError;

/// Number of memory words used by harness-built machines. Small enough to
/// keep fault tests cheap, big enough for every scenario program.
pub const TEST_MEMORY_WORDS: usize = 1024;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn test_config() -> Config {
    Config {
        memory_words: TEST_MEMORY_WORDS,
    }
}

/// Assembles `source` and runs it to completion, panicking on any error.
pub fn run_source(source: &str) -> (Simulator, RunReport) {
    init_tracing();
    let config = test_config();
    let image = assemble_source(source, "test.s", config.memory_words).expect("program assembles");
    let sim = Simulator::new(image, &config);
    let report = sim.run().expect("program runs to a clean halt");
    (sim, report)
}

/// Runs a hand-built memory image to completion, returning the run result
/// alongside the simulator for state inspection.
pub fn run_image(image: Vec<u32>) -> (Simulator, Result<RunReport, SimError>) {
    init_tracing();
    let sim = Simulator::new(image, &test_config());
    let result = sim.run();
    (sim, result)
}
