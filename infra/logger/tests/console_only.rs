use foodloop_logger::{LevelFilter, Logger};

#[test]
fn console_only_has_no_file_output() {
    let logger = Logger::builder("integration-console-only")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_output(), "console-only logger should not create a file writer");
}
