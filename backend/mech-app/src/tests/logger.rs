use crate::logger::initialize;

use mech_config::LogLevel;

use log::LevelFilter;
use tempfile::TempDir;

// The logger is process-global, so this is the only test that installs it.
#[test]
fn given_log_file_when_initialized_then_records_land_in_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("logs").join("mech.log");

    initialize(LogLevel(LevelFilter::Info), Some(path.clone()), true).unwrap();
    log::info!("upload history listed");
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("upload history listed"));
    assert!(contents.contains("INFO"));
}
