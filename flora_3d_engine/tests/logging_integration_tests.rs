//! Integration tests for engine logging through the public API.
//!
//! The logger is process-global, so every test here runs serially.

use flora_3d_engine::flora3d::log::{LogEntry, LogSeverity, Logger};
use flora_3d_engine::flora3d::resource::PrimitiveLibrary;
use flora_3d_engine::flora3d::turtle::PlantTurtle;
use flora_3d_engine::flora3d::{Engine, Error};
use serial_test::serial;
use std::sync::{Arc, Mutex};

/// Captures (severity, message) pairs.
struct CaptureLogger {
    entries: Arc<Mutex<Vec<(LogSeverity, String)>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries
            .lock()
            .unwrap()
            .push((entry.severity, entry.message.clone()));
    }
}

fn install_capture() -> Arc<Mutex<Vec<(LogSeverity, String)>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });
    entries
}

#[test]
#[serial]
fn test_build_errors_are_logged_before_surfacing() {
    let entries = install_capture();

    let turtle = PlantTurtle::new(PlantTurtle::ACCEPTED_ALPHABET).unwrap();
    let library = PrimitiveLibrary::standard_plant_set().unwrap();
    let result = turtle.build_lsys_object("]", &library);
    assert!(matches!(result, Err(Error::MalformedCommand(_))));

    let captured = entries.lock().unwrap().clone();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].0, LogSeverity::Error);
    assert!(captured[0].1.contains("empty transform stack"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_alphabet_mismatch_is_logged() {
    let entries = install_capture();

    assert!(PlantTurtle::new("ABC").is_err());

    let captured = entries.lock().unwrap().clone();
    assert_eq!(captured.len(), 1);
    assert!(captured[0].1.contains("accepted symbol set"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_errors_carry_file_and_line() {
    struct FileLineLogger {
        saw_location: Arc<Mutex<bool>>,
    }
    impl Logger for FileLineLogger {
        fn log(&self, entry: &LogEntry) {
            if entry.file.is_some() && entry.line.is_some() {
                *self.saw_location.lock().unwrap() = true;
            }
        }
    }

    let saw_location = Arc::new(Mutex::new(false));
    Engine::set_logger(FileLineLogger {
        saw_location: Arc::clone(&saw_location),
    });

    let turtle = PlantTurtle::new(PlantTurtle::ACCEPTED_ALPHABET).unwrap();
    let _ = turtle.build_lsys_object("S[", &PrimitiveLibrary::standard_plant_set().unwrap());

    assert!(*saw_location.lock().unwrap());

    Engine::reset_logger();
}
