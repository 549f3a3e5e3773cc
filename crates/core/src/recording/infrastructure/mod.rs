pub mod file_detection_log;
