pub mod frame_loop;
pub mod monitor_faces_use_case;
pub mod monitor_logger;
