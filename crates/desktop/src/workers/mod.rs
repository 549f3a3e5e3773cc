pub mod model_cache;
pub mod monitor_worker;
