use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

use facewatch_core::detection::infrastructure::model_resolver;
use facewatch_core::shared::constants::{CASCADE_MODEL_NAME, CASCADE_MODEL_URL};

/// Resolves the face cascade model in the background at startup so the
/// first Start does not stall on a download.
pub struct ModelCache {
    result: Mutex<Option<Result<PathBuf, String>>>,
    ready: Condvar,
    progress: Arc<Mutex<(u64, u64)>>,
}

impl ModelCache {
    pub fn new() -> Arc<Self> {
        let cache = Arc::new(Self {
            result: Mutex::new(None),
            ready: Condvar::new(),
            progress: Arc::new(Mutex::new((0, 0))),
        });

        let slot = cache.clone();
        thread::spawn(move || slot.resolve());

        cache
    }

    fn resolve(&self) {
        let progress = self.progress.clone();
        let result = model_resolver::resolve(
            CASCADE_MODEL_NAME,
            CASCADE_MODEL_URL,
            None,
            Some(Box::new(move |downloaded, total| {
                if let Ok(mut p) = progress.lock() {
                    *p = (downloaded, total);
                }
            })),
        );
        if let Err(e) = &result {
            log::error!("Face model unavailable: {e}");
        }
        if let Ok(mut slot) = self.result.lock() {
            *slot = Some(result.map_err(|e| e.to_string()));
        }
        self.ready.notify_all();
    }

    /// Blocks until the model path is known. Calls `on_progress(downloaded,
    /// total)` while a download is running and gives up once `cancelled`
    /// is set.
    pub fn wait_for_cascade(
        &self,
        on_progress: &dyn Fn(u64, u64),
        cancelled: &AtomicBool,
    ) -> Result<PathBuf, String> {
        let mut guard = self.result.lock().map_err(|e| e.to_string())?;
        loop {
            if cancelled.load(Ordering::Relaxed) {
                return Err("Cancelled".into());
            }
            if let Some(result) = guard.as_ref() {
                return result.clone();
            }
            if let Ok(progress) = self.progress.try_lock() {
                let (downloaded, total) = *progress;
                if total > 0 {
                    on_progress(downloaded, total);
                }
            }
            let (next, _) = self
                .ready
                .wait_timeout(guard, Duration::from_millis(100))
                .map_err(|e| e.to_string())?;
            guard = next;
        }
    }
}
