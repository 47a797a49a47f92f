use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::PresenterPort;
use crate::core::actions::cancellation::SupersededBy;
use crate::core::actions::sample_plane::ports::sampler_backend::SamplerBackend;
use crate::core::data::render_request::RenderRequest;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    backend: Arc<dyn SamplerBackend>,
    presenter_port: Arc<dyn PresenterPort>,
}

/// Renders the most recently submitted request on a background worker.
///
/// Submitting a request supersedes whatever is in flight: the running pass is
/// cancelled at its next check and its result is never presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(backend: Arc<dyn SamplerBackend>, presenter_port: Arc<dyn PresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            backend,
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request` and returns its generation, which is strictly greater
    /// than any generation returned before.
    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        log::debug!(
            "submitting {} request {} ({}x{}, {})",
            request.settings.kind(),
            generation,
            request.viewport().width(),
            request.viewport().height(),
            request.strategy
        );

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take()
            && handle.join().is_err()
        {
            log::error!("render worker panicked");
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = SupersededBy {
                job_generation,
                latest_generation: &shared.generation,
                shutdown: &shared.shutdown,
            };

            let start = Instant::now();
            let result = shared.backend.sample(&request, &cancel_token);
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                log::debug!("discarding superseded render {}", job_generation);
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => {
                    log::info!(
                        "render {} finished in {:.2?} on {}",
                        job_generation,
                        render_duration,
                        shared.backend.display_name()
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    })
                }
                Err(err) if err.is_cancelled() => {
                    log::debug!("render {} cancelled", job_generation);
                    continue;
                }
                Err(err) => {
                    log::warn!("render {} failed: {}", job_generation, err);

                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
