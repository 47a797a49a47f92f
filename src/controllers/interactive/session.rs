use crate::controllers::interactive::events::input_event::InputEvent;
use crate::core::actions::generate_fractal::sampler_strategy::SamplerStrategy;
use crate::core::data::parameter_window::ParameterWindowError;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::zoom_event::{ZoomConfig, ZoomEvent};

/// The view state of one exploration session.
///
/// Every mutation goes through a method that reports whether the image needs
/// recomputing. The current request is only ever replaced wholesale, so a
/// pass holding a clone always reads a consistent window.
#[derive(Debug, Clone)]
pub struct ExplorerSession {
    initial: RenderRequest,
    current: RenderRequest,
    zoom_config: ZoomConfig,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(initial: RenderRequest, zoom_config: ZoomConfig) -> Self {
        Self {
            current: initial.clone(),
            initial,
            zoom_config,
        }
    }

    #[must_use]
    pub fn current(&self) -> &RenderRequest {
        &self.current
    }

    #[must_use]
    pub fn zoom_config(&self) -> &ZoomConfig {
        &self.zoom_config
    }

    /// Reframes the window around the event's anchor and returns the request
    /// to recompute. A zoom that would collapse the window is rejected and
    /// leaves the session unchanged.
    pub fn zoom(&mut self, event: ZoomEvent) -> Result<&RenderRequest, ParameterWindowError> {
        let window = self.current.window.reframe(event)?;
        self.current.window = window;

        Ok(&self.current)
    }

    /// Returns `true` if the strategy changed.
    pub fn set_strategy(&mut self, strategy: SamplerStrategy) -> bool {
        let changed = self.current.strategy != strategy;
        self.current.strategy = strategy;

        changed
    }

    /// Restores the starting window, keeping the current strategy. Returns
    /// `true` if the window moved.
    pub fn reset_view(&mut self) -> bool {
        let changed = self.current.window != self.initial.window;
        self.current.window = self.initial.window;

        changed
    }

    /// Applies `event` and returns whether the image needs recomputing.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Zoom { direction, anchor } => {
                let zoom = ZoomEvent::from_direction(direction, anchor, &self.zoom_config);
                let before = self.current.window;

                match self.zoom(zoom) {
                    Ok(request) => request.window != before,
                    Err(err) => {
                        log::warn!("ignoring zoom at ({}, {}): {}", anchor.x, anchor.y, err);
                        false
                    }
                }
            }
            InputEvent::ToggleStrategy => {
                let strategy = self.current.strategy.toggled();
                log::info!("switching sampler to {}", strategy);

                self.set_strategy(strategy)
            }
            InputEvent::ResetView => self.reset_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::parameter_window::WindowBounds;
    use crate::core::data::point::Point;
    use crate::core::data::zoom_event::ZoomDirection;
    use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;

    fn create_session() -> ExplorerSession {
        let request = LyapunovConfig::default()
            .build_render_request(SamplerStrategy::WorkStealing)
            .unwrap();

        ExplorerSession::new(request, ZoomConfig::default())
    }

    fn centre(session: &ExplorerSession) -> Point {
        let viewport = session.current().viewport();

        Point {
            x: (viewport.width() / 2) as i32,
            y: (viewport.height() / 2) as i32,
        }
    }

    fn assert_bounds_close(actual: WindowBounds, expected: WindowBounds) {
        for (a, e) in [
            (actual.x_min, expected.x_min),
            (actual.x_max, expected.x_max),
            (actual.y_min, expected.y_min),
            (actual.y_max, expected.y_max),
        ] {
            assert!((a - e).abs() < 1e-12, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_zoom_in_at_centre_halves_window() {
        let mut session = create_session();
        let anchor = centre(&session);

        let needs_recompute = session.handle_input(InputEvent::Zoom {
            direction: ZoomDirection::In,
            anchor,
        });

        assert!(needs_recompute);
        assert_bounds_close(
            session.current().window.bounds(),
            WindowBounds {
                x_min: 2.5,
                x_max: 3.5,
                y_min: 2.5,
                y_max: 3.5,
            },
        );
    }

    #[test]
    fn test_zoom_in_then_out_restores_window() {
        let mut session = create_session();
        let anchor = centre(&session);
        let initial = session.current().window.bounds();

        session.handle_input(InputEvent::Zoom {
            direction: ZoomDirection::In,
            anchor,
        });
        session.handle_input(InputEvent::Zoom {
            direction: ZoomDirection::Out,
            anchor,
        });

        assert_bounds_close(session.current().window.bounds(), initial);
    }

    #[test]
    fn test_rejected_zoom_leaves_state_untouched() {
        let mut session = create_session();
        let before = session.current().clone();

        let result = session.zoom(ZoomEvent::new(1.0, Point { x: 0, y: 0 }));

        assert!(result.is_err());
        assert_eq!(session.current(), &before);
    }

    #[test]
    fn test_rejected_zoom_input_needs_no_recompute() {
        let mut session = ExplorerSession::new(
            create_session().current().clone(),
            ZoomConfig {
                zoom_in_ratio: 1.0,
                ..ZoomConfig::default()
            },
        );

        let needs_recompute = session.handle_input(InputEvent::Zoom {
            direction: ZoomDirection::In,
            anchor: Point { x: 0, y: 0 },
        });

        assert!(!needs_recompute);
    }

    #[test]
    fn test_zero_ratio_zoom_needs_no_recompute() {
        let mut session = ExplorerSession::new(
            create_session().current().clone(),
            ZoomConfig {
                zoom_in_ratio: 0.0,
                ..ZoomConfig::default()
            },
        );
        let anchor = centre(&session);

        let needs_recompute = session.handle_input(InputEvent::Zoom {
            direction: ZoomDirection::In,
            anchor,
        });

        assert!(!needs_recompute);
    }

    #[test]
    fn test_repeated_zoom_in_stops_requesting_recompute() {
        let mut session = create_session();
        let zoom_in = InputEvent::Zoom {
            direction: ZoomDirection::In,
            anchor: Point { x: 333, y: 108 },
        };

        let accepted = (0..10_000)
            .take_while(|_| session.handle_input(zoom_in))
            .count();

        assert!(accepted > 0 && accepted < 10_000, "accepted {} zooms", accepted);
        assert!(!session.handle_input(zoom_in));
    }

    #[test]
    fn test_toggle_strategy_flips_between_parallel_strategies() {
        let mut session = create_session();

        assert!(session.handle_input(InputEvent::ToggleStrategy));
        assert_eq!(session.current().strategy, SamplerStrategy::StaticBands);

        assert!(session.handle_input(InputEvent::ToggleStrategy));
        assert_eq!(session.current().strategy, SamplerStrategy::WorkStealing);
    }

    #[test]
    fn test_set_same_strategy_reports_no_change() {
        let mut session = create_session();

        assert!(!session.set_strategy(SamplerStrategy::WorkStealing));
        assert!(session.set_strategy(SamplerStrategy::Serial));
    }

    #[test]
    fn test_reset_view_restores_initial_window_only() {
        let mut session = create_session();
        let initial = session.current().window;

        assert!(!session.reset_view());

        session.set_strategy(SamplerStrategy::Serial);
        session
            .zoom(ZoomEvent::new(0.3, Point { x: 100, y: 700 }))
            .unwrap();

        assert!(session.handle_input(InputEvent::ResetView));
        assert_eq!(session.current().window, initial);
        assert_eq!(session.current().strategy, SamplerStrategy::Serial);
    }
}
