//! Per-poll runtime step
//!
//! One call to [`Runtime::poll`] is one iteration of the fixed-period main
//! loop: input in, state advanced, one frame out.

use ringtimer_hal::PixelWriter;
use rgb::RGB8;

use crate::animation::{pixel_buffer, AnimationEngine, PixelBuffer};
use crate::config::{Config, ConfigError};
use crate::controller::Controller;
use crate::error::Error;
use crate::input::InputEvents;
use crate::traits::{DisplayDriver, DisplayExt, View};

/// Main-loop state owned by the poll context
pub struct Runtime {
    controller: Controller,
    engine: AnimationEngine,
    frame: PixelBuffer,
    last_view: Option<View>,
}

impl Runtime {
    /// Build the runtime for a validated configuration
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let frame =
            pixel_buffer(config.num_pixels as usize).map_err(|_| ConfigError::InvalidPixelCount)?;

        info!("Runtime ready: {}", config);
        Ok(Self {
            controller: Controller::new(config),
            engine: AnimationEngine::new(),
            frame,
            last_view: None,
        })
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Engine access for registering a custom renderer or pulse band
    pub fn engine_mut(&mut self) -> &mut AnimationEngine {
        &mut self.engine
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[RGB8] {
        &self.frame
    }

    /// Run one poll cycle
    ///
    /// Pixels are flushed exactly once; the display is redrawn only when
    /// its view changed since the last successful redraw.
    pub fn poll<P, D>(
        &mut self,
        now_ms: u32,
        input: InputEvents,
        pixels: &mut P,
        display: &mut D,
    ) -> Result<(), Error>
    where
        P: PixelWriter,
        D: DisplayDriver,
    {
        self.controller.handle_steps(input.steps);
        if let Some(edge) = input.button {
            self.controller.handle_button(edge, now_ms);
        }
        self.controller.update_timer(now_ms);
        self.controller.tick(now_ms);

        let (kind, params) = self.controller.animation(now_ms);
        self.engine.render(kind, &params, &mut self.frame);

        pixels.write_frame(&self.frame)?;
        pixels.flush()?;

        let view = self.controller.view(now_ms);
        if self.last_view != Some(view) {
            display.show(view)?;
            self.last_view = Some(view);
        }

        Ok(())
    }
}
