//! Background gamepad polling.
//!
//! [`GamepadInputReader`] owns an [`InputDevice`] and a poll thread that
//! folds device events into a [`GamepadState`]. Every applied event
//! publishes a complete copy of the state through a lock-free triple
//! buffer, so the render loop reads the newest whole snapshot without
//! waiting on the poller and never sees a half-written slot.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use super::device::{open_device, DeviceCapabilities, InputDevice};
use super::state::GamepadState;
use crate::error::NavError;
use crate::options::GamepadOptions;

/// Upper bound on events discarded after the poll loop exits.
const MAX_DRAIN_EVENTS: usize = 4096;

/// What to do with the device handle once polling has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceRelease {
    /// Leak the handle. Closing the joystick node right after reading has
    /// been seen to leave buttons latched as pressed on the next open.
    #[default]
    Retain,
    /// Drop the handle and close the device.
    Close,
}

impl DeviceRelease {
    /// Policy selected by [`GamepadOptions::close_device_on_stop`].
    #[must_use]
    pub fn from_options(options: &GamepadOptions) -> Self {
        if options.close_device_on_stop {
            Self::Close
        } else {
            Self::Retain
        }
    }
}

/// Reflects a physical gamepad into a [`GamepadState`] off the render
/// thread.
pub struct GamepadInputReader {
    device: Option<Box<dyn InputDevice>>,
    capabilities: Option<DeviceCapabilities>,
    publisher: Option<triple_buffer::Input<GamepadState>>,
    snapshot: triple_buffer::Output<GamepadState>,
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<Box<dyn InputDevice>>>,
    poll_interval: Duration,
    release: DeviceRelease,
}

impl GamepadInputReader {
    /// Open the device configured in `options`.
    ///
    /// A missing device is not an error: the reader is returned without a
    /// device, logs one warning, and stays inactive for its lifetime.
    #[must_use]
    pub fn open(options: &GamepadOptions) -> Self {
        let path = Path::new(&options.device_path);
        let reader = match open_device(path) {
            Ok(device) => Self::with_device(device),
            Err(e) => {
                log::warn!("No gamepad, keyboard and mouse only: {e}");
                Self::disconnected()
            }
        };
        reader
            .with_poll_interval(options.poll_interval())
            .with_release(DeviceRelease::from_options(options))
    }

    /// Wrap an already opened device.
    #[must_use]
    pub fn with_device(device: Box<dyn InputDevice>) -> Self {
        let capabilities = device.capabilities().clone();
        log::info!(
            "Gamepad detected: {} (driver {}), {} axes, {} buttons",
            capabilities.name,
            capabilities.version_string(),
            capabilities.axis_count,
            capabilities.button_count,
        );
        let initial = GamepadState::new(
            usize::from(capabilities.button_count),
            usize::from(capabilities.axis_count),
        );
        let (publisher, snapshot) = triple_buffer::triple_buffer(&initial);
        Self {
            device: Some(device),
            capabilities: Some(capabilities),
            publisher: Some(publisher),
            snapshot,
            running: Arc::new(AtomicBool::new(false)),
            thread: None,
            poll_interval: GamepadOptions::default().poll_interval(),
            release: DeviceRelease::default(),
        }
    }

    /// A reader with no device. Never becomes active.
    #[must_use]
    pub fn disconnected() -> Self {
        let (_, snapshot) = triple_buffer::triple_buffer(&GamepadState::default());
        Self {
            device: None,
            capabilities: None,
            publisher: None,
            snapshot,
            running: Arc::new(AtomicBool::new(false)),
            thread: None,
            poll_interval: GamepadOptions::default().poll_interval(),
            release: DeviceRelease::default(),
        }
    }

    /// Override the sleep between read attempts.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Override the device release policy.
    #[must_use]
    pub fn with_release(mut self, release: DeviceRelease) -> Self {
        self.release = release;
        self
    }

    /// Capabilities of the opened device, if any.
    #[must_use]
    pub fn capabilities(&self) -> Option<&DeviceCapabilities> {
        self.capabilities.as_ref()
    }

    /// Whether a device is held and has not yet been handed to a poll
    /// thread.
    #[must_use]
    pub fn has_device(&self) -> bool {
        self.device.is_some()
    }

    /// Spawn the poll thread.
    ///
    /// Does nothing when there is no device or the thread is already
    /// running.
    ///
    /// # Errors
    ///
    /// [`NavError::ThreadSpawn`] if the OS refuses a new thread. The device
    /// is lost in that case and the reader stays inactive.
    pub fn start_reading(&mut self) -> Result<(), NavError> {
        if self.thread.is_some() {
            return Ok(());
        }
        let (Some(device), Some(publisher)) =
            (self.device.take(), self.publisher.take())
        else {
            log::info!("No gamepad present, not polling");
            return Ok(());
        };

        self.running.store(true, Ordering::Release);
        let running = Arc::clone(&self.running);
        let interval = self.poll_interval;
        let spawned = std::thread::Builder::new()
            .name("gamepad-reader".into())
            .spawn(move || poll_loop(device, publisher, &running, interval));

        match spawned {
            Ok(handle) => {
                self.thread = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.running.store(false, Ordering::Release);
                Err(NavError::ThreadSpawn(e))
            }
        }
    }

    /// Stop polling and wait for the thread.
    ///
    /// Returns within about one poll interval. Events still queued in the
    /// driver are drained and discarded before the thread exits, then the
    /// device goes through the configured [`DeviceRelease`] policy.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.thread.take() {
            match handle.join() {
                Ok(device) => self.release_device(device),
                Err(_) => log::warn!("Gamepad poll thread panicked"),
            }
            log::info!("Gamepad reader stopped");
        }
    }

    /// The newest state published by the poll thread.
    pub fn snapshot(&mut self) -> &GamepadState {
        self.snapshot.read()
    }

    /// Whether the poll thread is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.thread.is_some() && self.running.load(Ordering::Acquire)
    }

    fn release_device(&self, device: Box<dyn InputDevice>) {
        match self.release {
            DeviceRelease::Retain => {
                log::debug!("Leaving gamepad handle open");
                std::mem::forget(device);
            }
            DeviceRelease::Close => {
                log::debug!("Closing gamepad handle");
                drop(device);
            }
        }
    }
}

impl Drop for GamepadInputReader {
    fn drop(&mut self) {
        self.stop();
        if let Some(device) = self.device.take() {
            self.release_device(device);
        }
    }
}

/// Poll thread body. Hands the device back for release once done.
fn poll_loop(
    mut device: Box<dyn InputDevice>,
    mut publisher: triple_buffer::Input<GamepadState>,
    running: &AtomicBool,
    interval: Duration,
) -> Box<dyn InputDevice> {
    let caps = device.capabilities();
    let mut state = GamepadState::new(
        usize::from(caps.button_count),
        usize::from(caps.axis_count),
    );

    while running.load(Ordering::Acquire) {
        match device.read_event() {
            Ok(Some(event)) => match state.apply(&event) {
                Ok(()) => publisher.write(state.clone()),
                Err(e) => log::debug!("Discarding gamepad event: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::trace!("Gamepad read failed: {e}"),
        }
        std::thread::sleep(interval);
    }

    let drained = drain(device.as_mut());
    log::debug!("Gamepad poll loop done, drained {drained} pending events");
    device
}

/// Read and discard until the device reports nothing pending.
fn drain(device: &mut dyn InputDevice) -> usize {
    let mut drained = 0;
    while drained < MAX_DRAIN_EVENTS {
        match device.read_event() {
            Ok(Some(_)) => drained += 1,
            Ok(None) | Err(_) => break,
        }
    }
    drained
}
