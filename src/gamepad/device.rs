//! Joystick device access.
//!
//! [`InputDevice`] is the seam between the poll loop and the platform: open
//! once, report capabilities, and hand out events without ever blocking.
//! On Linux the backend reads `struct js_event` records from a
//! `/dev/input/js*` node opened with `O_NONBLOCK`.

use std::path::Path;

use super::event::RawInputEvent;
use crate::error::NavError;

/// What a device reported about itself when it was opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceCapabilities {
    /// Human-readable device name.
    pub name: String,
    /// Driver version number (`0xMMmmpp`).
    pub version: u32,
    /// Number of buttons.
    pub button_count: u8,
    /// Number of axes.
    pub axis_count: u8,
}

impl DeviceCapabilities {
    /// Driver version as `major.minor.patch`.
    #[must_use]
    pub fn version_string(&self) -> String {
        format!(
            "{}.{}.{}",
            self.version >> 16,
            (self.version >> 8) & 0xff,
            self.version & 0xff
        )
    }
}

/// A single opened gamepad.
pub trait InputDevice: Send {
    /// Capabilities queried at open time.
    fn capabilities(&self) -> &DeviceCapabilities;

    /// Read the next pending event.
    ///
    /// Returns `Ok(None)` when nothing is pending. Must not block.
    ///
    /// # Errors
    ///
    /// Any I/O failure other than would-block.
    fn read_event(&mut self) -> std::io::Result<Option<RawInputEvent>>;
}

/// Open the platform joystick at `path`.
///
/// # Errors
///
/// [`NavError::DeviceAbsent`] when the node cannot be opened,
/// [`NavError::DeviceQuery`] when it refuses the capability queries, and
/// [`NavError::Unsupported`] on platforms without a joystick backend.
pub fn open_device(path: &Path) -> Result<Box<dyn InputDevice>, NavError> {
    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(linux::JoystickDevice::open(path)?))
    }
    #[cfg(not(target_os = "linux"))]
    {
        Err(NavError::Unsupported(format!(
            "no joystick backend for this platform ({})",
            path.display()
        )))
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use std::ffi::CStr;
    use std::fs::{File, OpenOptions};
    use std::io::{ErrorKind, Read};
    use std::os::unix::fs::OpenOptionsExt;
    use std::os::unix::io::AsRawFd;
    use std::path::Path;
    use std::ptr::addr_of_mut;

    use super::{DeviceCapabilities, InputDevice};
    use crate::error::NavError;
    use crate::gamepad::event::{RawInputEvent, EVENT_SIZE};

    // _IOR('j', nr, size) from <linux/joystick.h>
    const JSIOCGVERSION: u32 = 0x8004_6a01;
    const JSIOCGAXES: u32 = 0x8001_6a11;
    const JSIOCGBUTTONS: u32 = 0x8001_6a12;
    const NAME_LEN: usize = 128;
    const JSIOCGNAME: u32 = 0x8000_6a13 | ((NAME_LEN as u32) << 16);

    /// Linux joystick API device (`/dev/input/js*`).
    pub(super) struct JoystickDevice {
        file: File,
        capabilities: DeviceCapabilities,
    }

    impl JoystickDevice {
        pub(super) fn open(path: &Path) -> Result<Self, NavError> {
            let file = OpenOptions::new()
                .read(true)
                .custom_flags(libc::O_NONBLOCK)
                .open(path)
                .map_err(|source| NavError::DeviceAbsent {
                    path: path.to_path_buf(),
                    source,
                })?;
            let capabilities =
                query_capabilities(&file).map_err(NavError::DeviceQuery)?;
            Ok(Self { file, capabilities })
        }
    }

    impl InputDevice for JoystickDevice {
        fn capabilities(&self) -> &DeviceCapabilities {
            &self.capabilities
        }

        fn read_event(&mut self) -> std::io::Result<Option<RawInputEvent>> {
            let mut buf = [0u8; EVENT_SIZE];
            match self.file.read(&mut buf) {
                Ok(EVENT_SIZE) => Ok(Some(RawInputEvent::decode(buf))),
                // The driver only hands out whole records.
                Ok(_) => Ok(None),
                Err(e) if e.kind() == ErrorKind::WouldBlock => Ok(None),
                Err(e) => Err(e),
            }
        }
    }

    fn query_capabilities(file: &File) -> std::io::Result<DeviceCapabilities> {
        let fd = file.as_raw_fd();
        let mut version: u32 = 0;
        let mut axes: u8 = 0;
        let mut buttons: u8 = 0;
        let mut name = [0u8; NAME_LEN];

        // SAFETY: each request writes at most the size encoded in it into
        // the pointed-to buffer, which is exactly that size.
        unsafe {
            check(libc::ioctl(fd, JSIOCGVERSION as _, addr_of_mut!(version)))?;
            check(libc::ioctl(fd, JSIOCGAXES as _, addr_of_mut!(axes)))?;
            check(libc::ioctl(fd, JSIOCGBUTTONS as _, addr_of_mut!(buttons)))?;
            check(libc::ioctl(fd, JSIOCGNAME as _, name.as_mut_ptr()))?;
        }

        let name = CStr::from_bytes_until_nul(&name).map_or_else(
            |_| String::from_utf8_lossy(&name).into_owned(),
            |s| s.to_string_lossy().into_owned(),
        );

        Ok(DeviceCapabilities {
            name,
            version,
            button_count: buttons,
            axis_count: axes,
        })
    }

    fn check(ret: libc::c_int) -> std::io::Result<()> {
        if ret < 0 {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}
