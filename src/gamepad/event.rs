//! Raw joystick events as delivered by the Linux joystick driver.

/// Event type bit: a button was pressed or released.
const TYPE_BUTTON: u8 = 0x01;
/// Event type bit: an axis moved.
const TYPE_AXIS: u8 = 0x02;
/// Event type bit: synthetic event describing the initial device state.
const TYPE_INIT: u8 = 0x80;

/// Size in bytes of one `struct js_event`.
pub const EVENT_SIZE: usize = 8;

/// Which kind of slot an event updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A button slot (value 0 = released, 1 = pressed).
    Button,
    /// An axis slot (value in `-32767..=32767`).
    Axis,
}

/// One event read from the device.
///
/// Consumed once by the poll loop and never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInputEvent {
    /// Driver timestamp in milliseconds.
    pub timestamp_ms: u32,
    /// Button state or axis position.
    pub value: i16,
    /// Raw type bits, possibly carrying the initial-state flag.
    pub kind_bits: u8,
    /// Button or axis number.
    pub index: u8,
}

impl RawInputEvent {
    /// Build a button event.
    #[must_use]
    pub fn button(index: u8, value: i16) -> Self {
        Self {
            timestamp_ms: 0,
            value,
            kind_bits: TYPE_BUTTON,
            index,
        }
    }

    /// Build an axis event.
    #[must_use]
    pub fn axis(index: u8, value: i16) -> Self {
        Self {
            timestamp_ms: 0,
            value,
            kind_bits: TYPE_AXIS,
            index,
        }
    }

    /// Mark this event as part of the initial state burst sent on open.
    #[must_use]
    pub fn initial(mut self) -> Self {
        self.kind_bits |= TYPE_INIT;
        self
    }

    /// Decode a native-endian `struct js_event`.
    #[must_use]
    pub fn decode(bytes: [u8; EVENT_SIZE]) -> Self {
        Self {
            timestamp_ms: u32::from_ne_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ]),
            value: i16::from_ne_bytes([bytes[4], bytes[5]]),
            kind_bits: bytes[6],
            index: bytes[7],
        }
    }

    /// Whether the driver flagged this as an initial-state event.
    #[must_use]
    pub fn is_initial_state(&self) -> bool {
        self.kind_bits & TYPE_INIT != 0
    }

    /// Slot kind with the initial-state flag stripped, or `None` for
    /// event types this crate does not track.
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        match self.kind_bits & !TYPE_INIT {
            TYPE_BUTTON => Some(EventKind::Button),
            TYPE_AXIS => Some(EventKind::Axis),
            _ => None,
        }
    }
}
