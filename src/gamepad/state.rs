use super::event::{EventKind, RawInputEvent};
use crate::error::NavError;

/// Most recent value seen for every button and axis of one device.
///
/// Slot counts are fixed when the device is opened. Each applied event
/// replaces exactly one slot; everything else keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamepadState {
    buttons: Vec<i16>,
    axes: Vec<i16>,
}

impl GamepadState {
    /// All-zero state sized for a device with the given slot counts.
    #[must_use]
    pub fn new(button_count: usize, axis_count: usize) -> Self {
        Self {
            buttons: vec![0; button_count],
            axes: vec![0; axis_count],
        }
    }

    /// Fold one event into the state.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidEventIndex`] when the event addresses a
    /// slot beyond the device's declared capacity; the state is untouched.
    /// Event types other than button/axis are ignored.
    pub fn apply(&mut self, event: &RawInputEvent) -> Result<(), NavError> {
        let Some(kind) = event.kind() else {
            return Ok(());
        };
        let slots = match kind {
            EventKind::Button => &mut self.buttons,
            EventKind::Axis => &mut self.axes,
        };
        let capacity = slots.len();
        let slot = slots.get_mut(usize::from(event.index)).ok_or(
            NavError::InvalidEventIndex {
                kind,
                index: event.index,
                capacity,
            },
        )?;
        *slot = event.value;
        Ok(())
    }

    /// Button value, 0 for buttons the device does not have.
    #[must_use]
    pub fn button(&self, index: usize) -> i16 {
        self.buttons.get(index).copied().unwrap_or(0)
    }

    /// Whether a button is held.
    #[must_use]
    pub fn pressed(&self, index: usize) -> bool {
        self.button(index) != 0
    }

    /// Axis value, 0 (centred) for axes the device does not have.
    #[must_use]
    pub fn axis(&self, index: usize) -> i16 {
        self.axes.get(index).copied().unwrap_or(0)
    }

    /// All button slots in index order.
    #[must_use]
    pub fn buttons(&self) -> &[i16] {
        &self.buttons
    }

    /// All axis slots in index order.
    #[must_use]
    pub fn axes(&self) -> &[i16] {
        &self.axes
    }

    /// Set a button slot directly. Out-of-range indices are ignored.
    pub fn set_button(&mut self, index: usize, value: i16) {
        if let Some(slot) = self.buttons.get_mut(index) {
            *slot = value;
        }
    }

    /// Set an axis slot directly. Out-of-range indices are ignored.
    pub fn set_axis(&mut self, index: usize, value: i16) {
        if let Some(slot) = self.axes.get_mut(index) {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_event_updates_only_its_slot() {
        let mut state = GamepadState::new(10, 7);
        state.apply(&RawInputEvent::axis(3, -12000)).unwrap();

        assert_eq!(state.axis(3), -12000);
        for (i, v) in state.axes().iter().enumerate() {
            if i != 3 {
                assert_eq!(*v, 0, "axis {i} changed");
            }
        }
        assert!(state.buttons().iter().all(|v| *v == 0));
    }

    #[test]
    fn last_write_wins_per_slot() {
        let mut state = GamepadState::new(4, 2);
        let events = [
            RawInputEvent::button(1, 1),
            RawInputEvent::axis(0, 500),
            RawInputEvent::button(1, 0),
            RawInputEvent::button(3, 1),
            RawInputEvent::axis(0, -700),
            RawInputEvent::axis(1, 32767).initial(),
        ];
        for event in &events {
            state.apply(event).unwrap();
        }

        assert_eq!(state.buttons(), &[0, 0, 0, 1]);
        assert_eq!(state.axes(), &[-700, 32767]);
    }

    #[test]
    fn out_of_range_index_is_rejected_without_growing() {
        let mut state = GamepadState::new(2, 2);
        let err = state.apply(&RawInputEvent::button(5, 1)).unwrap_err();

        assert!(matches!(
            err,
            NavError::InvalidEventIndex {
                kind: EventKind::Button,
                index: 5,
                capacity: 2,
            }
        ));
        assert_eq!(state.buttons().len(), 2);
        assert_eq!(state.axes().len(), 2);
        assert_eq!(state, GamepadState::new(2, 2));
    }

    #[test]
    fn missing_slots_read_as_neutral() {
        let state = GamepadState::new(0, 0);
        assert_eq!(state.button(9), 0);
        assert!(!state.pressed(9));
        assert_eq!(state.axis(6), 0);
    }
}
