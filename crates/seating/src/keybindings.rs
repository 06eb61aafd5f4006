//! Rebindable keys for the two seating actions.
//!
//! Systems read from [`SeatKeyBindings`] instead of hardcoding `KeyCode`
//! values, so a host settings screen can remap them.

use bevy::prelude::*;

/// Every seating action that can be bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatAction {
    EnterVehicle,
    ShuffleSeat,
}

impl SeatAction {
    pub const ALL: &'static [SeatAction] = &[SeatAction::EnterVehicle, SeatAction::ShuffleSeat];

    /// Human-readable label for display in a settings UI.
    pub fn label(self) -> &'static str {
        match self {
            SeatAction::EnterVehicle => "Enter Vehicle (nearest door)",
            SeatAction::ShuffleSeat => "Shuffle Seat",
        }
    }
}

/// A single key binding: a key code plus optional modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    pub const fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    /// True on the frame the key goes down with exactly the bound modifiers held.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// Human-readable label (e.g. "F", "Ctrl+H").
    pub fn display_label(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(keycode_label(self.key));
        parts.join("+")
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SeatKeyBindings {
    pub enter_vehicle: KeyBinding,
    pub shuffle_seat: KeyBinding,
}

impl Default for SeatKeyBindings {
    fn default() -> Self {
        Self {
            enter_vehicle: KeyBinding::simple(KeyCode::KeyF),
            shuffle_seat: KeyBinding::simple(KeyCode::KeyH),
        }
    }
}

impl SeatKeyBindings {
    pub fn get(&self, action: SeatAction) -> KeyBinding {
        match action {
            SeatAction::EnterVehicle => self.enter_vehicle,
            SeatAction::ShuffleSeat => self.shuffle_seat,
        }
    }

    pub fn set(&mut self, action: SeatAction, binding: KeyBinding) {
        match action {
            SeatAction::EnterVehicle => self.enter_vehicle = binding,
            SeatAction::ShuffleSeat => self.shuffle_seat = binding,
        }
    }

    /// Pairs of actions that share the same binding.
    pub fn find_conflicts(&self) -> Vec<(SeatAction, SeatAction)> {
        let mut conflicts = Vec::new();
        let all = SeatAction::ALL;
        for (i, &a) in all.iter().enumerate() {
            for &b in &all[i + 1..] {
                if self.get(a) == self.get(b) {
                    conflicts.push((a, b));
                }
            }
        }
        conflicts
    }
}

pub fn keycode_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::KeyE => "E",
        KeyCode::KeyF => "F",
        KeyCode::KeyG => "G",
        KeyCode::KeyH => "H",
        KeyCode::KeyJ => "J",
        KeyCode::KeyK => "K",
        KeyCode::KeyQ => "Q",
        KeyCode::KeyR => "R",
        KeyCode::KeyT => "T",
        KeyCode::KeyV => "V",
        KeyCode::KeyX => "X",
        KeyCode::KeyY => "Y",
        KeyCode::Enter => "Enter",
        KeyCode::Space => "Space",
        KeyCode::Tab => "Tab",
        KeyCode::F1 => "F1",
        KeyCode::F2 => "F2",
        KeyCode::F3 => "F3",
        KeyCode::F4 => "F4",
        _ => "???",
    }
}
