// Light - A switchable light

/// A light that is either on or off
///
/// Starts switched off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Light {
    is_on: bool,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
        log::info!("Light is turned ON");
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
        log::info!("Light is turned OFF");
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }
}
