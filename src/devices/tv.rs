// Tv - A television with a volume setting

/// Volume a TV starts with
pub const DEFAULT_VOLUME: i32 = 10;

/// A TV whose volume can be stepped up and down
///
/// The volume is unbounded. Steps wrap at the `i32` limits so that
/// `volume_up` and `volume_down` are always exact inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tv {
    volume: i32,
}

impl Tv {
    pub fn new() -> Self {
        Self::with_volume(DEFAULT_VOLUME)
    }

    pub fn with_volume(volume: i32) -> Self {
        Self { volume }
    }

    /// Increase the volume by one step
    pub fn volume_up(&mut self) {
        self.volume = self.volume.wrapping_add(1);
        log::info!("TV volume increased to {}", self.volume);
    }

    /// Decrease the volume by one step
    pub fn volume_down(&mut self) {
        self.volume = self.volume.wrapping_sub(1);
        log::info!("TV volume decreased to {}", self.volume);
    }

    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume;
        log::info!("TV volume set to {}", self.volume);
    }

    pub fn volume(&self) -> i32 {
        self.volume
    }
}

impl Default for Tv {
    fn default() -> Self {
        Self::new()
    }
}
