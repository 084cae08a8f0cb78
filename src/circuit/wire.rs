/// A single signal line.
///
/// A written value is visible to the very next read; there is no delay or clocking.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Wire {
    value: bool
}
impl Wire {
    /// Creates a new wire, driven low.
    pub const fn new() -> Self {
        Self { value: false }
    }

    /// Drives the wire to `value`.
    pub fn update(&mut self, value: bool) {
        self.value = value;
    }

    /// Reads the current value of the wire.
    pub const fn get(&self) -> bool {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::Wire;

    #[test]
    fn starts_low() {
        assert!(!Wire::new().get());
        assert!(!Wire::default().get());
    }

    #[test]
    fn update_is_immediate() {
        let mut wire = Wire::new();
        wire.update(true);
        assert!(wire.get());
        wire.update(false);
        assert!(!wire.get());
    }
}
