use crate::circuit::{Not, Wire};
use crate::func::{Component, Link, Orer};
use crate::BUS_WIDTH;

/// Flags a 16-lane value that is exactly zero.
///
/// The input lanes are fed into both operand halves of an [`Orer`], the OR outputs are
/// reduced, and the result is inverted. There is a single output lane (index 0).
#[derive(Debug)]
pub struct IsZero {
    inputs: [Wire; BUS_WIDTH],
    orer: Orer,
    not_gate: Not,
    output: Wire
}
impl IsZero {
    /// Creates a new zero detector. Its output is low until the first update.
    pub fn new() -> Self {
        Self {
            inputs: [Wire::new(); BUS_WIDTH],
            orer: Orer::new(),
            not_gate: Not::new(),
            output: Wire::new()
        }
    }

    /// Forces the output low without looking at the inputs.
    pub fn reset(&mut self) {
        self.output.update(false);
    }

    /// The detector's single output lane.
    pub fn output(&self) -> bool {
        self.output.get()
    }

    /// Drives the output high iff every input lane is low.
    pub fn update(&mut self) {
        for (i, input) in self.inputs.iter().enumerate() {
            self.orer.set_input_wire(i, input.get());
            self.orer.set_input_wire(i + BUS_WIDTH, input.get());
        }
        self.orer.update();

        let any_set = (0..BUS_WIDTH).any(|i| self.orer.get_output_wire(i));
        self.not_gate.update(any_set);
        self.output.update(self.not_gate.output());
        tracing::trace!(zero = self.output.get(), "zero detector updated");
    }
}
impl Default for IsZero {
    fn default() -> Self {
        Self::new()
    }
}
impl Component for IsZero {
    /// The zero detector has nothing to forward; this is a no-op.
    fn connect_output(&mut self, _next: Link) {}

    fn set_input_wire(&mut self, index: usize, value: bool) {
        self.inputs[index].update(value);
    }

    /// Panics for any `index` other than 0.
    fn get_output_wire(&self, index: usize) -> bool {
        assert_eq!(index, 0, "IsZero has a single output lane");
        self.output.get()
    }
}
impl std::fmt::Display for IsZero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(self.output.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::{link, Bus};
    use crate::word::Word;

    #[test]
    fn test_is_zero_exhaustive() {
        let mut zero = IsZero::new();
        for x in 0..=u16::MAX {
            Word::new(x).write_to(&mut zero, 0);
            zero.update();
            assert_eq!(zero.output(), x == 0, "IsZero failed for X=0x{x:04X}");
            assert_eq!(zero.get_output_wire(0), zero.output());
        }
    }

    #[test]
    fn test_single_high_lanes() {
        let mut zero = IsZero::new();
        for w in [Word::ONE, Word::new(0x8000)] {
            w.write_to(&mut zero, 0);
            zero.update();
            assert!(!zero.output(), "{w} should not read as zero");
        }
    }

    #[test]
    fn test_reset() {
        let mut zero = IsZero::new();
        zero.update();
        assert!(zero.output());

        zero.reset();
        assert!(!zero.output(), "reset should clear the output without re-evaluating");

        zero.update();
        assert!(zero.output());
    }

    #[test]
    fn test_connect_is_noop() {
        let bus = link(Bus::new());
        let mut zero = IsZero::new();
        zero.connect_output(bus.clone());
        zero.update();
        assert_eq!(Word::read_from(&*bus.borrow()), Word::ZERO);
        assert_eq!(zero.to_string(), "1");
    }

    #[test]
    #[should_panic]
    fn test_output_lane_out_of_range() {
        let _ = IsZero::new().get_output_wire(1);
    }
}
