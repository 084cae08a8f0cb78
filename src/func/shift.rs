use crate::circuit::Wire;
use crate::func::{Component, Link};
use crate::BUS_WIDTH;

/// Shifts a 16-lane value one position toward the MSB.
///
/// The MSB (lane 0) leaves through [`shift_out`](Self::shift_out) and
/// the shift-in line fills the LSB (lane 15).
#[derive(Debug)]
pub struct LeftShifter {
    inputs: [Wire; BUS_WIDTH],
    outputs: [Wire; BUS_WIDTH],
    shift_in: Wire,
    shift_out: Wire,
    next: Option<Link>
}
impl LeftShifter {
    /// Creates a new left shifter with all lanes low.
    pub fn new() -> Self {
        Self {
            inputs: [Wire::new(); BUS_WIDTH],
            outputs: [Wire::new(); BUS_WIDTH],
            shift_in: Wire::new(),
            shift_out: Wire::new(),
            next: None
        }
    }

    /// The bit shifted out by the last [`update`](Self::update).
    pub fn shift_out(&self) -> bool {
        self.shift_out.get()
    }

    /// Latches `shift_in` and shifts the input lanes into the output lanes.
    pub fn update(&mut self, shift_in: bool) {
        self.shift_in.update(shift_in);
        self.shift_out.update(self.inputs[0].get());
        for (output, input) in self.outputs.iter_mut().zip(&self.inputs[1..]) {
            output.update(input.get());
        }
        self.outputs[BUS_WIDTH - 1].update(self.shift_in.get());
    }
}
impl Default for LeftShifter {
    fn default() -> Self {
        Self::new()
    }
}
impl Component for LeftShifter {
    fn connect_output(&mut self, next: Link) {
        self.next = Some(next);
    }
    fn set_input_wire(&mut self, index: usize, value: bool) {
        self.inputs[index].update(value);
    }
    fn get_output_wire(&self, index: usize) -> bool {
        self.outputs[index].get()
    }
}

/// Shifts a 16-lane value one position toward the LSB.
///
/// The shift-in line fills the MSB (lane 0) and
/// the LSB (lane 15) leaves through [`shift_out`](Self::shift_out).
#[derive(Debug)]
pub struct RightShifter {
    inputs: [Wire; BUS_WIDTH],
    shift_in: Wire,
    shift_out: Wire,
    outputs: [Wire; BUS_WIDTH],
    next: Option<Link>
}
impl RightShifter {
    /// Creates a new right shifter with all lanes low.
    pub fn new() -> Self {
        Self {
            inputs: [Wire::new(); BUS_WIDTH],
            shift_in: Wire::new(),
            shift_out: Wire::new(),
            outputs: [Wire::new(); BUS_WIDTH],
            next: None
        }
    }

    /// The bit shifted out by the last [`update`](Self::update).
    pub fn shift_out(&self) -> bool {
        self.shift_out.get()
    }

    /// Latches `shift_in` and shifts the input lanes into the output lanes.
    pub fn update(&mut self, shift_in: bool) {
        self.shift_in.update(shift_in);
        self.outputs[0].update(self.shift_in.get());
        for (output, input) in self.outputs[1..].iter_mut().zip(&self.inputs) {
            output.update(input.get());
        }
        self.shift_out.update(self.inputs[BUS_WIDTH - 1].get());
    }
}
impl Default for RightShifter {
    fn default() -> Self {
        Self::new()
    }
}
impl Component for RightShifter {
    fn connect_output(&mut self, next: Link) {
        self.next = Some(next);
    }
    fn set_input_wire(&mut self, index: usize, value: bool) {
        self.inputs[index].update(value);
    }
    fn get_output_wire(&self, index: usize) -> bool {
        self.outputs[index].get()
    }
}

super::display_as_word!(LeftShifter, RightShifter);
