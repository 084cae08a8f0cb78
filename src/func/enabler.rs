use crate::circuit::{And, Wire};
use crate::func::{Component, Link};
use crate::BUS_WIDTH;

/// A bank of 16 AND gates sharing one enable line.
///
/// While enabled the input passes through unchanged; otherwise every output lane is low.
/// After each update the outputs are pushed into the connected downstream block, which is
/// how a register becomes visible on a shared bus only while it is enabled.
#[derive(Debug)]
pub struct Enabler {
    inputs: [Wire; BUS_WIDTH],
    gates: [And; BUS_WIDTH],
    outputs: [Wire; BUS_WIDTH],
    next: Option<Link>
}
impl Enabler {
    /// Creates a new enabler with all lanes low and nothing connected.
    pub fn new() -> Self {
        Self {
            inputs: [Wire::new(); BUS_WIDTH],
            gates: [And::new(); BUS_WIDTH],
            outputs: [Wire::new(); BUS_WIDTH],
            next: None
        }
    }

    /// Gates every input lane with `enable`, then pushes all 16 outputs downstream.
    pub fn update(&mut self, enable: bool) {
        for ((input, gate), output) in self.inputs.iter().zip(&mut self.gates).zip(&mut self.outputs) {
            gate.update(input.get(), enable);
            output.update(gate.output());
        }

        if let Some(next) = &self.next {
            let mut next = next.borrow_mut();
            for (i, output) in self.outputs.iter().enumerate() {
                next.set_input_wire(i, output.get());
            }
            tracing::trace!(enable, "enabler pushed outputs downstream");
        }
    }
}
impl Default for Enabler {
    fn default() -> Self {
        Self::new()
    }
}
impl Component for Enabler {
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

super::display_as_word!(Enabler);
