use crate::circuit::{And, Not, Or, Wire, Xor};
use crate::func::{Component, Link};
use crate::BUS_WIDTH;

/// A bank of 16 NOT gates, one per lane.
#[derive(Debug)]
pub struct Noter {
    inputs: [Wire; BUS_WIDTH],
    gates: [Not; BUS_WIDTH],
    outputs: [Wire; BUS_WIDTH],
    next: Option<Link>
}
impl Noter {
    /// Creates a new NOT array with all lanes low.
    pub fn new() -> Self {
        Self {
            inputs: [Wire::new(); BUS_WIDTH],
            gates: [Not::new(); BUS_WIDTH],
            outputs: [Wire::new(); BUS_WIDTH],
            next: None
        }
    }

    /// Inverts every input lane into the matching output lane.
    ///
    /// A connected downstream block is not written to.
    pub fn update(&mut self) {
        for ((input, gate), output) in self.inputs.iter().zip(&mut self.gates).zip(&mut self.outputs) {
            gate.update(input.get());
            output.update(gate.output());
        }
    }
}
impl Default for Noter {
    fn default() -> Self {
        Self::new()
    }
}
impl Component for Noter {
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

macro_rules! gate_arrays {
    ($($(#[$m:meta])? $Id:ident: $Gate:ident),*$(,)?) => {
        $(
            $(#[$m])?
            ///
            /// Input lanes 0..16 hold operand B and lanes 16..32 hold operand A;
            /// output lane `i` is the gate applied to A lane `i` and B lane `i`.
            #[derive(Debug)]
            pub struct $Id {
                inputs: [Wire; BUS_WIDTH * 2],
                gates: [$Gate; BUS_WIDTH],
                outputs: [Wire; BUS_WIDTH],
                next: Option<Link>
            }
            impl $Id {
                /// Creates a new instance of the array with all lanes low.
                pub fn new() -> Self {
                    Self {
                        inputs: [Wire::new(); BUS_WIDTH * 2],
                        gates: [$Gate::new(); BUS_WIDTH],
                        outputs: [Wire::new(); BUS_WIDTH],
                        next: None
                    }
                }

                /// Recomputes all 16 output lanes from the current input lanes.
                ///
                /// A connected downstream block is not written to.
                pub fn update(&mut self) {
                    let (b, a) = self.inputs.split_at(BUS_WIDTH);
                    for (i, gate) in self.gates.iter_mut().enumerate() {
                        gate.update(a[i].get(), b[i].get());
                        self.outputs[i].update(gate.output());
                    }
                }
            }
            impl Default for $Id {
                fn default() -> Self {
                    Self::new()
                }
            }
            impl Component for $Id {
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
        )*
    }
}

gate_arrays! {
    /// A bank of 16 AND gates.
    Ander: And,
    /// A bank of 16 OR gates.
    Orer: Or,
    /// A bank of 16 XOR gates.
    Xorer: Xor,
}

super::display_as_word!(Noter, Ander, Orer, Xorer);
