use crate::circuit::{And, Not, Or, Wire};
use crate::func::{Component, Link};
use crate::BUS_WIDTH;

/// A passive 16-lane bus.
///
/// Whatever is written to lane `i` reads back from lane `i` immediately.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bus {
    wires: [Wire; BUS_WIDTH]
}
impl Bus {
    /// Creates a new bus with all lanes low.
    pub fn new() -> Self {
        Self { wires: [Wire::new(); BUS_WIDTH] }
    }
}
impl Component for Bus {
    /// A bus is a sink; this is a no-op.
    fn connect_output(&mut self, _next: Link) {}

    fn set_input_wire(&mut self, index: usize, value: bool) {
        self.wires[index].update(value);
    }
    fn get_output_wire(&self, index: usize) -> bool {
        self.wires[index].get()
    }
}

/// Puts the constant 1 on a bus, or passes the bus through.
///
/// Every update reads the upstream bus, and writes to the downstream bus:
/// - enabled: `0x0001`, whatever the input;
/// - disabled: the input unchanged.
///
/// Lanes 0..15 go through `input AND NOT enable`; lane 15 goes through `input OR enable`.
///
/// ```
/// use circuitsim_blocks::func::{link, Bus, BusOne};
/// use circuitsim_blocks::word::Word;
///
/// let (upstream, downstream) = (link(Bus::new()), link(Bus::new()));
/// Word::new(0xABCD).write_to(&mut *upstream.borrow_mut(), 0);
///
/// let mut bus_one = BusOne::new(upstream.clone(), downstream.clone());
/// bus_one.enable();
/// bus_one.update();
/// assert_eq!(Word::read_from(&*downstream.borrow()), Word::ONE);
///
/// bus_one.disable();
/// bus_one.update();
/// assert_eq!(Word::read_from(&*downstream.borrow()), Word::new(0xABCD));
/// ```
#[derive(Debug)]
pub struct BusOne {
    input_bus: Link,
    output_bus: Link,
    inputs: [Wire; BUS_WIDTH],
    bus1: Wire,
    and_gates: [And; BUS_WIDTH - 1],
    not_gate: Not,
    or_gate: Or,
    outputs: [Wire; BUS_WIDTH],
    next: Option<Link>
}
impl BusOne {
    /// Creates a new, disabled injector reading `input_bus` and writing `output_bus`.
    pub fn new(input_bus: Link, output_bus: Link) -> Self {
        Self {
            input_bus,
            output_bus,
            inputs: [Wire::new(); BUS_WIDTH],
            bus1: Wire::new(),
            and_gates: [And::new(); BUS_WIDTH - 1],
            not_gate: Not::new(),
            or_gate: Or::new(),
            outputs: [Wire::new(); BUS_WIDTH],
            next: None
        }
    }

    /// Sets the enable line. Takes effect on the next [`update`](Self::update).
    pub fn enable(&mut self) {
        self.bus1.update(true);
    }
    /// Clears the enable line. Takes effect on the next [`update`](Self::update).
    pub fn disable(&mut self) {
        self.bus1.update(false);
    }

    /// Latches the upstream bus, computes the outputs, and writes them to the downstream bus.
    pub fn update(&mut self) {
        {
            let input_bus = self.input_bus.borrow();
            for (i, input) in self.inputs.iter_mut().enumerate().rev() {
                input.update(input_bus.get_output_wire(i));
            }
        }

        self.not_gate.update(self.bus1.get());
        for (gate, input) in self.and_gates.iter_mut().zip(&self.inputs) {
            gate.update(input.get(), self.not_gate.output());
        }
        self.or_gate.update(self.inputs[BUS_WIDTH - 1].get(), self.bus1.get());

        for (output, gate) in self.outputs.iter_mut().zip(&self.and_gates) {
            output.update(gate.output());
        }
        self.outputs[BUS_WIDTH - 1].update(self.or_gate.output());

        let mut output_bus = self.output_bus.borrow_mut();
        for (i, output) in self.outputs.iter().enumerate().rev() {
            output_bus.set_input_wire(i, output.get());
        }
        tracing::trace!(enabled = self.bus1.get(), "bus-one injector updated");
    }
}
impl Component for BusOne {
    /// Records a block without writing to it; the downstream bus given to
    /// [`BusOne::new`] is what [`BusOne::update`] writes.
    fn connect_output(&mut self, next: Link) {
        self.next = Some(next);
    }
    /// Writes the latch for one lane. The next update overwrites it from the upstream bus.
    fn set_input_wire(&mut self, index: usize, value: bool) {
        self.inputs[index].update(value);
    }
    fn get_output_wire(&self, index: usize) -> bool {
        self.outputs[index].get()
    }
}

super::display_as_word!(Bus, BusOne);
