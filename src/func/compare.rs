use crate::circuit::{And, And3, Not, Or, Wire, Xor};
use crate::func::{Component, Link};
use crate::BUS_WIDTH;

/// One bit of the magnitude comparator.
///
/// Given the bits `a` and `b` plus what the more-significant cells decided
/// (`equal_in`, `larger_in`), it computes:
/// - `diff = a XOR b` (the cell's [`output`](Self::output)),
/// - `equal = NOT diff AND equal_in`,
/// - `larger = (equal_in AND a AND diff) OR larger_in`.
///
/// `larger` is sticky: once a more-significant cell sets it, no later cell can clear it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Compare2 {
    input_a: Wire,
    input_b: Wire,
    xor1: Xor,
    not1: Not,
    and1: And,
    and3: And3,
    or1: Or,
    out: Wire,
    equal_in: Wire,
    equal_out: Wire,
    larger_in: Wire,
    larger_out: Wire
}
impl Compare2 {
    /// Creates a new compare cell with all lines low.
    pub const fn new() -> Self {
        Self {
            input_a: Wire::new(),
            input_b: Wire::new(),
            xor1: Xor::new(),
            not1: Not::new(),
            and1: And::new(),
            and3: And3::new(),
            or1: Or::new(),
            out: Wire::new(),
            equal_in: Wire::new(),
            equal_out: Wire::new(),
            larger_in: Wire::new(),
            larger_out: Wire::new()
        }
    }

    /// Whether this bit and every more-significant bit compared equal.
    pub fn equal(&self) -> bool {
        self.equal_out.get()
    }
    /// Whether A has been found larger at this or a more-significant bit.
    pub fn larger(&self) -> bool {
        self.larger_out.get()
    }
    /// Whether the two bits differ.
    pub fn output(&self) -> bool {
        self.out.get()
    }

    /// Evaluates the cell.
    pub fn update(&mut self, input_a: bool, input_b: bool, equal_in: bool, larger_in: bool) {
        self.input_a.update(input_a);
        self.input_b.update(input_b);
        self.equal_in.update(equal_in);
        self.larger_in.update(larger_in);

        self.xor1.update(self.input_a.get(), self.input_b.get());
        self.not1.update(self.xor1.output());
        self.and1.update(self.not1.output(), self.equal_in.get());
        self.equal_out.update(self.and1.output());

        self.and3.update(self.equal_in.get(), self.input_a.get(), self.xor1.output());
        self.or1.update(self.and3.output(), self.larger_in.get());
        self.larger_out.update(self.or1.output());

        self.out.update(self.xor1.output());
    }
}

/// A 16-bit unsigned magnitude comparator.
///
/// Input lanes 0..16 hold operand A and lanes 16..32 hold operand B
/// (the opposite packing of [`Ander`](crate::func::Ander) and friends).
/// Output lane `i` is high when A and B differ at lane `i`.
///
/// ```
/// use circuitsim_blocks::func::Comparator;
/// use circuitsim_blocks::word::Word;
/// use circuitsim_blocks::BUS_WIDTH;
///
/// let mut cmp = Comparator::new();
/// Word::new(0x0005).write_to(&mut cmp, 0);
/// Word::new(0x0003).write_to(&mut cmp, BUS_WIDTH);
/// cmp.update();
/// assert!(!cmp.equal());
/// assert!(cmp.larger());
/// ```
#[derive(Debug)]
pub struct Comparator {
    inputs: [Wire; BUS_WIDTH * 2],
    equal_in: Wire,
    a_is_larger_in: Wire,
    compares: [Compare2; BUS_WIDTH],
    outputs: [Wire; BUS_WIDTH],
    equal_out: Wire,
    a_is_larger_out: Wire,
    next: Option<Link>
}
impl Comparator {
    /// Creates a new comparator with all lanes low.
    pub fn new() -> Self {
        Self {
            inputs: [Wire::new(); BUS_WIDTH * 2],
            equal_in: Wire::new(),
            a_is_larger_in: Wire::new(),
            compares: [Compare2::new(); BUS_WIDTH],
            outputs: [Wire::new(); BUS_WIDTH],
            equal_out: Wire::new(),
            a_is_larger_out: Wire::new(),
            next: None
        }
    }

    /// Whether A equalled B at the last update.
    pub fn equal(&self) -> bool {
        self.equal_out.get()
    }
    /// Whether A was greater than B (unsigned) at the last update.
    pub fn larger(&self) -> bool {
        self.a_is_larger_out.get()
    }

    /// Runs the compare chain from the MSB (lane 0) down to the LSB (lane 15).
    pub fn update(&mut self) {
        // chain seed
        self.equal_in.update(true);
        self.a_is_larger_in.update(false);

        let (a, b) = self.inputs.split_at(BUS_WIDTH);
        for (i, cell) in self.compares.iter_mut().enumerate() {
            cell.update(a[i].get(), b[i].get(), self.equal_in.get(), self.a_is_larger_in.get());
            self.outputs[i].update(cell.output());
            self.equal_out.update(cell.equal());
            self.a_is_larger_out.update(cell.larger());

            self.equal_in.update(cell.equal());
            self.a_is_larger_in.update(cell.larger());
        }
        tracing::trace!(equal = self.equal(), larger = self.larger(), "comparator updated");
    }
}
impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}
impl Component for Comparator {
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

super::display_as_word!(Comparator);
