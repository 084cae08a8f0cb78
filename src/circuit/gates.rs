use crate::circuit::Wire;

macro_rules! gates {
    ($($(#[$m:meta])? $Id:ident: $f:expr),*$(,)?) => {
        $(
            $(#[$m])?
            #[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
            pub struct $Id {
                output: Wire
            }
            impl $Id {
                /// Creates a new instance of the gate with its output driven low.
                pub const fn new() -> Self {
                    Self { output: Wire::new() }
                }

                /// Recomputes the gate's output from its two inputs.
                pub fn update(&mut self, a: bool, b: bool) {
                    let f: fn(bool, bool) -> bool = $f;
                    self.output.update(f(a, b));
                }

                /// The output computed by the last [`update`](Self::update).
                pub const fn output(&self) -> bool {
                    self.output.get()
                }
            }
        )*
    }
}

gates! {
    /// A 2-input AND gate.
    And: |a, b| a & b,
    /// A 2-input OR gate.
    Or:  |a, b| a | b,
    /// A 2-input XOR gate.
    Xor: |a, b| a ^ b,
}

/// A NOT gate.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Not {
    output: Wire
}
impl Not {
    /// Creates a new instance of the NOT gate.
    ///
    /// Its output stays low until the first [`update`](Self::update).
    pub const fn new() -> Self {
        Self { output: Wire::new() }
    }

    /// Recomputes the gate's output from its input.
    pub fn update(&mut self, a: bool) {
        self.output.update(!a);
    }

    /// The output computed by the last [`update`](Self::update).
    pub const fn output(&self) -> bool {
        self.output.get()
    }
}

/// A 3-input AND gate, wired as `(a AND b) AND c`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct And3 {
    and_ab: And,
    and_c: And,
    output: Wire
}
impl And3 {
    /// Creates a new instance of the 3-input AND gate.
    pub const fn new() -> Self {
        Self { and_ab: And::new(), and_c: And::new(), output: Wire::new() }
    }

    /// Recomputes the gate's output from its three inputs.
    pub fn update(&mut self, a: bool, b: bool, c: bool) {
        self.and_ab.update(a, b);
        self.and_c.update(self.and_ab.output(), c);
        self.output.update(self.and_c.output());
    }

    /// The output computed by the last [`update`](Self::update).
    pub const fn output(&self) -> bool {
        self.output.get()
    }
}
