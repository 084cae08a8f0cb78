//! Composite 16-bit blocks built from the gate primitives in [`crate::circuit`].
//!
//! ## This module notably consists of:
//! - **[`Component`]**: The contract every block shares (connect, write one input lane, read one output lane).
//! - **[`Block`]**: An enum over every block kind, dispatching [`Component`].
//! - **Blocks**: bitwise arrays, shifters, the zero detector, the comparator,
//!   the enabler, the bus and the bus-one injector.
//!
//! Every block owns its input wires, gates and output wires. Outputs are only as current
//! as the block's last `update`; nothing re-evaluates on its own. Each block's `update`
//! takes the control lines that block needs, so it is an inherent method rather than part of
//! [`Component`].
//!
//! Lanes are MSB-first: lane 0 is the most-significant bit, lane 15 the least-significant.
use std::cell::RefCell;
use std::rc::Rc;

use enum_dispatch::enum_dispatch;
pub use bitwise::*;
pub use bus::*;
pub use compare::*;
pub use enabler::*;
pub use shift::*;
pub use zero::*;

mod bitwise;
mod bus;
mod compare;
mod enabler;
mod shift;
mod zero;

/// A shared handle to a block another block reads from or pushes into.
pub type Link = Rc<RefCell<dyn Component>>;

/// Wraps a block so it can be handed to [`Component::connect_output`] or to a
/// [`BusOne`] while the caller keeps its own handle.
///
/// ```
/// use circuitsim_blocks::func::{link, Bus, Component, Enabler};
/// use circuitsim_blocks::word::Word;
///
/// let bus = link(Bus::new());
/// let mut enabler = Enabler::new();
/// enabler.connect_output(bus.clone());
///
/// Word::new(0x1234).write_to(&mut enabler, 0);
/// enabler.update(true);
/// assert_eq!(Word::read_from(&*bus.borrow()), Word::new(0x1234));
/// ```
pub fn link<C: Component + 'static>(component: C) -> Rc<RefCell<C>> {
    Rc::new(RefCell::new(component))
}

/// The interface shared by every block.
///
/// Lane indices outside a block's wire arrays panic.
#[enum_dispatch]
pub trait Component: std::fmt::Debug {
    /// Records a downstream block.
    ///
    /// Only pushing blocks ([`Enabler`]) write into it on update;
    /// the others just hold on to it.
    fn connect_output(&mut self, next: Link);

    /// Writes one input lane.
    fn set_input_wire(&mut self, index: usize, value: bool);

    /// Reads one output lane.
    fn get_output_wire(&self, index: usize) -> bool;
}

/// An enum that represents every supported block.
#[enum_dispatch(Component)]
#[derive(Debug)]
#[allow(missing_docs)]
pub enum Block {
    // Bitwise
    Noter, Ander, Orer, Xorer,
    // Shifters
    LeftShifter, RightShifter,
    // Comparison
    IsZero, Comparator,
    // Bus plumbing
    Enabler, Bus, BusOne
}

/// Renders a block's 16 output lanes as a [`Word`](crate::word::Word).
macro_rules! display_as_word {
    ($($Id:ident),*$(,)?) => {
        $(
            impl std::fmt::Display for $Id {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::Display::fmt(&crate::word::Word::read_from(self), f)
                }
            }
        )*
    }
}
pub(crate) use display_as_word;
