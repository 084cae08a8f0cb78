#![warn(missing_docs)]
//! 16-bit combinational blocks for a gate-level computer simulator.
//!
//! Every block in [`func`] is wired from the gate primitives in [`circuit`] and
//! evaluated synchronously: a driver writes input lanes, calls the block's `update`,
//! and reads output lanes. Lane 0 is always the most-significant bit.

pub mod circuit;
pub mod func;
pub mod word;

/// Number of lanes on every bus.
pub const BUS_WIDTH: usize = 16;

#[cfg(test)]
mod tests {
    use crate::func::{
        link, Ander, Bus, BusOne, Comparator, Component, Enabler, IsZero, LeftShifter, Noter,
        RightShifter,
    };
    use crate::word::Word;
    use crate::BUS_WIDTH;

    #[test]
    fn compare_and_zero_check() {
        let a = Word::new(0b0000_0000_0000_0101);
        let b = Word::new(0x0003);

        let mut cmp = Comparator::new();
        a.write_to(&mut cmp, 0);
        b.write_to(&mut cmp, BUS_WIDTH);
        cmp.update();
        assert!(!cmp.equal());
        assert!(cmp.larger(), "0x0005 should compare larger than 0x0003");

        let mut zero = IsZero::new();
        a.write_to(&mut zero, 0);
        zero.update();
        assert!(!zero.output());

        Word::ZERO.write_to(&mut zero, 0);
        zero.update();
        assert!(zero.output());
    }

    #[test]
    fn enabler_drives_shared_bus() {
        // Two sources share one bus; only the enabled one is visible.
        let bus = link(Bus::new());
        let mut reg_a = Enabler::new();
        let mut reg_b = Enabler::new();
        reg_a.connect_output(bus.clone());
        reg_b.connect_output(bus.clone());
        Word::new(0x1111).write_to(&mut reg_a, 0);
        Word::new(0x2222).write_to(&mut reg_b, 0);

        reg_a.update(true);
        assert_eq!(Word::read_from(&*bus.borrow()), Word::new(0x1111));

        reg_a.update(false);
        reg_b.update(true);
        assert_eq!(Word::read_from(&*bus.borrow()), Word::new(0x2222));
    }

    #[test]
    fn bus_one_feeds_bitwise_unit() {
        // bus -> bus-one -> bus, then AND the result with a mask.
        let source = link(Bus::new());
        let sink = link(Bus::new());
        let mut bus_one = BusOne::new(source.clone(), sink.clone());
        let mut and = Ander::new();

        Word::new(0xABCD).write_to(&mut *source.borrow_mut(), 0);
        for (enabled, expected) in [(false, 0x000D), (true, 0x0001)] {
            match enabled {
                true  => bus_one.enable(),
                false => bus_one.disable(),
            }
            bus_one.update();

            Word::read_from(&*sink.borrow()).write_to(&mut and, 0);
            Word::new(0x000F).write_to(&mut and, BUS_WIDTH);
            and.update();
            assert_eq!(Word::read_from(&and), Word::new(expected), "enabled={enabled}");
        }
    }

    #[test]
    fn rotate_through_shifters() {
        // Rotating left 16 times with the carry fed back restores the value.
        let start = Word::new(0x8421);
        let mut shl = LeftShifter::new();
        let mut value = start;
        for _ in 0..BUS_WIDTH {
            value.write_to(&mut shl, 0);
            shl.update(value.lane(0));
            value = Word::read_from(&shl);
        }
        assert_eq!(value, start);

        let mut shr = RightShifter::new();
        for _ in 0..4 {
            value.write_to(&mut shr, 0);
            shr.update(value.lane(BUS_WIDTH - 1));
            value = Word::read_from(&shr);
        }
        assert_eq!(value, Word::new(0x1842));
    }

    #[test]
    fn ones_complement_then_zero_check() {
        let mut not = Noter::new();
        let mut zero = IsZero::new();
        Word::MAX.write_to(&mut not, 0);
        not.update();
        Word::read_from(&not).write_to(&mut zero, 0);
        zero.update();
        assert!(zero.output(), "NOT 0xFFFF should be zero");
    }
}
