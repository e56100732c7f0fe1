//! Bus and pin activity recorded on one timeline, to check chip-select framing across lines.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;

use mcp41hvx1::{Mcp41hvx1, NoPin, State};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Pin(&'static str, bool),
    Bus(Vec<u8>),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct FakePin {
    name: &'static str,
    log: Log,
}

impl OutputPin for FakePin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Pin(self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Pin(self.name, true));
        Ok(())
    }
}

/// Answers every read with `0xA5` in the high byte and the stored wiper in the low byte.
struct FakeBus {
    log: Log,
    wiper: u8,
}

impl Transfer<u8> for FakeBus {
    type Error = Infallible;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Infallible> {
        self.log.borrow_mut().push(Event::Bus(words.to_vec()));
        if *words == [0x0C, 0x00] {
            words.copy_from_slice(&[0xA5, self.wiper]);
        } else {
            words.iter_mut().for_each(|w| *w = 0xFF);
        }
        Ok(words)
    }
}

fn pin(name: &'static str, log: &Log) -> FakePin {
    FakePin {
        name,
        log: log.clone(),
    }
}

fn cs(level: bool) -> Event {
    Event::Pin("cs", level)
}

fn bus(bytes: &[u8]) -> Event {
    Event::Bus(bytes.to_vec())
}

#[test]
fn construction_drives_aux_lines_high() {
    let log: Log = Rc::default();
    let spi = FakeBus {
        log: log.clone(),
        wiper: 0,
    };

    let pot = Mcp41hvx1::with_control_pins(
        spi,
        pin("cs", &log),
        Some(pin("shdn", &log)),
        Some(pin("wlat", &log)),
    )
    .unwrap();

    assert_eq!(pot.resistor_network_state(), State::Enabled);
    assert_eq!(pot.write_latch_state(), State::Enabled);
    assert_eq!(
        *log.borrow(),
        vec![
            cs(true),
            Event::Pin("shdn", true),
            Event::Pin("shdn", true)
        ]
    );
}

#[test]
fn set_position_frames_write_and_read() {
    let log: Log = Rc::default();
    let spi = FakeBus {
        log: log.clone(),
        wiper: 0x33,
    };
    let mut pot = Mcp41hvx1::new(spi, pin("cs", &log)).unwrap();
    log.borrow_mut().clear();

    // The fake echoes its own wiper, not the written value.
    assert_eq!(pot.wiper_set_position(0x80).unwrap(), 0x33);

    assert_eq!(
        *log.borrow(),
        vec![
            cs(false),
            bus(&[0x00]),
            bus(&[0x80]),
            cs(true),
            cs(false),
            bus(&[0x0C, 0x00]),
            cs(true),
        ]
    );
}

#[test]
fn step_commands_frame_header_then_read() {
    let log: Log = Rc::default();
    let spi = FakeBus {
        log: log.clone(),
        wiper: 0x10,
    };
    let mut pot = Mcp41hvx1::new(spi, pin("cs", &log)).unwrap();
    log.borrow_mut().clear();

    assert_eq!(pot.wiper_increment().unwrap(), 0x10);
    assert_eq!(pot.wiper_decrement().unwrap(), 0x10);

    assert_eq!(
        *log.borrow(),
        vec![
            cs(false),
            bus(&[0x04]),
            cs(true),
            cs(false),
            bus(&[0x0C, 0x00]),
            cs(true),
            cs(false),
            bus(&[0x08]),
            cs(true),
            cs(false),
            bus(&[0x0C, 0x00]),
            cs(true),
        ]
    );
}

#[test]
fn every_bus_byte_is_inside_a_frame() {
    let log: Log = Rc::default();
    let spi = FakeBus {
        log: log.clone(),
        wiper: 0,
    };
    let mut pot = Mcp41hvx1::with_control_pins(
        spi,
        pin("cs", &log),
        Some(pin("shdn", &log)),
        None::<NoPin<Infallible>>,
    )
    .unwrap();

    for value in [0x00, 0x7F, 0xFF] {
        pot.wiper_set_position(value).unwrap();
        pot.resistor_network_disable().unwrap();
        pot.wiper_increment().unwrap();
        pot.resistor_network_enable().unwrap();
        pot.wiper_decrement().unwrap();
        pot.wiper_get_position().unwrap();
    }

    let mut selected = false;
    for event in log.borrow().iter() {
        match event {
            Event::Pin("cs", false) => {
                assert!(!selected, "CS asserted inside a transaction");
                selected = true;
            }
            Event::Pin("cs", true) => selected = false,
            Event::Bus(_) => assert!(selected, "bus traffic with CS released"),
            Event::Pin(_, _) => assert!(!selected, "control line moved mid-transaction"),
        }
    }
    assert!(!selected);
}

#[test]
fn unconfigured_lines_are_never_driven() {
    let log: Log = Rc::default();
    let spi = FakeBus {
        log: log.clone(),
        wiper: 0,
    };
    let mut pot = Mcp41hvx1::new(spi, pin("cs", &log)).unwrap();

    pot.resistor_network_disable().unwrap();
    pot.write_latch_disable().unwrap();
    pot.resistor_network_enable().unwrap();
    pot.write_latch_enable().unwrap();

    assert_eq!(pot.resistor_network_state(), State::Enabled);
    assert_eq!(pot.write_latch_state(), State::Enabled);
    assert_eq!(*log.borrow(), vec![cs(true)]);
}
