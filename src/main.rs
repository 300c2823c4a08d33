// Push-button demo for a Raspberry Pi Pico: a button between GPIO15 and ground, the on-board LED
// on GPIO25. The LED is lit while the button is down and every event is logged over RTT.

#![no_main]
#![no_std]

use core::cell::Cell;

use button_gesture::{Button, ButtonConfig, Event, Gesture, PinId};
use defmt::{error, info};
use defmt_rtt as _;
use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
};
use panic_probe as _;
use rp2040_hal::{pac, Watchdog};

/// The linker will place this boot block at the start of our program image. We
/// need this to help the ROM bootloader get our code up and running.
#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

const EXTERNAL_CRYSTAL_FREQUENCY_HZ: u32 = 12_000_000;
const SAMPLE_PERIOD_MS: u32 = 1;

#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Start of main()");
    let mut pac = pac::Peripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = rp2040_hal::clocks::init_clocks_and_plls(
        EXTERNAL_CRYSTAL_FREQUENCY_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Get the GPIO peripherals.
    let sio = rp2040_hal::Sio::new(pac.SIO);

    let pins =
        rp2040_hal::gpio::Pins::new(pac.IO_BANK0, pac.PADS_BANK0, sio.gpio_bank0, &mut pac.RESETS);

    let mut led = pins.gpio25.into_push_pull_output();
    let button_pin = pins.gpio15.into_pull_up_input();

    // The same counter both timestamps samples and paces the loop.
    let mut timer = rp2040_hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // Listeners only record what happened, the main loop acts on it.
    let lit = Cell::new(false);
    let light_on = |_: Event| lit.set(true);
    let light_off = |_: Event| lit.set(false);
    let log_event = |event: Event| info!("event: {=str}", event.name());

    let config = ButtonConfig::new(PinId::Digital(button_pin.id().num)).with_pull_up();
    let mut button: Button = match Button::new(config) {
        Ok(button) => button,
        Err(err) => defmt::panic!("Button configuration rejected: {}", err),
    };

    for event in Event::ALL {
        button.on(event, &log_event).unwrap();
    }
    button.on(Event::Down, &light_on).unwrap();
    button.on(Event::Up, &light_off).unwrap();

    let mut feed = config.controller.initialize(button_pin);

    info!("Start main loop");

    loop {
        let now = timer.get_counter();

        match button.sample(&mut feed, now) {
            Ok(gestures) => {
                for gesture in gestures {
                    if let (Gesture::Hold, Some(since)) = (gesture, button.pressed_since()) {
                        info!("held for {=u64} ms", (now - since).to_millis());
                    }
                }
            },
            Err(_) => error!("Failed to read button line"),
        }

        led.set_state(PinState::from(lit.get())).ok();

        timer.delay_ms(SAMPLE_PERIOD_MS);
    }
}
