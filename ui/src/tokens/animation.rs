// Animation Token System

use zoon::*;

pub const DURATION_FAST: u32 = 150;
pub const DURATION_NORMAL: u32 = 300;

/// Seconds per spinner revolution
pub const SPINNER_PERIOD_SECONDS: i64 = 1;

pub fn transition_fast() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_FAST)])
}

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_NORMAL),
        Transition::property("border-color").duration(DURATION_NORMAL),
        Transition::property("color").duration(DURATION_NORMAL),
    ])
}

// Continuous spinner animation
pub fn create_spinner() -> Oscillator {
    let oscillator = Oscillator::new(Duration::seconds(SPINNER_PERIOD_SECONDS));
    oscillator.cycle_wrap();
    oscillator
}
