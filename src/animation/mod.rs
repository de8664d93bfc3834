pub(crate) mod interpolate;
pub(crate) mod oscillator;
pub(crate) mod spring;
