// Domain layer: the sound-making values and the ports (traits) they are used through.

pub mod model;
pub mod ports;
