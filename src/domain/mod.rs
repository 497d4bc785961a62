// Domain layer: booking entities, validation rules, and ports.

pub mod checkout;
pub mod dates;
pub mod errors;
pub mod guest;
pub mod money;
pub mod offers;
pub mod ports;
pub mod stay;
