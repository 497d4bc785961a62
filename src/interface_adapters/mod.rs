// Interface adapters: wire protocol, HTTP clients, rendering, and the
// widget controller.

pub mod clients;
pub mod console;
pub mod controller;
pub mod html;
pub mod markup;
pub mod protocol;
pub mod state;
