// Composition root for the shiftboard relay.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the reqwest-backed upstream client.
// - Wire use case handlers into the router state.
// - Map every failure onto the relay's error wire shape.

pub mod error;
pub mod http;
pub mod state;
