//! Team directory routes. Reads degrade to empty lists, never to errors.
pub mod handlers;
