//! Minimal PNG writer for solid-color 2x2 truecolor textures, plus a decoder-backed inspector.

pub(crate) mod chunk;
pub(crate) mod encode;
pub(crate) mod inspect;
