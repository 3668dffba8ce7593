pub mod submit_pantry;
