//! Model to entity mappers
//!
//! Rows convert into domain entities with `From` where the conversion cannot
//! fail and `TryFrom` where a stored string has to be parsed.

mod comment;
mod publication;
mod reaction;
