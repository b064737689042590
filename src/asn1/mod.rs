//! ROS message to ASN.1 type-module conversion
//!
//! Message definitions are located as `<package>/msg/<Name>.msg` files under
//! a search path ([`msg::MessageIndex`]), parsed into field lists ([`msg`]),
//! and rendered as ASN.1 modules consumable by the TASTE data view
//! ([`generator`]). Non-primitive field types are queued and converted
//! transitively.

pub mod generator;
pub mod msg;
pub mod types;
